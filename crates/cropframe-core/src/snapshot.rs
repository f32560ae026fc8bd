//! JSON snapshots of the cropped-image entity.
//!
//! A snapshot carries the crop attributes (`cropWidth`, `cropHeight`,
//! `disableCrop`, `clipPosition`) on top of the host object model's standard
//! attribute set, using the host's camelCase field names so snapshots stay
//! interchangeable with its own serializer. A snapshot can outlive the
//! in-memory entity; reconstruction needs the host to reload the asset from
//! `src` first and report its natural size.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::anchor::AnchorPosition;
use crate::geometry::{CropRect, Dimensions};
use crate::image::CroppedImage;

/// Errors reconstructing an entity from a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The host loader reported a degenerate element size.
    #[error("natural size must be positive, got {width}x{height}")]
    NonPositiveNaturalSize { width: f64, height: f64 },
}

/// Serialized attribute set of a [`CroppedImage`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Asset URL/reference; the host reloads from here.
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_origin: Option<String>,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Anchor tag, e.g. `"center-middle"`. Kept as a raw string so an
    /// unknown tag survives parsing and falls back to the default anchor at
    /// reconstruction instead of failing the whole snapshot.
    pub clip_position: String,
    pub crop_width: f64,
    pub crop_height: f64,
    pub disable_crop: bool,
}

impl CroppedImage {
    /// Capture the entity's attributes for a later reconstruction.
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            src: self.src.clone(),
            cross_origin: self.cross_origin.clone(),
            left: self.left,
            top: self.top,
            width: self.width,
            height: self.height,
            scale_x: self.scale_x,
            scale_y: self.scale_y,
            clip_position: self.anchor.tag().to_string(),
            crop_width: self.crop.width,
            crop_height: self.crop.height,
            disable_crop: self.crop_disabled,
        }
    }

    /// Rebuild an entity from a snapshot once the host has reloaded the
    /// asset and reports its natural size.
    ///
    /// Unknown `clipPosition` tags fall back to center-middle; callers that
    /// want to surface the fallback can pre-check with
    /// [`AnchorPosition::from_tag`]. The crop is recomputed for the restored
    /// geometry unless the snapshot was taken with cropping disabled.
    pub fn from_snapshot(
        snapshot: &Snapshot,
        natural: Dimensions,
    ) -> Result<CroppedImage, SnapshotError> {
        if !natural.is_positive() {
            return Err(SnapshotError::NonPositiveNaturalSize {
                width: natural.width,
                height: natural.height,
            });
        }

        let anchor = AnchorPosition::from_tag(&snapshot.clip_position).unwrap_or_default();

        let mut image = CroppedImage {
            src: snapshot.src.clone(),
            cross_origin: snapshot.cross_origin.clone(),
            natural,
            left: snapshot.left,
            top: snapshot.top,
            width: snapshot.width,
            height: snapshot.height,
            scale_x: snapshot.scale_x,
            scale_y: snapshot.scale_y,
            anchor,
            crop: CropRect {
                x: 0.0,
                y: 0.0,
                width: snapshot.crop_width,
                height: snapshot.crop_height,
            },
            crop_disabled: snapshot.disable_crop,
            saved_crop_offset: None,
            coords_dirty: true,
        };
        image.apply_crop();
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageOptions;

    fn sample_image() -> CroppedImage {
        let mut image = CroppedImage::new(
            "https://example.test/photo.jpg",
            Dimensions::new(800.0, 600.0),
            ImageOptions {
                left: 10.0,
                top: 50.0,
                anchor: AnchorPosition::RightBottom,
                ..Default::default()
            },
        );
        image.set_size(400.0, 400.0);
        image
    }

    #[test]
    fn test_round_trip_restores_geometry() {
        let original = sample_image();
        let snapshot = original.to_snapshot();

        let restored =
            CroppedImage::from_snapshot(&snapshot, Dimensions::new(800.0, 600.0)).unwrap();

        assert_eq!(restored.src(), original.src());
        assert_eq!(restored.position(), original.position());
        assert_eq!(restored.anchor(), AnchorPosition::RightBottom);
        assert!(!restored.crop_disabled());

        // Same natural and displayed dimensions, so the recomputed crop
        // matches the captured one.
        let before = original.crop();
        let after = restored.crop();
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
        assert!((after.width - before.width).abs() < 1e-9);
        assert!((after.height - before.height).abs() < 1e-9);
    }

    #[test]
    fn test_disabled_snapshot_skips_recompute() {
        let mut original = sample_image();
        original.disable_crop();
        let snapshot = original.to_snapshot();
        assert!(snapshot.disable_crop);

        let restored =
            CroppedImage::from_snapshot(&snapshot, Dimensions::new(800.0, 600.0)).unwrap();
        assert!(restored.crop_disabled());
        // The stored extent survives untouched.
        assert_eq!(restored.crop().width, snapshot.crop_width);
        assert_eq!(restored.crop().height, snapshot.crop_height);
    }

    #[test]
    fn test_unknown_clip_position_defaults() {
        let mut snapshot = sample_image().to_snapshot();
        snapshot.clip_position = "upside-down".to_string();

        let restored =
            CroppedImage::from_snapshot(&snapshot, Dimensions::new(800.0, 600.0)).unwrap();
        assert_eq!(restored.anchor(), AnchorPosition::CenterMiddle);
    }

    #[test]
    fn test_degenerate_natural_size_rejected() {
        let snapshot = sample_image().to_snapshot();

        let result = CroppedImage::from_snapshot(&snapshot, Dimensions::new(0.0, 600.0));
        assert!(matches!(
            result,
            Err(SnapshotError::NonPositiveNaturalSize { .. })
        ));
    }

    #[test]
    fn test_json_uses_host_field_names() {
        let snapshot = sample_image().to_snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["src"], "https://example.test/photo.jpg");
        assert_eq!(json["clipPosition"], "right-bottom");
        assert_eq!(json["cropWidth"], 600.0);
        assert_eq!(json["cropHeight"], 600.0);
        assert_eq!(json["disableCrop"], false);
        assert_eq!(json["scaleX"], 1.0);
        // Absent cross-origin is omitted, matching the host serializer.
        assert!(json.get("crossOrigin").is_none());
    }

    #[test]
    fn test_parses_host_json() {
        let json = r#"{
            "src": "photo.png",
            "left": 0.0,
            "top": 0.0,
            "width": 640.0,
            "height": 480.0,
            "scaleX": 0.5,
            "scaleY": 0.5,
            "clipPosition": "left-top",
            "cropWidth": 640.0,
            "cropHeight": 480.0,
            "disableCrop": true
        }"#;

        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.clip_position, "left-top");
        assert!(snapshot.disable_crop);
        assert_eq!(snapshot.cross_origin, None);
    }
}
