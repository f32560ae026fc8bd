//! The crop-rectangle computation.
//!
//! Given the natural size of a source image and the size it is currently
//! displayed at, selects the largest sub-rectangle of the source that matches
//! the displayed aspect ratio, then places it inside the source according to
//! the anchor position. The result is what the host canvas uses as the
//! `drawImage` source region, so the displayed image fills its box without
//! distortion.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the source image
//! - All values are source-image pixels as `f64`

use crate::anchor::AnchorPosition;
use crate::geometry::{CropRect, Dimensions};

/// Compute the anchored crop rectangle for a source displayed at `target`.
///
/// When the target is proportionally wider than the source, the crop keeps
/// the full source width and trims height; otherwise it keeps the full
/// height and trims width. The anchor then decides how the trimmed axis is
/// offset: left/top pin to 0, center/middle split the slack evenly,
/// right/bottom take all of it.
///
/// # Arguments
///
/// * `source` - Natural size of the image asset (both components > 0)
/// * `target` - Size the image is currently displayed at (both > 0)
/// * `anchor` - Which part of the source stays visible
///
/// # Returns
///
/// A `CropRect` with non-negative offsets whose extent fits inside `source`
/// and whose aspect ratio equals the target's.
pub fn compute_crop(source: Dimensions, target: Dimensions, anchor: AnchorPosition) -> CropRect {
    let target_ratio = target.aspect_ratio();
    let source_ratio = source.aspect_ratio();

    let (width, height) = if target_ratio >= source_ratio {
        (source.width, source.width / target_ratio)
    } else {
        (source.height * target_ratio, source.height)
    };

    // Rounding can push the trimmed axis a hair past the source extent when
    // the ratios are near-equal; the slack must not go negative.
    let horizontal_slack = (source.width - width).max(0.0);
    let vertical_slack = (source.height - height).max(0.0);

    CropRect {
        x: anchor.horizontal_offset(horizontal_slack),
        y: anchor.vertical_offset(vertical_slack),
        width,
        height,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for positive dimensions in a realistic pixel range.
    fn dimensions_strategy() -> impl Strategy<Value = Dimensions> {
        (1.0f64..=4096.0, 1.0f64..=4096.0).prop_map(|(w, h)| Dimensions::new(w, h))
    }

    fn anchor_strategy() -> impl Strategy<Value = AnchorPosition> {
        prop::sample::select(AnchorPosition::ALL.to_vec())
    }

    proptest! {
        /// Property: The crop rectangle stays inside the source image.
        #[test]
        fn prop_crop_contained_in_source(
            source in dimensions_strategy(),
            target in dimensions_strategy(),
            anchor in anchor_strategy(),
        ) {
            let crop = compute_crop(source, target, anchor);

            prop_assert!(crop.x >= 0.0, "x should be non-negative, got {}", crop.x);
            prop_assert!(crop.y >= 0.0, "y should be non-negative, got {}", crop.y);
            prop_assert!(
                crop.x + crop.width <= source.width * (1.0 + 1e-9),
                "right edge {} exceeds source width {}",
                crop.x + crop.width,
                source.width
            );
            prop_assert!(
                crop.y + crop.height <= source.height * (1.0 + 1e-9),
                "bottom edge {} exceeds source height {}",
                crop.y + crop.height,
                source.height
            );
        }

        /// Property: The crop's aspect ratio matches the target's.
        #[test]
        fn prop_crop_matches_target_ratio(
            source in dimensions_strategy(),
            target in dimensions_strategy(),
            anchor in anchor_strategy(),
        ) {
            let crop = compute_crop(source, target, anchor);
            let target_ratio = target.aspect_ratio();

            prop_assert!(
                (crop.aspect_ratio() - target_ratio).abs() <= target_ratio * 1e-9,
                "crop ratio {} differs from target ratio {}",
                crop.aspect_ratio(),
                target_ratio
            );
        }

        /// Property: The crop extent is positive.
        #[test]
        fn prop_crop_extent_positive(
            source in dimensions_strategy(),
            target in dimensions_strategy(),
            anchor in anchor_strategy(),
        ) {
            let crop = compute_crop(source, target, anchor);

            prop_assert!(crop.width > 0.0);
            prop_assert!(crop.height > 0.0);
        }

        /// Property: One source axis always survives in full.
        #[test]
        fn prop_one_axis_kept_whole(
            source in dimensions_strategy(),
            target in dimensions_strategy(),
            anchor in anchor_strategy(),
        ) {
            let crop = compute_crop(source, target, anchor);

            let keeps_width = (crop.width - source.width).abs() < source.width * 1e-9;
            let keeps_height = (crop.height - source.height).abs() < source.height * 1e-9;
            prop_assert!(
                keeps_width || keeps_height,
                "crop {}x{} keeps neither source axis of {}x{}",
                crop.width,
                crop.height,
                source.width,
                source.height
            );
        }

        /// Property: Computation is deterministic.
        #[test]
        fn prop_compute_is_deterministic(
            source in dimensions_strategy(),
            target in dimensions_strategy(),
            anchor in anchor_strategy(),
        ) {
            let first = compute_crop(source, target, anchor);
            let second = compute_crop(source, target, anchor);
            prop_assert_eq!(first, second);
        }

        /// Property: Center-middle splits the slack evenly on both axes.
        #[test]
        fn prop_center_middle_symmetric(
            source in dimensions_strategy(),
            target in dimensions_strategy(),
        ) {
            let crop = compute_crop(source, target, AnchorPosition::CenterMiddle);

            prop_assert!((crop.x - (source.width - crop.width) / 2.0).abs() < 1e-6);
            prop_assert!((crop.y - (source.height - crop.height) / 2.0).abs() < 1e-6);
        }

        /// Property: Left/top anchors pin their axis to the origin and
        /// right/bottom anchors push it flush against the far edge.
        #[test]
        fn prop_extreme_anchors_touch_edges(
            source in dimensions_strategy(),
            target in dimensions_strategy(),
        ) {
            let left_top = compute_crop(source, target, AnchorPosition::LeftTop);
            prop_assert_eq!(left_top.x, 0.0);
            prop_assert_eq!(left_top.y, 0.0);

            let right_bottom = compute_crop(source, target, AnchorPosition::RightBottom);
            prop_assert!(
                (right_bottom.x + right_bottom.width - source.width).abs()
                    < source.width * 1e-9
            );
            prop_assert!(
                (right_bottom.y + right_bottom.height - source.height).abs()
                    < source.height * 1e-9
            );
        }
    }
}
