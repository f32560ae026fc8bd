//! Draw-op derivation for the host canvas.
//!
//! The host renders an image object with a single `drawImage`-style call:
//! copy a source sub-rectangle of the asset into a destination rectangle in
//! the object's local space. This module derives those parameters from a
//! [`CroppedImage`] so the host never has to look at crop state itself, and
//! never receives a zero or negative-area source rectangle even if upstream
//! geometry produced one transiently.

use serde::{Deserialize, Serialize};

use crate::geometry::CropRect;
use crate::image::CroppedImage;

/// A rectangle in the object's local coordinate space. The host convention
/// puts the origin at the object center, so a full draw spans
/// `(-width/2, -height/2)` to `(width/2, height/2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DestRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Parameters for one host `drawImage` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawOp {
    /// Source sub-rectangle of the asset, in source pixels.
    pub source: CropRect,
    /// Destination rectangle in object-local space.
    pub dest: DestRect,
}

/// Derive the `drawImage` parameters for `image`.
///
/// With cropping disabled the full asset is drawn unmodified. Otherwise the
/// cached crop rectangle is used with its offsets clamped to zero and its
/// extent clamped to at least one source pixel.
pub fn draw_op(image: &CroppedImage) -> DrawOp {
    let size = image.size();
    let dest = DestRect {
        left: -size.width / 2.0,
        top: -size.height / 2.0,
        width: size.width.max(0.0),
        height: size.height.max(0.0),
    };

    let source = if image.crop_disabled() {
        CropRect::full(image.natural())
    } else {
        let crop = image.crop();
        CropRect {
            x: crop.x.max(0.0),
            y: crop.y.max(0.0),
            width: crop.width.max(1.0),
            height: crop.height.max(1.0),
        }
    };

    DrawOp { source, dest }
}
