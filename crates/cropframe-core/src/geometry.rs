//! Geometry primitives shared across the crate.
//!
//! All values are in pixels as `f64`, matching the host canvas object model.
//! `Dimensions` describes either a source asset's natural size or the size an
//! object is currently displayed at; `CropRect` is always in source-image
//! coordinates with the origin at the top-left corner.

use serde::{Deserialize, Serialize};

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Create a new dimensions pair.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Both components strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// A sub-rectangle of a source image, in source pixel coordinates.
///
/// Produced by the crop calculator; `x`/`y` are non-negative and the extent
/// never exceeds the source dimensions it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    /// A rectangle covering the whole of `source`.
    pub fn full(source: Dimensions) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: source.width,
            height: source.height,
        }
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}
