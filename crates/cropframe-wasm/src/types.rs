//! WASM-compatible wrapper types and shared boundary plumbing.

use cropframe_core::{AnchorPosition, CropRect};
use wasm_bindgen::prelude::*;

/// A crop rectangle exposed to JavaScript, in source-image pixels.
#[wasm_bindgen]
pub struct JsCropRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl JsCropRect {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl JsCropRect {
    pub(crate) fn from_core(rect: CropRect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Parse a clip-position tag from the host.
///
/// Unknown tags fall back to center-middle with a console warning, matching
/// the defensive contract: a bad tag is a diagnostic, never a failure.
pub(crate) fn parse_clip_position(tag: &str) -> AnchorPosition {
    AnchorPosition::from_tag(tag).unwrap_or_else(|| {
        crate::warn(&format!(
            "unknown clip position \"{tag}\", falling back to center-middle"
        ));
        AnchorPosition::default()
    })
}
