//! WASM bindings for the crop-rectangle computation.

use cropframe_core::{compute_crop as core_compute, Dimensions};
use wasm_bindgen::prelude::*;

use crate::types::{parse_clip_position, JsCropRect};

/// Compute the anchored crop rectangle for a source image displayed at the
/// given target size.
///
/// Selects the largest sub-rectangle of the source that matches the target's
/// aspect ratio, placed according to `clip_position` (one of the nine tags,
/// e.g. `"center-middle"`; unknown tags fall back to center-middle with a
/// console warning).
///
/// # Arguments
///
/// * `source_width`, `source_height` - Natural size of the asset (> 0)
/// * `target_width`, `target_height` - Displayed size (> 0)
/// * `clip_position` - Anchor tag
///
/// # Example (TypeScript)
///
/// ```typescript
/// const crop = compute_crop(img.naturalWidth, img.naturalHeight,
///                           obj.getScaledWidth(), obj.getScaledHeight(),
///                           'center-middle');
/// ctx.drawImage(img, crop.x, crop.y, crop.width, crop.height, ...);
/// ```
#[wasm_bindgen]
pub fn compute_crop(
    source_width: f64,
    source_height: f64,
    target_width: f64,
    target_height: f64,
    clip_position: &str,
) -> JsCropRect {
    let crop = core_compute(
        Dimensions::new(source_width, source_height),
        Dimensions::new(target_width, target_height),
        parse_clip_position(clip_position),
    );
    JsCropRect::from_core(crop)
}
