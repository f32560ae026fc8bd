//! WASM bindings for the editor session.
//!
//! `JsSession` is the state the host's UI handlers act on: the single active
//! image and the single held snapshot. The toggle/save/load buttons and the
//! control-handle drag callbacks each map to one method here.

use cropframe_core::{Dimensions, Handle, Session};
use wasm_bindgen::prelude::*;

use crate::image::JsCroppedImage;

/// One editing session for the host canvas.
#[wasm_bindgen]
pub struct JsSession {
    inner: Session,
}

impl Default for JsSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsSession {
        JsSession {
            inner: Session::new(),
        }
    }

    #[wasm_bindgen(getter, js_name = hasActive)]
    pub fn has_active(&self) -> bool {
        self.inner.active().is_some()
    }

    #[wasm_bindgen(getter, js_name = hasSnapshot)]
    pub fn has_snapshot(&self) -> bool {
        self.inner.held_snapshot().is_some()
    }

    /// Install a freshly loaded image as the active object.
    pub fn insert(&mut self, image: JsCroppedImage) {
        self.inner.insert(image.into_inner());
    }

    /// Drop the active image, as when the canvas is cleared.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Toggle crop on the active image. Returns true when the host should
    /// redraw.
    #[wasm_bindgen(js_name = toggleCrop)]
    pub fn toggle_crop(&mut self) -> bool {
        self.inner.toggle_crop()
    }

    /// Re-run the crop computation for a drag at the host corner tag
    /// (`"mr"`, `"tl"`, `"mtr"`, ...) when the handle policy calls for it.
    /// Returns true when a recompute ran; unknown tags warn and return false.
    #[wasm_bindgen(js_name = handleDrag)]
    pub fn handle_drag(&mut self, corner: &str, shift_key: bool) -> bool {
        let Some(handle) = Handle::from_corner_tag(corner) else {
            crate::warn(&format!("unknown control corner \"{corner}\""));
            return false;
        };
        self.inner.handle_drag(handle, shift_key)
    }

    /// Serialize the active image into the held slot and clear the canvas.
    pub fn save(&mut self) -> bool {
        self.inner.save()
    }

    /// Rebuild the active image from the held snapshot once the host has
    /// reloaded the asset and reports its natural size.
    pub fn load(&mut self, natural_width: f64, natural_height: f64) -> Result<(), JsValue> {
        self.inner
            .load(Dimensions::new(natural_width, natural_height))
            .map(|_| ())
            .map_err(|e| JsValue::from(e.to_string()))
    }

    /// The held snapshot in the host format, or `undefined` when the slot is
    /// empty.
    #[wasm_bindgen(js_name = heldSnapshot)]
    pub fn held_snapshot(&self) -> Result<JsValue, JsValue> {
        match self.inner.held_snapshot() {
            Some(snapshot) => {
                serde_wasm_bindgen::to_value(snapshot).map_err(|e| JsValue::from(e.to_string()))
            }
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// The active image's `drawImage` parameters, or `undefined` with no
    /// active image.
    #[wasm_bindgen(js_name = activeDrawOp)]
    pub fn active_draw_op(&self) -> Result<JsValue, JsValue> {
        match self.inner.active() {
            Some(image) => serde_wasm_bindgen::to_value(&cropframe_core::draw_op(image))
                .map_err(|e| JsValue::from(e.to_string())),
            None => Ok(JsValue::UNDEFINED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropframe_core::{CroppedImage, ImageOptions};

    fn session_with_image() -> JsSession {
        let mut session = JsSession::new();
        let mut inner = CroppedImage::new(
            "photo.jpg",
            Dimensions::new(800.0, 600.0),
            ImageOptions::default(),
        );
        inner.scale_to_width(400.0);
        session.insert(JsCroppedImage::from_inner(inner));
        session
    }

    #[test]
    fn test_empty_session() {
        let mut session = JsSession::new();
        assert!(!session.has_active());
        assert!(!session.has_snapshot());
        assert!(!session.toggle_crop());
        assert!(!session.save());
    }

    #[test]
    fn test_toggle_and_drag() {
        let mut session = session_with_image();

        assert!(session.toggle_crop());
        // Disabled image: drags skip the recompute.
        assert!(!session.handle_drag("mr", false));

        assert!(session.toggle_crop());
        assert!(session.handle_drag("mr", false));
        assert!(!session.handle_drag("tl", false));
        assert!(session.handle_drag("tl", true));
    }

    #[test]
    fn test_unknown_corner_tag_is_ignored() {
        let mut session = session_with_image();
        assert!(!session.handle_drag("zz", true));
    }

    #[test]
    fn test_save_then_load() {
        let mut session = session_with_image();

        assert!(session.save());
        assert!(!session.has_active());
        assert!(session.has_snapshot());

        session.load(800.0, 600.0).unwrap();
        assert!(session.has_active());
        // The slot is reusable.
        assert!(session.has_snapshot());
    }
}
