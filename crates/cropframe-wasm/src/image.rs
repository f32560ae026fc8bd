//! WASM bindings for the cropped-image entity.
//!
//! `JsCroppedImage` wraps the core entity for the JavaScript host. The host
//! drives it from its transform handlers (scale/size setters), its draw
//! callback (`drawOp`), and its serializer (`toSnapshot`/`fromSnapshot`);
//! the crop bookkeeping stays on this side of the boundary.

use cropframe_core::{render, CroppedImage, Dimensions, ImageOptions, Snapshot};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::types::parse_clip_position;

/// Construction options accepted from JavaScript, mirroring the snapshot
/// field names.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct JsImageOptions {
    left: f64,
    top: f64,
    clip_position: Option<String>,
    disable_crop: bool,
    cross_origin: Option<String>,
}

/// One image object with an anchored crop, exposed to JavaScript.
#[wasm_bindgen]
pub struct JsCroppedImage {
    inner: CroppedImage,
}

#[wasm_bindgen]
impl JsCroppedImage {
    /// Create an entity for a freshly loaded element.
    ///
    /// `options` is an optional plain object: `{ left, top, clipPosition,
    /// disableCrop, crossOrigin }`. A missing or unknown `clipPosition`
    /// falls back to center-middle.
    #[wasm_bindgen(constructor)]
    pub fn new(
        src: String,
        natural_width: f64,
        natural_height: f64,
        options: JsValue,
    ) -> Result<JsCroppedImage, JsValue> {
        let options: JsImageOptions = if options.is_undefined() || options.is_null() {
            JsImageOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from(e.to_string()))?
        };

        let anchor = options
            .clip_position
            .as_deref()
            .map(parse_clip_position)
            .unwrap_or_default();

        let inner = CroppedImage::new(
            src,
            Dimensions::new(natural_width, natural_height),
            ImageOptions {
                left: options.left,
                top: options.top,
                anchor,
                crop_disabled: options.disable_crop,
                cross_origin: options.cross_origin,
            },
        );
        Ok(JsCroppedImage { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn src(&self) -> String {
        self.inner.src().to_string()
    }

    #[wasm_bindgen(getter, js_name = clipPosition)]
    pub fn clip_position(&self) -> String {
        self.inner.anchor().tag().to_string()
    }

    #[wasm_bindgen(getter, js_name = cropX)]
    pub fn crop_x(&self) -> f64 {
        self.inner.crop().x
    }

    #[wasm_bindgen(getter, js_name = cropY)]
    pub fn crop_y(&self) -> f64 {
        self.inner.crop().y
    }

    #[wasm_bindgen(getter, js_name = cropWidth)]
    pub fn crop_width(&self) -> f64 {
        self.inner.crop().width
    }

    #[wasm_bindgen(getter, js_name = cropHeight)]
    pub fn crop_height(&self) -> f64 {
        self.inner.crop().height
    }

    #[wasm_bindgen(getter, js_name = disableCrop)]
    pub fn disable_crop(&self) -> bool {
        self.inner.crop_disabled()
    }

    #[wasm_bindgen(getter, js_name = scaledWidth)]
    pub fn scaled_width(&self) -> f64 {
        self.inner.displayed().width
    }

    #[wasm_bindgen(getter, js_name = scaledHeight)]
    pub fn scaled_height(&self) -> f64 {
        self.inner.displayed().height
    }

    /// Move the object on the canvas.
    #[wasm_bindgen(js_name = setPosition)]
    pub fn set_position(&mut self, left: f64, top: f64) {
        self.inner.set_position(left, top);
    }

    /// Update the unscaled object size and re-run the crop.
    #[wasm_bindgen(js_name = setSize)]
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.inner.set_size(width, height);
    }

    /// Update the scale factors and re-run the crop.
    #[wasm_bindgen(js_name = setScale)]
    pub fn set_scale(&mut self, scale_x: f64, scale_y: f64) {
        self.inner.set_scale(scale_x, scale_y);
    }

    /// Uniformly scale so the displayed width matches `target_width`.
    #[wasm_bindgen(js_name = scaleToWidth)]
    pub fn scale_to_width(&mut self, target_width: f64) {
        self.inner.scale_to_width(target_width);
    }

    /// Change the anchor (unknown tags fall back to center-middle) and
    /// re-run the crop.
    #[wasm_bindgen(js_name = setClipPosition)]
    pub fn set_clip_position(&mut self, tag: &str) {
        self.inner.set_anchor(parse_clip_position(tag));
    }

    /// Recompute the crop rectangle from the current displayed size.
    #[wasm_bindgen(js_name = applyCrop)]
    pub fn apply_crop(&mut self) {
        self.inner.apply_crop();
    }

    /// Flip the crop state; the host should request a redraw afterwards.
    #[wasm_bindgen(js_name = toggleCrop)]
    pub fn toggle_crop(&mut self) {
        self.inner.toggle_crop();
    }

    /// True once since the last call if the host must refresh the object's
    /// coordinate bounds (its `setCoords` equivalent).
    #[wasm_bindgen(js_name = takeCoordsDirty)]
    pub fn take_coords_dirty(&mut self) -> bool {
        self.inner.take_coords_dirty()
    }

    /// The `drawImage` parameters for the host's draw callback, as
    /// `{ source: { x, y, width, height }, dest: { left, top, width, height } }`.
    #[wasm_bindgen(js_name = drawOp)]
    pub fn draw_op(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&render::draw_op(&self.inner))
            .map_err(|e| JsValue::from(e.to_string()))
    }

    /// Serialize to a snapshot object in the host format.
    #[wasm_bindgen(js_name = toSnapshot)]
    pub fn to_snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.to_snapshot())
            .map_err(|e| JsValue::from(e.to_string()))
    }

    /// Rebuild an entity from a snapshot object once the host has reloaded
    /// the asset and reports its natural size.
    #[wasm_bindgen(js_name = fromSnapshot)]
    pub fn from_snapshot(
        snapshot: JsValue,
        natural_width: f64,
        natural_height: f64,
    ) -> Result<JsCroppedImage, JsValue> {
        let snapshot: Snapshot =
            serde_wasm_bindgen::from_value(snapshot).map_err(|e| JsValue::from(e.to_string()))?;
        let inner = CroppedImage::from_snapshot(
            &snapshot,
            Dimensions::new(natural_width, natural_height),
        )
        .map_err(|e| JsValue::from(e.to_string()))?;
        Ok(JsCroppedImage { inner })
    }
}

impl JsCroppedImage {
    #[cfg(test)]
    pub(crate) fn from_inner(inner: CroppedImage) -> Self {
        Self { inner }
    }

    pub(crate) fn into_inner(self) -> CroppedImage {
        self.inner
    }
}
