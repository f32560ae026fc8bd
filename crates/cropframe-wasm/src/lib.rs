//! Cropframe WASM - WebAssembly bindings for Cropframe
//!
//! This crate exposes the cropframe-core widget logic to the JavaScript
//! canvas host. The host keeps ownership of rendering, event dispatch,
//! control hit-testing, and asset loading; these bindings give it the crop
//! computation, the cropped-image entity, and the editor session.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types and clip-position parsing
//! - `crop` - The plain crop-rectangle computation
//! - `image` - The cropped-image entity with its toggle state machine
//! - `session` - The editor session (toggle/save/load affordances)
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsSession, JsCroppedImage } from '@cropframe/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsSession();
//! const image = new JsCroppedImage(url, img.naturalWidth, img.naturalHeight,
//!                                  { clipPosition: 'center-middle' });
//! image.scaleToWidth(400);
//! session.insert(image);
//! ```

use wasm_bindgen::prelude::*;

mod crop;
mod image;
mod session;
mod types;

// Re-export public types
pub use crop::compute_crop;
pub use image::JsCroppedImage;
pub use session::JsSession;
pub use types::JsCropRect;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Log a diagnostic to the browser console.
///
/// No-op off wasm32 so native unit tests can drive the fallback paths.
pub(crate) fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
