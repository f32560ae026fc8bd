//! The cropped-image entity.
//!
//! `CroppedImage` is the widget's model of one image object on the host
//! canvas: the asset reference, the object geometry the host manipulates
//! through its transform handlers, the cached crop rectangle, and the
//! crop enabled/disabled state machine. The host owns rendering and event
//! dispatch; this type owns when and how the crop rectangle is recomputed.

use crate::anchor::AnchorPosition;
use crate::crop::compute_crop;
use crate::geometry::{CropRect, Dimensions};

/// Options accepted when constructing a [`CroppedImage`].
#[derive(Debug, Clone, Default)]
pub struct ImageOptions {
    /// Object position on the canvas.
    pub left: f64,
    pub top: f64,
    /// Anchor selecting the visible part of the source. Defaults to
    /// center-middle.
    pub anchor: AnchorPosition,
    /// Construct with cropping switched off.
    pub crop_disabled: bool,
    /// CORS mode forwarded to the host's asset loader.
    pub cross_origin: Option<String>,
}

/// One image object with an anchored crop.
///
/// Invariant: while cropping is enabled the cached [`CropRect`] always
/// reflects the current displayed dimensions and anchor; every geometry
/// mutation re-runs [`CroppedImage::apply_crop`]. While disabled, the crop
/// fields are left in place but the draw-time source rectangle is forced to
/// the full asset, and the pre-disable offsets sit in a side buffer.
#[derive(Debug, Clone)]
pub struct CroppedImage {
    pub(crate) src: String,
    pub(crate) cross_origin: Option<String>,
    pub(crate) natural: Dimensions,
    pub(crate) left: f64,
    pub(crate) top: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) scale_x: f64,
    pub(crate) scale_y: f64,
    pub(crate) anchor: AnchorPosition,
    pub(crate) crop: CropRect,
    pub(crate) crop_disabled: bool,
    // Offsets captured on disable so a later enable starts from them.
    pub(crate) saved_crop_offset: Option<(f64, f64)>,
    pub(crate) coords_dirty: bool,
}

impl CroppedImage {
    /// Create an entity for a freshly loaded asset.
    ///
    /// `natural` is the element size reported by the host loader; the object
    /// starts unscaled at that size with the crop rectangle covering the full
    /// asset, then the first crop is computed unless `options.crop_disabled`.
    pub fn new(src: impl Into<String>, natural: Dimensions, options: ImageOptions) -> Self {
        let mut image = Self {
            src: src.into(),
            cross_origin: options.cross_origin,
            natural,
            left: options.left,
            top: options.top,
            width: natural.width,
            height: natural.height,
            scale_x: 1.0,
            scale_y: 1.0,
            anchor: options.anchor,
            crop: CropRect::full(natural),
            crop_disabled: options.crop_disabled,
            saved_crop_offset: None,
            coords_dirty: false,
        };
        image.apply_crop();
        image
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn cross_origin(&self) -> Option<&str> {
        self.cross_origin.as_deref()
    }

    /// Natural size of the loaded asset.
    pub fn natural(&self) -> Dimensions {
        self.natural
    }

    /// Size the object is currently displayed at (post-scale), the host's
    /// scaled-width/scaled-height query.
    pub fn displayed(&self) -> Dimensions {
        Dimensions::new(self.width * self.scale_x, self.height * self.scale_y)
    }

    pub fn position(&self) -> (f64, f64) {
        (self.left, self.top)
    }

    pub fn size(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    pub fn anchor(&self) -> AnchorPosition {
        self.anchor
    }

    /// The cached crop rectangle. Only meaningful for drawing while cropping
    /// is enabled; see [`crate::render::draw_op`].
    pub fn crop(&self) -> CropRect {
        self.crop
    }

    pub fn crop_disabled(&self) -> bool {
        self.crop_disabled
    }

    pub fn set_position(&mut self, left: f64, top: f64) {
        self.left = left;
        self.top = top;
        self.coords_dirty = true;
    }

    /// Update the object's unscaled size, as the host's scaling handlers do,
    /// and re-run the crop.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.apply_crop();
    }

    /// Update the scale factors and re-run the crop.
    pub fn set_scale(&mut self, scale_x: f64, scale_y: f64) {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self.apply_crop();
    }

    /// Uniformly scale so the displayed width matches `target_width`.
    pub fn scale_to_width(&mut self, target_width: f64) {
        let scale = target_width / self.width;
        self.set_scale(scale, scale);
    }

    /// Change the anchor and re-run the crop.
    pub fn set_anchor(&mut self, anchor: AnchorPosition) {
        self.anchor = anchor;
        self.apply_crop();
    }

    /// Recompute the crop rectangle from the natural size and the current
    /// displayed size. No-op while cropping is disabled.
    ///
    /// This is the synchronization point between user interaction and crop
    /// geometry: the host must route every transform that changes displayed
    /// width or height through here.
    pub fn apply_crop(&mut self) {
        if self.crop_disabled {
            return;
        }
        self.crop = compute_crop(self.natural, self.displayed(), self.anchor);
        self.coords_dirty = true;
    }

    /// Switch cropping off, remembering the current offsets.
    ///
    /// The draw-time source rectangle becomes the full asset (see
    /// [`crate::render::draw_op`]); the crop fields themselves are kept and
    /// the offsets go into the side buffer.
    pub fn disable_crop(&mut self) {
        if self.crop_disabled {
            return;
        }
        self.saved_crop_offset = Some((self.crop.x, self.crop.y));
        self.crop_disabled = true;
        self.coords_dirty = true;
    }

    /// Switch cropping back on.
    ///
    /// The buffered offsets are written back and then immediately recomputed
    /// from the current displayed size, so the recomputed geometry wins. With
    /// no resize in between this restores the pre-disable rectangle.
    pub fn enable_crop(&mut self) {
        if !self.crop_disabled {
            return;
        }
        if let Some((x, y)) = self.saved_crop_offset {
            self.crop.x = x;
            self.crop.y = y;
        }
        self.crop_disabled = false;
        self.apply_crop();
    }

    /// Flip the crop state. The caller should request a host redraw after
    /// every toggle.
    pub fn toggle_crop(&mut self) {
        if self.crop_disabled {
            self.enable_crop();
        } else {
            self.disable_crop();
        }
    }

    /// True once since the last call if the object's on-screen coordinate
    /// bounds need refreshing (the host's `setCoords` equivalent).
    pub fn take_coords_dirty(&mut self) -> bool {
        std::mem::take(&mut self.coords_dirty)
    }
}
