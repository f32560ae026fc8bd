//! Cropframe Core - crop widget logic
//!
//! This crate provides the host-independent logic for the Cropframe canvas
//! widget: the anchor-based crop-rectangle computation, the cropped-image
//! entity with its enable/disable state machine, draw-op derivation for the
//! host canvas, the resize-handle policy, and JSON snapshots.
//!
//! The host canvas library keeps everything else: rendering, event dispatch,
//! control hit-testing, and asset loading.

pub mod anchor;
pub mod controls;
pub mod crop;
pub mod geometry;
pub mod image;
pub mod render;
pub mod session;
pub mod snapshot;

pub use anchor::AnchorPosition;
pub use controls::Handle;
pub use crop::compute_crop;
pub use geometry::{CropRect, Dimensions};
pub use image::{CroppedImage, ImageOptions};
pub use render::{draw_op, DestRect, DrawOp};
pub use session::{LoadError, Session};
pub use snapshot::{Snapshot, SnapshotError};
