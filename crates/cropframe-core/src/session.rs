//! The editor session.
//!
//! Owns the single active image and the single in-memory snapshot slot, so
//! UI event handlers borrow explicit state instead of reaching for globals.
//! The session maps directly onto the three user-facing affordances: toggle
//! crop, save to a snapshot (clearing the canvas), and load the held
//! snapshot back.

use thiserror::Error;

use crate::controls::{self, Handle};
use crate::geometry::Dimensions;
use crate::image::CroppedImage;
use crate::snapshot::{Snapshot, SnapshotError};

/// Errors from the session's load affordance.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Load was requested with nothing in the snapshot slot.
    #[error("no snapshot has been saved")]
    NoSnapshot,

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// One editing session: at most one active image, at most one held snapshot.
#[derive(Debug, Default)]
pub struct Session {
    active: Option<CroppedImage>,
    held: Option<Snapshot>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&CroppedImage> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut CroppedImage> {
        self.active.as_mut()
    }

    pub fn held_snapshot(&self) -> Option<&Snapshot> {
        self.held.as_ref()
    }

    /// Install a freshly loaded image as the active object, replacing any
    /// previous one.
    pub fn insert(&mut self, image: CroppedImage) {
        self.active = Some(image);
    }

    /// Drop the active image, as when the canvas is cleared.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Toggle crop on the active image.
    ///
    /// Returns true when the state changed and the host should redraw; false
    /// with no active image.
    pub fn toggle_crop(&mut self) -> bool {
        match self.active.as_mut() {
            Some(image) => {
                image.toggle_crop();
                true
            }
            None => false,
        }
    }

    /// Re-run the crop computation for a drag at `handle` when the policy
    /// calls for it.
    ///
    /// Returns true when a recompute actually ran. The host applies its own
    /// scale/skew math afterwards either way.
    pub fn handle_drag(&mut self, handle: Handle, shift_key: bool) -> bool {
        if !controls::recrops(handle, shift_key) {
            return false;
        }
        match self.active.as_mut() {
            Some(image) if !image.crop_disabled() => {
                image.apply_crop();
                true
            }
            _ => false,
        }
    }

    /// Serialize the active image into the held slot and clear the canvas.
    ///
    /// Returns false with no active image; the held slot is untouched then.
    pub fn save(&mut self) -> bool {
        match self.active.take() {
            Some(image) => {
                self.held = Some(image.to_snapshot());
                true
            }
            None => false,
        }
    }

    /// Rebuild the active image from the held snapshot.
    ///
    /// `natural` is the element size the host loader reported after
    /// re-fetching the snapshot's `src`; a failed fetch never reaches this
    /// point. The held snapshot stays in its slot for further loads.
    pub fn load(&mut self, natural: Dimensions) -> Result<&CroppedImage, LoadError> {
        let snapshot = self.held.as_ref().ok_or(LoadError::NoSnapshot)?;
        let image = CroppedImage::from_snapshot(snapshot, natural)?;
        Ok(self.active.insert(image))
    }
}
