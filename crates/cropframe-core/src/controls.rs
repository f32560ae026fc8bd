//! Resize-handle policy.
//!
//! The host owns the control handles around the active object: hit-testing,
//! cursor styles, rendering, and the scale/skew math of a drag. What it asks
//! this module is whether a given drag must re-run the crop computation
//! before the transform applies, so the crop stays in sync with the displayed
//! size the user is changing.

/// The interactive handles the host renders around the active object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    MiddleLeft,
    MiddleRight,
    MiddleTop,
    MiddleBottom,
    Rotate,
}

impl Handle {
    /// Parse the host's corner tag ("tl", "mr", "mtr", ...).
    pub fn from_corner_tag(tag: &str) -> Option<Self> {
        match tag {
            "tl" => Some(Handle::TopLeft),
            "tr" => Some(Handle::TopRight),
            "bl" => Some(Handle::BottomLeft),
            "br" => Some(Handle::BottomRight),
            "ml" => Some(Handle::MiddleLeft),
            "mr" => Some(Handle::MiddleRight),
            "mt" => Some(Handle::MiddleTop),
            "mb" => Some(Handle::MiddleBottom),
            "mtr" => Some(Handle::Rotate),
            _ => None,
        }
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Handle::TopLeft | Handle::TopRight | Handle::BottomLeft | Handle::BottomRight
        )
    }

    pub fn is_edge(self) -> bool {
        matches!(
            self,
            Handle::MiddleLeft | Handle::MiddleRight | Handle::MiddleTop | Handle::MiddleBottom
        )
    }
}

/// Whether a drag at `handle` re-runs the crop computation.
///
/// Edge drags scale one axis (or skew) and always change the displayed
/// ratio. An unmodified corner drag scales both axes equally and keeps the
/// ratio, so only the shift-modified variant re-crops. Rotation never
/// changes displayed size.
pub fn recrops(handle: Handle, shift_key: bool) -> bool {
    if handle.is_edge() {
        return true;
    }
    handle.is_corner() && shift_key
}
