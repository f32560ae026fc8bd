//! Anchor positions for aspect-ratio cropping.
//!
//! An anchor names one of nine reference points (corners, edge midpoints,
//! center) and decides which part of an over-sized source image stays visible
//! after the crop calculator has fixed the crop extent. Positions serialize
//! as the host's column-first string tags (`"left-top"`, `"center-middle"`,
//! ...).

use serde::{Deserialize, Serialize};

/// One of the nine anchor positions, {left, center, right} crossed with
/// {top, middle, bottom}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnchorPosition {
    #[serde(rename = "left-top")]
    LeftTop,
    #[serde(rename = "left-middle")]
    LeftMiddle,
    #[serde(rename = "left-bottom")]
    LeftBottom,
    #[serde(rename = "center-top")]
    CenterTop,
    #[default]
    #[serde(rename = "center-middle")]
    CenterMiddle,
    #[serde(rename = "center-bottom")]
    CenterBottom,
    #[serde(rename = "right-top")]
    RightTop,
    #[serde(rename = "right-middle")]
    RightMiddle,
    #[serde(rename = "right-bottom")]
    RightBottom,
}

impl AnchorPosition {
    /// All nine positions, in column-major order.
    pub const ALL: [AnchorPosition; 9] = [
        AnchorPosition::LeftTop,
        AnchorPosition::LeftMiddle,
        AnchorPosition::LeftBottom,
        AnchorPosition::CenterTop,
        AnchorPosition::CenterMiddle,
        AnchorPosition::CenterBottom,
        AnchorPosition::RightTop,
        AnchorPosition::RightMiddle,
        AnchorPosition::RightBottom,
    ];

    /// The host-format string tag for this position.
    pub fn tag(self) -> &'static str {
        match self {
            AnchorPosition::LeftTop => "left-top",
            AnchorPosition::LeftMiddle => "left-middle",
            AnchorPosition::LeftBottom => "left-bottom",
            AnchorPosition::CenterTop => "center-top",
            AnchorPosition::CenterMiddle => "center-middle",
            AnchorPosition::CenterBottom => "center-bottom",
            AnchorPosition::RightTop => "right-top",
            AnchorPosition::RightMiddle => "right-middle",
            AnchorPosition::RightBottom => "right-bottom",
        }
    }

    /// Parse a host-format tag.
    ///
    /// Returns `None` for unknown tags; callers supply the default and report
    /// the fallback, so a bad tag in a snapshot is never fatal.
    pub fn from_tag(tag: &str) -> Option<Self> {
        AnchorPosition::ALL.iter().copied().find(|p| p.tag() == tag)
    }

    /// Horizontal crop offset given the source-minus-crop width slack.
    pub fn horizontal_offset(self, slack: f64) -> f64 {
        match self {
            AnchorPosition::LeftTop | AnchorPosition::LeftMiddle | AnchorPosition::LeftBottom => {
                0.0
            }
            AnchorPosition::CenterTop
            | AnchorPosition::CenterMiddle
            | AnchorPosition::CenterBottom => slack / 2.0,
            AnchorPosition::RightTop
            | AnchorPosition::RightMiddle
            | AnchorPosition::RightBottom => slack,
        }
    }

    /// Vertical crop offset given the source-minus-crop height slack.
    pub fn vertical_offset(self, slack: f64) -> f64 {
        match self {
            AnchorPosition::LeftTop | AnchorPosition::CenterTop | AnchorPosition::RightTop => 0.0,
            AnchorPosition::LeftMiddle
            | AnchorPosition::CenterMiddle
            | AnchorPosition::RightMiddle => slack / 2.0,
            AnchorPosition::LeftBottom
            | AnchorPosition::CenterBottom
            | AnchorPosition::RightBottom => slack,
        }
    }
}
