//! Anchor points on element rectangles
//!
//! An anchor names the attachment point a line connects to on an element's
//! bounding box. The mapping from anchor to coordinates is the only place
//! the crate interprets rectangle geometry, so a malformed anchor must be
//! rejected before it reaches here.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use super::types::{Point, Rect};

/// Error for anchor names outside the recognized set
///
/// Raised at registration/parse time; anchors that survive parsing can
/// never fail inside the geometry math.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid anchor '{0}', expected one of: top, bottom, left, right, middle")]
pub struct InvalidAnchor(pub String);

/// Named attachment point on a rectangle's boundary or center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Anchor {
    Top,
    Bottom,
    Left,
    Right,
    Middle,
}

impl Anchor {
    /// Attachment point for this anchor on `rect`, in container coordinates
    pub fn point_on(self, rect: &Rect) -> Point {
        match self {
            Anchor::Top => Point::new(rect.left + rect.width / 2.0, rect.top),
            Anchor::Bottom => Point::new(rect.left + rect.width / 2.0, rect.bottom()),
            Anchor::Left => Point::new(rect.left, rect.top + rect.height / 2.0),
            Anchor::Right => Point::new(rect.right(), rect.top + rect.height / 2.0),
            Anchor::Middle => rect.center(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::Top => "top",
            Anchor::Bottom => "bottom",
            Anchor::Left => "left",
            Anchor::Right => "right",
            Anchor::Middle => "middle",
        }
    }
}

impl FromStr for Anchor {
    type Err = InvalidAnchor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Anchor::Top),
            "bottom" => Ok(Anchor::Bottom),
            "left" => Ok(Anchor::Left),
            "right" => Ok(Anchor::Right),
            "middle" => Ok(Anchor::Middle),
            other => Err(InvalidAnchor(other.to_string())),
        }
    }
}

impl TryFrom<String> for Anchor {
    type Error = InvalidAnchor;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
