//! Geometric core: rectangles, anchors, and arrow curves
//!
//! Everything in this module is a pure function of its inputs. Rectangles
//! are transient snapshots supplied by the host on each refresh; nothing
//! here holds state.

pub mod anchor;
pub mod path;
pub mod types;

pub use anchor::{Anchor, InvalidAnchor};
pub use path::CurvePath;
pub use types::{Point, Rect};
