//! SVG renderer for refresh output
//!
//! Takes the arrows and marker definitions produced by an overlay refresh
//! and emits a standalone SVG document suitable for positioning over the
//! tracked elements.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, SvgBuilder};
