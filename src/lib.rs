//! Tether - SVG arrow overlays between tracked elements
//!
//! This library keeps a registry of source → target relations between
//! elements the host application tracks, and turns a snapshot of their
//! bounding rectangles into SVG arrows: smooth cubic Bezier paths plus
//! deterministic arrowhead marker definitions. The host owns element
//! lifetime and measurement; it registers relations on mount, unregisters
//! on unmount, and calls `refresh` whenever positions may have changed.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use tether::{Anchor, Overlay, Rect, Relation};
//!
//! let mut overlay = Overlay::default();
//! overlay.register_element("a", vec![Relation::new("b", Anchor::Bottom, Anchor::Top)]);
//!
//! let mut rects = HashMap::new();
//! rects.insert("a".to_string(), Rect::new(0.0, 0.0, 100.0, 50.0));
//! rects.insert("b".to_string(), Rect::new(200.0, 0.0, 100.0, 50.0));
//!
//! let output = overlay.refresh(&rects);
//! assert_eq!(output.arrows.len(), 1);
//! assert!(output.arrows[0].curve.to_svg_d().starts_with("M50,50"));
//! ```

pub mod geometry;
pub mod overlay;
pub mod registry;
pub mod renderer;
pub mod scene;
pub mod style;

pub use geometry::{Anchor, CurvePath, InvalidAnchor, Point, Rect};
pub use overlay::{ArrowDescriptor, ArrowMarker, Overlay, OverlayConfig, RefreshOutput};
pub use registry::{Registry, Relation};
pub use renderer::{render_svg, SvgConfig};
pub use scene::{Scene, SceneError};
pub use style::{ArrowStyle, EndShape, StyleOverride, Theme, ThemeError};

/// Render a TOML scene description to a standalone SVG overlay with
/// default configuration
///
/// This is the main entry point for one-shot rendering: it parses the
/// scene, refreshes the overlay once, and generates the SVG document.
///
/// # Example
///
/// ```rust
/// let svg = tether::render_scene(r#"
/// [[element]]
/// id = "a"
/// rect = { top = 0.0, left = 0.0, width = 100.0, height = 50.0 }
///
/// [[element.relation]]
/// target = "b"
/// source_anchor = "bottom"
/// target_anchor = "top"
///
/// [[element]]
/// id = "b"
/// rect = { top = 200.0, left = 0.0, width = 100.0, height = 50.0 }
/// "#).unwrap();
///
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains("M50,50"));
/// ```
pub fn render_scene(source: &str) -> Result<String, SceneError> {
    Ok(Scene::from_str(source)?.render(&SvgConfig::default()))
}
