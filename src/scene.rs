//! Static scene descriptions
//!
//! A scene is a TOML document listing tracked elements with their current
//! rectangles and outgoing relations. It stands in for the host
//! integration that would normally measure elements and call `refresh`,
//! which makes overlays renderable from the CLI and testable without any
//! host framework.
//!
//! ```toml
//! [canvas]
//! width = 400
//! height = 300
//!
//! [[element]]
//! id = "a"
//! rect = { top = 0.0, left = 0.0, width = 100.0, height = 50.0 }
//!
//! [[element.relation]]
//! target = "b"
//! source_anchor = "bottom"
//! target_anchor = "top"
//! label = "flows to"
//!
//! [[element]]
//! id = "b"
//! rect = { top = 200.0, left = 0.0, width = 100.0, height = 50.0 }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::Rect;
use crate::overlay::{Overlay, RefreshOutput};
use crate::registry::Relation;
use crate::renderer::{render_svg, SvgConfig};
use crate::style::Theme;

/// Errors that can occur when loading or parsing scene files
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// TOML structure for deserializing scenes
#[derive(Deserialize)]
struct SceneDoc {
    canvas: Option<CanvasDecl>,
    #[serde(default, rename = "element")]
    elements: Vec<ElementDecl>,
}

#[derive(Deserialize, Clone, Copy)]
struct CanvasDecl {
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct ElementDecl {
    id: String,
    rect: Rect,
    #[serde(default, rename = "relation")]
    relations: Vec<Relation>,
}

/// A parsed scene: an overlay populated with relations plus the rectangle
/// snapshot the host would have measured
///
/// Relations targeting ids that name no element in the scene are kept and
/// silently dropped at draw time, the same as any missing rectangle.
#[derive(Debug, Clone)]
pub struct Scene {
    canvas: Option<(f64, f64)>,
    overlay: Overlay,
    rects: HashMap<String, Rect>,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    ///
    /// Anchors deserialize through the `InvalidAnchor` parser, so a
    /// malformed anchor fails here rather than inside geometry math.
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let doc: SceneDoc = toml::from_str(content)?;

        let mut overlay = Overlay::default();
        let mut rects = HashMap::new();
        for element in doc.elements {
            overlay.register_element(element.id.clone(), element.relations);
            rects.insert(element.id, element.rect);
        }

        Ok(Scene {
            canvas: doc.canvas.map(|c| (c.width, c.height)),
            overlay,
            rects,
        })
    }

    /// Explicit canvas size declared by the scene, if any
    pub fn canvas(&self) -> Option<(f64, f64)> {
        self.canvas
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut Overlay {
        &mut self.overlay
    }

    /// Override the container arrow style with a theme's settings
    pub fn apply_theme(&mut self, theme: &Theme) {
        let base = self.overlay.config().style.clone();
        self.overlay.config_mut().style = theme.apply(&base);
    }

    /// One refresh pass over the scene's rectangle snapshot
    pub fn refresh(&self) -> RefreshOutput {
        self.overlay.refresh(&self.rects)
    }

    /// Render the scene as an SVG overlay document
    ///
    /// A declared canvas size fixes the viewBox unless the config already
    /// carries an explicit size.
    pub fn render(&self, config: &SvgConfig) -> String {
        let config = match (config.size, self.canvas) {
            (None, Some((width, height))) => config.clone().with_size(width, height),
            _ => config.clone(),
        };
        render_svg(&self.refresh(), &config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_SCENE: &str = r#"
[canvas]
width = 400
height = 300

[[element]]
id = "a"
rect = { top = 0.0, left = 0.0, width = 100.0, height = 50.0 }

[[element.relation]]
target = "b"
source_anchor = "bottom"
target_anchor = "top"

[[element]]
id = "b"
rect = { top = 200.0, left = 0.0, width = 100.0, height = 50.0 }
"#;

    #[test]
    fn test_parse_simple_scene() {
        let scene = Scene::from_str(SIMPLE_SCENE).expect("should parse");
        assert_eq!(scene.canvas(), Some((400.0, 300.0)));
        assert_eq!(scene.overlay().registry().len(), 2);

        let output = scene.refresh();
        assert_eq!(output.arrows.len(), 1);
        assert_eq!(output.arrows[0].curve.to_svg_d(), "M50,50 C50,125 50,125 50,200");
    }

    #[test]
    fn test_scene_without_canvas() {
        let scene = Scene::from_str("[[element]]\nid = \"a\"\nrect = { top = 0.0, left = 0.0, width = 10.0, height = 10.0 }\n")
            .expect("should parse");
        assert_eq!(scene.canvas(), None);
        assert!(scene.refresh().arrows.is_empty());
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::from_str("").expect("should parse");
        assert!(scene.overlay().registry().is_empty());
        assert!(scene.refresh().arrows.is_empty());
        assert!(scene.refresh().markers.is_empty());
    }

    #[test]
    fn test_invalid_anchor_fails_at_parse_time() {
        let source = r#"
[[element]]
id = "a"
rect = { top = 0.0, left = 0.0, width = 10.0, height = 10.0 }

[[element.relation]]
target = "b"
source_anchor = "centre"
target_anchor = "top"
"#;
        let err = Scene::from_str(source).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("invalid anchor 'centre'"), "{message}");
    }

    #[test]
    fn test_relation_style_override_in_scene() {
        let source = r##"
[[element]]
id = "a"
rect = { top = 0.0, left = 0.0, width = 10.0, height = 10.0 }

[[element.relation]]
target = "a"
source_anchor = "left"
target_anchor = "right"
stroke_color = "#ff0000"
end_shape = "none"
"##;
        let scene = Scene::from_str(source).expect("should parse");
        let output = scene.refresh();
        assert_eq!(output.arrows.len(), 1);
        assert_eq!(output.arrows[0].style.stroke_color, "#ff0000");
        assert_eq!(output.arrows[0].marker_id, None);
    }

    #[test]
    fn test_unknown_target_dropped_at_draw_time() {
        let source = r#"
[[element]]
id = "a"
rect = { top = 0.0, left = 0.0, width = 10.0, height = 10.0 }

[[element.relation]]
target = "nowhere"
source_anchor = "right"
target_anchor = "left"
"#;
        let scene = Scene::from_str(source).expect("should parse");
        let output = scene.refresh();
        assert!(output.arrows.is_empty());
        // The relation itself stays registered; its marker is still defined
        assert_eq!(output.markers.len(), 1);
    }

    #[test]
    fn test_apply_theme_overrides_container_style() {
        let mut scene = Scene::from_str(SIMPLE_SCENE).expect("should parse");
        let theme = Theme::from_str("[arrow]\nstroke_color = \"#2196f3\"\n").expect("should parse");
        scene.apply_theme(&theme);

        let output = scene.refresh();
        assert_eq!(output.arrows[0].style.stroke_color, "#2196f3");
        assert_eq!(output.markers[0].fill_color, "#2196f3");
    }
}
