//! Overlay engine: drawable arrows and marker definitions
//!
//! An `Overlay` pairs a relation registry with container-level
//! configuration. `refresh` takes the host's rectangle snapshot and emits
//! everything a renderer needs: one descriptor per drawable arrow plus the
//! deduplicated arrowhead definitions they reference. The engine holds no
//! rectangles between calls and performs no debouncing; rate-limiting
//! refreshes is the host integration's concern.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::geometry::{CurvePath, Rect};
use crate::registry::{Registry, Relation};
use crate::style::{ArrowStyle, EndShape};

/// Container-level configuration shared with every registered relation
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Container-unique prefix for marker ids, so multiple overlays can
    /// coexist in one document without id collisions
    pub marker_prefix: String,
    /// Default arrow style; relations override it field by field
    pub style: ArrowStyle,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            marker_prefix: "arrow".to_string(),
            style: ArrowStyle::default(),
        }
    }
}

impl OverlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.marker_prefix = prefix.into();
        self
    }

    pub fn with_style(mut self, style: ArrowStyle) -> Self {
        self.style = style;
        self
    }
}

/// A computed curve connecting two anchor points, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowDescriptor {
    pub source_id: String,
    pub target_id: String,
    pub curve: CurvePath,
    /// Marker referenced by the path's `marker-end`; `None` when the
    /// effective end shape is `none`
    pub marker_id: Option<String>,
    /// Fully resolved style (container defaults + relation overrides)
    pub style: ArrowStyle,
    pub label: Option<String>,
}

/// Reusable arrowhead definition referenced by id from arrow paths
///
/// Fields map directly onto SVG `<marker>` attributes; the renderer adds
/// `orient="auto"` and `markerUnits="strokeWidth"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowMarker {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub ref_x: f64,
    pub ref_y: f64,
    pub path: String,
    pub fill_color: String,
}

impl ArrowMarker {
    /// Fixed triangle scaled by the style's arrow length and thickness
    pub fn for_style(id: String, style: &ArrowStyle) -> Self {
        let length = style.arrow_length;
        let thickness = style.arrow_thickness;
        Self {
            id,
            width: length,
            height: thickness,
            ref_x: 0.0,
            ref_y: thickness / 2.0,
            path: format!("M0,0 L0,{} L{},{} z", thickness, length, thickness / 2.0),
            fill_color: style.stroke_color.clone(),
        }
    }
}

/// Result of one refresh pass
#[derive(Debug, Clone, Default)]
pub struct RefreshOutput {
    pub arrows: Vec<ArrowDescriptor>,
    pub markers: Vec<ArrowMarker>,
}

/// One arrow overlay instance: a registry plus its container configuration
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    registry: Registry,
    config: OverlayConfig,
}

impl Overlay {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            registry: Registry::new(),
            config,
        }
    }

    /// Register or replace the relation list for an element (idempotent)
    pub fn register_element(&mut self, id: impl Into<String>, relations: Vec<Relation>) {
        self.registry.register(id, relations);
    }

    /// Remove an element's relations; unknown ids are a no-op
    pub fn unregister_element(&mut self, id: &str) {
        self.registry.unregister(id);
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut OverlayConfig {
        &mut self.config
    }

    /// Deterministic marker id for a (source, target) pair:
    /// `prefix + source + target`
    pub fn marker_id(&self, source: &str, target: &str) -> String {
        format!("{}{}{}", self.config.marker_prefix, source, target)
    }

    /// Compute one arrow per relation whose source and target rectangles
    /// are both present in `rects`, in registration order
    ///
    /// Relations with a missing rectangle are silently dropped; that is a
    /// normal transient state while the host mounts and unmounts elements,
    /// not an error.
    pub fn compute_arrows(&self, rects: &HashMap<String, Rect>) -> Vec<ArrowDescriptor> {
        self.registry
            .relations()
            .filter_map(|(source, relation)| {
                let source_rect = rects.get(source)?;
                let target_rect = rects.get(&relation.target_id)?;

                let curve = CurvePath::between(
                    relation.source_anchor.point_on(source_rect),
                    relation.target_anchor.point_on(target_rect),
                );
                let style = relation.style.resolve(&self.config.style);
                let marker_id = (style.end_shape == EndShape::Arrow)
                    .then(|| self.marker_id(source, &relation.target_id));

                Some(ArrowDescriptor {
                    source_id: source.to_string(),
                    target_id: relation.target_id.clone(),
                    curve,
                    marker_id,
                    style,
                    label: relation.label.clone(),
                })
            })
            .collect()
    }

    /// One marker definition per distinct (source, target) pair, in
    /// first-seen registration order, independent of rectangle availability
    ///
    /// Two relations sharing a pair collapse to one id; the later-registered
    /// style wins (overwrite semantics, not a conflict).
    pub fn generate_markers(&self) -> Vec<ArrowMarker> {
        let mut markers: IndexMap<(&str, &str), ArrowMarker> = IndexMap::new();
        for (source, relation) in self.registry.relations() {
            let style = relation.style.resolve(&self.config.style);
            let id = self.marker_id(source, &relation.target_id);
            markers.insert(
                (source, relation.target_id.as_str()),
                ArrowMarker::for_style(id, &style),
            );
        }
        markers.into_values().collect()
    }

    /// One full recompute pass over the current registry
    pub fn refresh(&self, rects: &HashMap<String, Rect>) -> RefreshOutput {
        RefreshOutput {
            arrows: self.compute_arrows(rects),
            markers: self.generate_markers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Anchor;
    use crate::style::StyleOverride;

    fn rects(entries: &[(&str, Rect)]) -> HashMap<String, Rect> {
        entries
            .iter()
            .map(|(id, rect)| (id.to_string(), *rect))
            .collect()
    }

    #[test]
    fn test_empty_overlay_produces_nothing() {
        let overlay = Overlay::default();
        let output = overlay.refresh(&HashMap::new());
        assert!(output.arrows.is_empty());
        assert!(output.markers.is_empty());
    }

    #[test]
    fn test_missing_target_rect_drops_arrow_only() {
        let mut overlay = Overlay::default();
        overlay.register_element(
            "a",
            vec![
                Relation::new("b", Anchor::Bottom, Anchor::Top),
                Relation::new("ghost", Anchor::Bottom, Anchor::Top),
            ],
        );

        let rects = rects(&[
            ("a", Rect::new(0.0, 0.0, 100.0, 50.0)),
            ("b", Rect::new(200.0, 0.0, 100.0, 50.0)),
        ]);
        let output = overlay.refresh(&rects);

        // One of two relations drawable; markers still cover both
        assert_eq!(output.arrows.len(), 1);
        assert_eq!(output.arrows[0].target_id, "b");
        assert_eq!(output.markers.len(), 2);
    }

    #[test]
    fn test_marker_id_is_prefix_source_target() {
        let overlay = Overlay::new(OverlayConfig::new().with_marker_prefix("ov1"));
        assert_eq!(overlay.marker_id("a", "b"), "ov1ab");
    }

    #[test]
    fn test_duplicate_pair_last_style_wins() {
        let mut overlay = Overlay::default();
        overlay.register_element(
            "a",
            vec![
                Relation::new("b", Anchor::Right, Anchor::Left).with_style(StyleOverride {
                    stroke_color: Some("#ff0000".to_string()),
                    ..StyleOverride::default()
                }),
                Relation::new("b", Anchor::Bottom, Anchor::Top).with_style(StyleOverride {
                    stroke_color: Some("#00ff00".to_string()),
                    ..StyleOverride::default()
                }),
            ],
        );

        let markers = overlay.generate_markers();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].id, "arrowab");
        assert_eq!(markers[0].fill_color, "#00ff00");
    }

    #[test]
    fn test_end_shape_none_skips_marker_reference() {
        let mut overlay = Overlay::default();
        overlay.register_element(
            "a",
            vec![
                Relation::new("b", Anchor::Right, Anchor::Left).with_style(StyleOverride {
                    end_shape: Some(EndShape::None),
                    ..StyleOverride::default()
                }),
            ],
        );

        let rects = rects(&[
            ("a", Rect::new(0.0, 0.0, 10.0, 10.0)),
            ("b", Rect::new(0.0, 50.0, 10.0, 10.0)),
        ]);
        let arrows = overlay.compute_arrows(&rects);
        assert_eq!(arrows.len(), 1);
        assert_eq!(arrows[0].marker_id, None);
    }

    #[test]
    fn test_marker_geometry_from_style() {
        let style = ArrowStyle::default()
            .with_arrow_length(12.0)
            .with_arrow_thickness(8.0)
            .with_stroke_color("#abcdef");
        let marker = ArrowMarker::for_style("m1".to_string(), &style);
        assert_eq!(marker.width, 12.0);
        assert_eq!(marker.height, 8.0);
        assert_eq!(marker.ref_x, 0.0);
        assert_eq!(marker.ref_y, 4.0);
        assert_eq!(marker.path, "M0,0 L0,8 L12,4 z");
        assert_eq!(marker.fill_color, "#abcdef");
    }

    #[test]
    fn test_self_relation_renders_zero_length_curve() {
        let mut overlay = Overlay::default();
        overlay.register_element("a", vec![Relation::new("a", Anchor::Middle, Anchor::Middle)]);

        let rects = rects(&[("a", Rect::new(0.0, 0.0, 40.0, 40.0))]);
        let arrows = overlay.compute_arrows(&rects);
        assert_eq!(arrows.len(), 1);
        assert_eq!(arrows[0].curve.to_svg_d(), "M20,20 C20,20 20,20 20,20");
    }

    #[test]
    fn test_relation_override_resolved_in_descriptor() {
        let config = OverlayConfig::new().with_style(ArrowStyle::default().with_stroke_width(5.0));
        let mut overlay = Overlay::new(config);
        overlay.register_element(
            "a",
            vec![Relation::new("b", Anchor::Right, Anchor::Left).with_style(StyleOverride {
                stroke_dasharray: Some("2,2".to_string()),
                ..StyleOverride::default()
            })],
        );

        let rects = rects(&[
            ("a", Rect::new(0.0, 0.0, 10.0, 10.0)),
            ("b", Rect::new(0.0, 50.0, 10.0, 10.0)),
        ]);
        let arrows = overlay.compute_arrows(&rects);
        assert_eq!(arrows[0].style.stroke_width, 5.0);
        assert_eq!(arrows[0].style.stroke_dasharray, Some("2,2".to_string()));
    }
}
