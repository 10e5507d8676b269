//! SVG document generation from refresh output

use crate::geometry::Point;
use crate::overlay::{ArrowDescriptor, ArrowMarker, RefreshOutput};

use super::SvgConfig;

/// Build the SVG overlay document incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    arrows: Vec<String>,
    labels: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            arrows: vec![],
            labels: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add an arrowhead marker definition
    ///
    /// `orient="auto"` rotates the triangle to match the path direction at
    /// the marker position; `markerUnits="strokeWidth"` scales it with the
    /// line thickness.
    pub fn add_marker(&mut self, marker: &ArrowMarker) {
        self.defs.push(format!(
            r#"<marker id="{}" markerWidth="{}" markerHeight="{}" refX="{}" refY="{}" orient="auto" markerUnits="strokeWidth"><path d="{}" fill="{}"/></marker>"#,
            marker.id,
            marker.width,
            marker.height,
            marker.ref_x,
            marker.ref_y,
            marker.path,
            marker.fill_color
        ));
    }

    /// Add an arrow path (and its label, if the relation carries one)
    pub fn add_arrow(&mut self, arrow: &ArrowDescriptor) {
        let prefix = self.prefix();

        let dasharray = arrow
            .style
            .stroke_dasharray
            .as_ref()
            .map(|d| format!(r#" stroke-dasharray="{}""#, d))
            .unwrap_or_default();
        let marker = arrow
            .marker_id
            .as_ref()
            .map(|id| format!(r#" marker-end="url(#{})""#, id))
            .unwrap_or_default();

        self.arrows.push(format!(
            r#"{}<path class="{}arrow" d="{}" fill="none" stroke="{}" stroke-width="{}"{}{}/>"#,
            self.indent_str(),
            prefix,
            arrow.curve.to_svg_d(),
            arrow.style.stroke_color,
            arrow.style.stroke_width,
            dasharray,
            marker
        ));

        if let Some(label) = &arrow.label {
            let mid = arrow.curve.midpoint();
            self.labels.push(format!(
                r#"{}<text class="{}label" x="{}" y="{}" text-anchor="middle">{}</text>"#,
                self.indent_str(),
                prefix,
                mid.x,
                mid.y - 4.0,
                escape_xml(label)
            ));
        }
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: (f64, f64, f64, f64)) -> String {
        let (vb_x, vb_y, vb_w, vb_h) = viewbox;
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            vb_x, vb_y, vb_w, vb_h
        ));
        svg.push_str(nl);

        let (defs_indent, def_indent) = if self.config.pretty_print {
            ("  ", "    ")
        } else {
            ("", "")
        };
        if !self.defs.is_empty() {
            svg.push_str(defs_indent);
            svg.push_str("<defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str(def_indent);
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(defs_indent);
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        for arrow in &self.arrows {
            svg.push_str(arrow);
            svg.push_str(nl);
        }

        // Labels on top of the paths they annotate
        for label in &self.labels {
            svg.push_str(label);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a refresh output as a standalone SVG overlay document
///
/// With `config.size` set, the document uses a fixed `0 0 w h` viewBox
/// (container coordinates); otherwise the viewBox is fitted to the arrows'
/// extents plus `viewbox_padding`. An empty output still renders a valid,
/// empty document.
pub fn render_svg(output: &RefreshOutput, config: &SvgConfig) -> String {
    let viewbox = match config.size {
        Some((width, height)) => (0.0, 0.0, width, height),
        None => fitted_viewbox(output, config.viewbox_padding),
    };

    let mut builder = SvgBuilder::new(config.clone());
    for marker in &output.markers {
        builder.add_marker(marker);
    }
    for arrow in &output.arrows {
        builder.add_arrow(arrow);
    }
    builder.build(viewbox)
}

/// ViewBox covering every curve's endpoints and control points
fn fitted_viewbox(output: &RefreshOutput, padding: f64) -> (f64, f64, f64, f64) {
    let points = output.arrows.iter().flat_map(|arrow| {
        [
            arrow.curve.start,
            arrow.curve.control1,
            arrow.curve.control2,
            arrow.curve.end,
        ]
    });

    let mut bounds: Option<(f64, f64, f64, f64)> = None;
    for Point { x, y } in points {
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    let (min_x, min_y, max_x, max_y) = bounds.unwrap_or((0.0, 0.0, 0.0, 0.0));
    (
        min_x - padding,
        min_y - padding,
        (max_x - min_x) + 2.0 * padding,
        (max_y - min_y) + 2.0 * padding,
    )
}

/// Escape text content for embedding in XML
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
