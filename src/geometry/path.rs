//! Cubic Bezier curves in the SVG path mini-language
//!
//! Converts a pair of anchor points into an `M x,y C ...` path string.

use super::types::Point;

/// A cubic Bezier curve connecting two anchor points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePath {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl CurvePath {
    /// Build the curve between two points.
    ///
    /// Control points are offset from each endpoint along the dominant axis
    /// of separation by half the separation on that axis, producing a
    /// gentle S-curve. When |dx| == |dy| the vertical offset wins.
    pub fn between(start: Point, end: Point) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;

        if dx.abs() > dy.abs() {
            Self {
                start,
                control1: Point::new(start.x + dx / 2.0, start.y),
                control2: Point::new(end.x - dx / 2.0, end.y),
                end,
            }
        } else {
            Self {
                start,
                control1: Point::new(start.x, start.y + dy / 2.0),
                control2: Point::new(end.x, end.y - dy / 2.0),
                end,
            }
        }
    }

    /// SVG path `d` attribute: `M x,y C cx1,cy1 cx2,cy2 x,y`
    ///
    /// Coordinates use plain decimal formatting (`50`, not `50.00`), so the
    /// output is identical for identical inputs.
    pub fn to_svg_d(&self) -> String {
        format!(
            "M{},{} C{},{} {},{} {},{}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y
        )
    }

    /// Point on the curve at t = 0.5, used to place relation labels
    pub fn midpoint(&self) -> Point {
        // B(1/2) = (P0 + 3*P1 + 3*P2 + P3) / 8
        Point::new(
            (self.start.x + 3.0 * self.control1.x + 3.0 * self.control2.x + self.end.x) / 8.0,
            (self.start.y + 3.0 * self.control1.y + 3.0 * self.control2.y + self.end.y) / 8.0,
        )
    }
}
