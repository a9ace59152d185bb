use std::f64::consts::PI;

use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Point, Rect};
use crate::symbol::pool::Shape;

/// Flattening tolerance for curved outlines, in pixels.
const CURVE_TOLERANCE: f64 = 0.1;

/// Inner-to-outer radius ratio of the five-point star.
pub const STAR_INNER_RATIO: f64 = 0.4;

/// Fill/outline geometry of one shape, before rasterization.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    /// Ellipse inscribed in the rect.
    Ellipse(Rect),
    /// The rect itself.
    Box(Rect),
    /// Closed polygon through the vertices, in order.
    Polygon(Vec<Point>),
}

impl Outline {
    /// Closed path shared by the fill and the outline stroke.
    pub fn to_path(&self) -> BezPath {
        match self {
            Outline::Ellipse(rect) => kurbo::Ellipse::from_rect(*rect).to_path(CURVE_TOLERANCE),
            Outline::Box(rect) => rect.to_path(CURVE_TOLERANCE),
            Outline::Polygon(vertices) => {
                let mut path = BezPath::new();
                let mut it = vertices.iter();
                if let Some(&first) = it.next() {
                    path.move_to(first);
                    for &v in it {
                        path.line_to(v);
                    }
                    path.close_path();
                }
                path
            }
        }
    }
}

impl Shape {
    /// Geometry of this shape inscribed in a square of side `2 * half` centered on `center`.
    pub fn outline(self, center: Point, half: f64) -> Outline {
        let Point { x, y } = center;
        let bbox = Rect::new(x - half, y - half, x + half, y + half);
        match self {
            Shape::Circle => Outline::Ellipse(bbox),
            Shape::Square => Outline::Box(bbox),
            Shape::Triangle => Outline::Polygon(vec![
                Point::new(x, y - half),
                Point::new(x - half, y + half),
                Point::new(x + half, y + half),
            ]),
            Shape::Star => Outline::Polygon(star_points(center, half, STAR_INNER_RATIO * half, 5)),
            Shape::Diamond => Outline::Polygon(vec![
                Point::new(x, y - half),
                Point::new(x + half, y),
                Point::new(x, y + half),
                Point::new(x - half, y),
            ]),
            Shape::Hexagon => Outline::Polygon(regular_polygon_points(center, half, 6)),
        }
    }
}

/// Vertices alternating outer/inner radius, stepping by `PI / points`, starting straight up.
fn star_points(center: Point, outer: f64, inner: f64, points: usize) -> Vec<Point> {
    let step = PI / points as f64;
    (0..points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            polar(center, r, i as f64 * step - PI / 2.0)
        })
        .collect()
}

/// Vertices of a regular polygon with its first vertex straight up.
fn regular_polygon_points(center: Point, radius: f64, sides: usize) -> Vec<Point> {
    let step = 2.0 * PI / sides as f64;
    (0..sides)
        .map(|i| polar(center, radius, i as f64 * step - PI / 2.0))
        .collect()
}

fn polar(center: Point, r: f64, angle: f64) -> Point {
    Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
}

/// Centerline of a border stroke of `stroke_width` that stays inside the square of half-extent
/// `half_extent` around `center`.
pub fn border_rect(center: Point, half_extent: f64, stroke_width: f64) -> Rect {
    let outer = Rect::new(
        center.x - half_extent,
        center.y - half_extent,
        center.x + half_extent,
        center.y + half_extent,
    );
    outer.inset(-stroke_width / 2.0)
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
