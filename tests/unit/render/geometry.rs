use kurbo::Shape as _;

use super::*;

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn every_shape_fits_its_bounding_square() {
    let c = Point::new(100.5, 50.5);
    let square = Rect::new(70.5, 20.5, 130.5, 80.5);
    for shape in Shape::ALL {
        let b = shape.outline(c, 30.0).to_path().bounding_box();
        assert!(b.x0 >= square.x0 - 1e-6 && b.x1 <= square.x1 + 1e-6, "{shape}: {b:?}");
        assert!(b.y0 >= square.y0 - 1e-6 && b.y1 <= square.y1 + 1e-6, "{shape}: {b:?}");
    }
}

#[test]
fn triangle_points_up_with_base_at_bottom() {
    let Outline::Polygon(v) = Shape::Triangle.outline(Point::new(0.0, 0.0), 10.0) else {
        panic!("triangle should be a polygon");
    };
    assert_eq!(
        v,
        vec![
            Point::new(0.0, -10.0),
            Point::new(-10.0, 10.0),
            Point::new(10.0, 10.0)
        ]
    );
}

#[test]
fn star_alternates_outer_and_inner_radii() {
    let c = Point::new(0.0, 0.0);
    let Outline::Polygon(v) = Shape::Star.outline(c, 30.0) else {
        panic!("star should be a polygon");
    };
    assert_eq!(v.len(), 10);
    assert!(approx(v[0], Point::new(0.0, -30.0)));
    for (i, p) in v.iter().enumerate() {
        let r = p.distance(c);
        let expected = if i % 2 == 0 { 30.0 } else { 12.0 };
        assert!((r - expected).abs() < 1e-9, "vertex {i} radius {r}");
    }
}

#[test]
fn hexagon_starts_at_the_top_with_circumradius_half() {
    let c = Point::new(5.0, 5.0);
    let Outline::Polygon(v) = Shape::Hexagon.outline(c, 20.0) else {
        panic!("hexagon should be a polygon");
    };
    assert_eq!(v.len(), 6);
    assert!(approx(v[0], Point::new(5.0, -15.0)));
    assert!(approx(v[3], Point::new(5.0, 25.0)));
    assert!(v.iter().all(|p| (p.distance(c) - 20.0).abs() < 1e-9));
}

#[test]
fn diamond_touches_the_four_box_midpoints() {
    let Outline::Polygon(v) = Shape::Diamond.outline(Point::new(0.0, 0.0), 8.0) else {
        panic!("diamond should be a polygon");
    };
    assert_eq!(
        v,
        vec![
            Point::new(0.0, -8.0),
            Point::new(8.0, 0.0),
            Point::new(0.0, 8.0),
            Point::new(-8.0, 0.0)
        ]
    );
}

#[test]
fn circle_and_square_use_the_full_box() {
    let c = Point::new(10.0, 10.0);
    let expected = Rect::new(0.0, 0.0, 20.0, 20.0);
    assert_eq!(Shape::Circle.outline(c, 10.0), Outline::Ellipse(expected));
    assert_eq!(Shape::Square.outline(c, 10.0), Outline::Box(expected));
    assert!(!Shape::Circle.outline(c, 10.0).to_path().elements().is_empty());
}

#[test]
fn border_stroke_stays_inside_its_box() {
    let r = border_rect(Point::new(100.0, 100.0), 38.0, 4.0);
    assert_eq!(r, Rect::new(64.0, 64.0, 136.0, 136.0));
}
