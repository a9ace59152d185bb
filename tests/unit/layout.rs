use super::*;

#[test]
fn five_slots_are_symmetric_about_the_canvas_center() {
    let p = compute_positions(5, 512, 512, 80);
    assert_eq!(p.len(), 5);
    assert_eq!(p[0], Position::new(96, 256));
    assert_eq!(p[4], Position::new(416, 256));
    assert!((p[0].x + p[4].x - 512).abs() <= 1);
    for w in p.windows(2) {
        assert_eq!(w[1].x - w[0].x, 80);
    }
}

#[test]
fn odd_widths_round_consistently() {
    let p = compute_positions(3, 301, 201, 50);
    // (301 - 150) / 2 = 75, + 25 = 100
    assert_eq!(p[0], Position::new(100, 100));
    assert_eq!(p[2].x, 200);
    assert!((p[0].x + p[2].x - 301).abs() <= 1);
}

#[test]
fn zero_count_is_empty() {
    assert!(compute_positions(0, 512, 512, 80).is_empty());
}

#[test]
fn rows_wider_than_the_canvas_floor_toward_negative() {
    let p = compute_positions(4, 100, 100, 60);
    // (100 - 240) / 2 = -70, + 30 = -40
    assert_eq!(p[0].x, -40);
    assert_eq!(p[3].x, 140);
}

#[test]
fn layout_is_a_pure_function() {
    assert_eq!(
        compute_positions(7, 512, 512, 80),
        compute_positions(7, 512, 512, 80)
    );
}
