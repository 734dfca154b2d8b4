use super::*;

fn horizontal() -> LinearGradient {
    LinearGradient::new(
        Canvas::new(10.0, 4.0),
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        GradientStops::from_pairs([(0.0, Color::BLACK), (1.0, Color::WHITE)]),
    )
}

#[test]
fn projection_runs_along_axis() {
    let g = horizontal();
    assert_eq!(g.position(Point::new(5.0, 3.0)), 0.5);
    assert_eq!(g.get_color(0.0, 2.0), Color::BLACK);
    assert_eq!(g.get_color(5.0, 1.0), Color::from_rgba8(127, 127, 127, 255));
}

#[test]
fn zero_length_axis_is_not_guarded() {
    let g = LinearGradient::new(
        Canvas::new(4.0, 4.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 1.0),
        GradientStops::from_pairs([(0.0, Color::BLACK), (1.0, Color::WHITE)]),
    );
    assert!(g.position(Point::new(2.0, 2.0)).is_nan());
    // NaN channels collapse to zero on construction.
    assert_eq!(g.get_color(2.0, 2.0), Color::TRANSPARENT);
}
