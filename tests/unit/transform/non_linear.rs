use super::*;
use crate::foundation::core::Vec2;

struct Coords(Canvas);

impl ColorSource for Coords {
    fn canvas(&self) -> Canvas {
        self.0
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        Color::new(x, y, 0.0, 255.0)
    }
}

fn fisheye(scale: f64) -> Fisheye {
    Fisheye::new(
        Coords(Canvas::new(100.0, 100.0)),
        Point::new(50.0, 50.0),
        20.0,
        scale,
    )
}

#[test]
fn fisheye_is_identity_outside_radius_and_at_center() {
    let f = fisheye(1.0);
    for p in [Point::new(50.0, 50.0), Point::new(75.0, 50.0), Point::new(0.0, 0.0)] {
        assert_eq!(f.source_point(p), p);
    }
}

#[test]
fn fisheye_zero_scale_is_identity_inside() {
    let f = fisheye(0.0);
    let p = Point::new(58.0, 44.0);
    let q = f.source_point(p);
    assert!((q - p).hypot() < 1e-12);
}

#[test]
fn fisheye_bulge_pulls_samples_toward_center_pinch_pushes_out() {
    let p = Point::new(60.0, 50.0);
    let bulge = fisheye(1.0).source_point(p);
    let pinch = fisheye(-1.0).source_point(p);
    assert!(bulge.x < 60.0 && bulge.x > 50.0, "{bulge:?}");
    assert!(pinch.x > 60.0 && pinch.x < 70.0, "{pinch:?}");
    assert!((bulge.y - 50.0).abs() < 1e-12);
    // r = 0.5: 1 - sqrt(0.75) for bulge, sqrt(0.75) for pinch.
    assert!((bulge.x - (50.0 + 20.0 * (1.0 - 0.75f64.sqrt()))).abs() < 1e-9);
    assert!((pinch.x - (50.0 + 20.0 * 0.75f64.sqrt())).abs() < 1e-9);
}

#[test]
fn fisheye_remap_is_continuous_at_radius() {
    for scale in [-1.0, -0.4, 0.3, 1.0] {
        let f = fisheye(scale);
        assert!((f.remap(1.0 - 1e-12) - 1.0).abs() < 1e-5, "{scale}");
        assert!(f.remap(0.0).abs() < 1e-12);
    }
}

#[test]
fn polar_maps_angle_and_distance() {
    let child = Coords(Canvas::new(64.0, 32.0));
    let polar = Polar::unwrap(Canvas::new(40.0, 40.0), child, Point::new(20.0, 20.0));

    // Straight left of center: atan2 = pi, so angle term = 2pi * 64 / 2pi = 64 -> wraps to 0.
    let left = polar.source_point(Point::new(10.0, 20.0));
    assert!((left.x - 64.0).abs() < 1e-9);
    assert!((left.y - 10.0).abs() < 1e-9);

    // Straight right: atan2 = 0, the half-revolution column.
    let right = polar.source_point(Point::new(25.0, 20.0));
    assert!((right.x - 32.0).abs() < 1e-9);
    assert!((right.y - 5.0).abs() < 1e-9);
    assert_eq!(polar.get_color(25.0, 20.0).g, 5);
}

#[test]
fn polar_custom_coefficients_scale_both_axes() {
    let polar = Polar::new(
        Canvas::new(10.0, 10.0),
        Coords(Canvas::new(100.0, 100.0)),
        Point::new(5.0, 5.0),
        10.0,
        3.0,
    );
    let below = polar.source_point(Point::new(5.0, 7.0));
    let expected = Vec2::new((std::f64::consts::FRAC_PI_2 + PI) * 10.0, 6.0);
    assert!((below.to_vec2() - expected).hypot() < 1e-9);
}
