use std::f64::consts::FRAC_PI_2;

use super::*;

struct Marker {
    canvas: Canvas,
    at: (f64, f64),
}

impl ColorSource for Marker {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        if (x - self.at.0).abs() < 0.25 && (y - self.at.1).abs() < 0.25 {
            Color::WHITE
        } else {
            Color::BLACK
        }
    }
}

fn marker(x: f64, y: f64) -> Marker {
    Marker {
        canvas: Canvas::new(20.0, 20.0),
        at: (x, y),
    }
}

#[test]
fn translate_moves_content_by_offset() {
    let t = Transformed::translate(marker(2.0, 3.0), Vec2::new(5.0, -1.0));
    assert_eq!(t.get_color(7.0, 2.0), Color::WHITE);
    assert_eq!(t.get_color(2.0, 3.0), Color::BLACK);
}

#[test]
fn rotate_quarter_turn_about_origin() {
    let t = Transformed::rotate(marker(15.0, 10.0), Point::new(10.0, 10.0), FRAC_PI_2);
    // +x axis rotates onto +y (screen down).
    assert_eq!(t.get_color(10.0, 15.0), Color::WHITE);
    assert_eq!(t.get_color(15.0, 10.0), Color::BLACK);
}

#[test]
fn scale_about_origin_uses_inverse_mapping() {
    let t = Transformed::scale(marker(12.0, 10.0), Point::new(10.0, 10.0), 2.0).unwrap();
    assert_eq!(t.get_color(14.0, 10.0), Color::WHITE);
    let p = t.source_point(Point::new(14.0, 10.0));
    assert!((p.x - 12.0).abs() < 1e-12 && (p.y - 10.0).abs() < 1e-12);

    let t = Transformed::scale_non_uniform(
        marker(12.0, 12.0),
        Point::new(10.0, 10.0),
        Vec2::new(2.0, 3.0),
    )
    .unwrap();
    assert_eq!(t.get_color(14.0, 16.0), Color::WHITE);
}

#[test]
fn degenerate_scale_is_rejected() {
    let err = Transformed::scale(marker(0.0, 0.0), Point::ORIGIN, 0.0)
        .err()
        .unwrap();
    assert!(err.to_string().contains("not invertible"));
}

#[test]
fn translated_content_still_wraps() {
    let t = Transformed::translate(marker(1.0, 1.0), Vec2::new(-3.0, 0.0));
    // 1 - 3 = -2 wraps to 18 on a 20 wide canvas.
    assert_eq!(t.get_color(18.0, 1.0), Color::WHITE);
}
