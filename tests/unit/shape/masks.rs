use super::{
    circle::CircleMask,
    ellipse::EllipseMask,
    path::{FillRule, PathMask},
    rect::RectMask,
    roof_tiles::{RoofTiles, TileLayout},
};
use crate::{
    color::rgba::Color,
    foundation::core::{BezPath, Canvas, Point, Rect, Vec2},
    source::{ColorSource, solid::Solid},
};

const FG: Color = Color::from_rgba8(200, 0, 0, 255);
const BG: Color = Color::from_rgba8(0, 0, 200, 255);

fn fg() -> Solid {
    Solid::new(Canvas::new(32.0, 32.0), FG)
}

fn bg() -> Solid {
    Solid::new(Canvas::new(32.0, 32.0), BG)
}

#[test]
fn rect_mask_or_test_accepts_every_finite_point() {
    let m = RectMask::new(fg(), bg(), Rect::new(10.0, 10.0, 12.0, 12.0));
    assert!(m.contains(Point::new(11.0, 11.0)));
    assert!(m.contains(Point::new(0.0, 30.0)));
    assert_eq!(m.get_color(31.0, 0.0), FG);
    assert!(!m.contains(Point::new(f64::NAN, f64::NAN)));
}

#[test]
fn ellipse_mask_uses_normalized_distance() {
    let m = EllipseMask::new(fg(), bg(), Point::new(16.0, 16.0), Vec2::new(8.0, 4.0));
    assert_eq!(m.get_color(23.0, 16.0), FG);
    assert_eq!(m.get_color(24.0, 16.0), FG);
    assert_eq!(m.get_color(16.0, 21.0), BG);
    assert_eq!(m.get_color(22.0, 19.0), BG);
    assert_eq!(m.get_color(16.0, 19.0), FG);
}

#[test]
fn circle_mask_has_one_pixel_soft_edge() {
    let m = CircleMask::new(fg(), bg(), Point::new(16.0, 16.0), 5.0);
    assert_eq!(m.get_color(16.0, 16.0), FG);
    assert_eq!(m.get_color(20.0, 16.0), FG);
    assert_eq!(m.get_color(22.0, 16.0), BG);
    assert_eq!(m.coverage(Point::new(21.0, 16.0)), 0.5);
    assert_eq!(m.get_color(21.0, 16.0), Color::from_rgba8(100, 0, 100, 255));
}

#[test]
fn path_mask_honours_fill_rule() {
    // Two nested squares with the same orientation: winding 2 in the middle.
    let mut path = BezPath::new();
    for (lo, hi) in [(4.0, 28.0), (10.0, 22.0)] {
        path.move_to((lo, lo));
        path.line_to((hi, lo));
        path.line_to((hi, hi));
        path.line_to((lo, hi));
        path.close_path();
    }
    let nonzero = PathMask::new(fg(), bg(), path.clone(), FillRule::NonZero);
    let evenodd = PathMask::new(fg(), bg(), path, FillRule::EvenOdd);

    assert_eq!(nonzero.get_color(16.0, 16.0), FG);
    assert_eq!(evenodd.get_color(16.0, 16.0), BG);
    assert_eq!(nonzero.get_color(6.0, 16.0), FG);
    assert_eq!(evenodd.get_color(6.0, 16.0), FG);
    assert_eq!(nonzero.get_color(1.0, 1.0), BG);
}

#[test]
fn polygon_mask_covers_triangle() {
    let tri = [
        Point::new(2.0, 2.0),
        Point::new(30.0, 2.0),
        Point::new(2.0, 30.0),
    ];
    let m = PathMask::polygon(fg(), bg(), &tri, FillRule::NonZero);
    assert_eq!(m.get_color(5.0, 5.0), FG);
    assert_eq!(m.get_color(25.0, 25.0), BG);
}

#[test]
fn roof_tiles_alternate_grout_and_shaded_tiles() {
    let m = RoofTiles::new(
        fg(),
        bg(),
        TileLayout {
            horizontal_count: 4.0,
            vertical_count: 4.0,
            ridge: 0.0,
            border: 0.25,
        },
    );
    // Tile rows are 8 px high; the first quarter of each row is grout.
    assert_eq!(m.get_color(3.0, 8.0), BG);
    assert_eq!(m.get_color(3.0, 9.5), BG);
    assert_eq!(m.get_color(3.0, 12.0), FG.lerp(BG, 0.25));
    assert!((m.row_fraction(Point::new(0.0, 14.0)) - 0.75).abs() < 1e-12);
}

#[test]
fn roof_tile_ridge_bends_rows_and_staggers() {
    let layout = TileLayout {
        horizontal_count: 4.0,
        vertical_count: 4.0,
        ridge: 0.2,
        border: 0.1,
    };
    let m = RoofTiles::new(fg(), bg(), layout);
    // Tile edge (u integer) has no ridge offset; tile middle has the full offset.
    let edge = m.row_fraction(Point::new(0.0, 2.0));
    let middle = m.row_fraction(Point::new(4.0, 2.0));
    assert!((edge - 0.25).abs() < 1e-12);
    assert!((middle - 0.45).abs() < 1e-12);
    // Odd rows are shifted half a tile, so x = 0 sits mid-tile there.
    let odd = m.row_fraction(Point::new(0.0, 10.0));
    assert!((odd - 0.45).abs() < 1e-12);
}
