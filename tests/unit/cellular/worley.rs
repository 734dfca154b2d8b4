use super::*;
use rand::{SeedableRng, rngs::StdRng};

fn palette() -> Palette {
    Palette::new(Color::from_rgba8(10, 20, 30, 255), Color::WHITE)
}

fn all_pixels(canvas: Canvas) -> impl Iterator<Item = (f64, f64)> {
    (0..canvas.height)
        .flat_map(move |y| (0..canvas.width).map(move |x| (f64::from(x), f64::from(y))))
}

#[test]
fn point_count_follows_density_with_minimum_of_two() {
    let canvas = Canvas::new(20.0, 10.0);
    assert_eq!(point_count(canvas, 10.0), 20);
    assert_eq!(point_count(canvas, 1000.0), 2);
    assert_eq!(point_count(canvas, 0.0), 2);

    let noise = CellularNoise::with_rng(
        canvas,
        palette(),
        25.0,
        Metric::Euclidean,
        CellKind::Cells,
        &mut StdRng::seed_from_u64(1),
    );
    assert_eq!(noise.points().len(), 8);
    for p in noise.points() {
        assert!(p.x >= 0.0 && p.x < 20.0 && p.x.fract() == 0.0);
        assert!(p.y >= 0.0 && p.y < 10.0 && p.y.fract() == 0.0);
    }
}

#[test]
fn normalized_values_are_in_unit_range_and_min1_le_min2() {
    let canvas = Canvas::new(16.0, 12.0);
    for metric in [
        Metric::Euclidean,
        Metric::Manhattan,
        Metric::Chebyshev,
        Metric::Minkowski,
    ] {
        for kind in [CellKind::Cells, CellKind::Net, CellKind::Balls] {
            let noise = CellularNoise::with_rng(
                canvas,
                palette(),
                12.0,
                metric,
                kind,
                &mut StdRng::seed_from_u64(2),
            );
            for (x, y) in all_pixels(canvas) {
                let cell = noise.cell(x, y);
                assert!(cell.min1 <= cell.min2, "{metric:?} {kind:?}");
                assert!(
                    (0.0..=1.0).contains(&cell.value),
                    "{metric:?} {kind:?} {}",
                    cell.value
                );
            }
        }
    }
}

#[test]
fn feature_point_samples_the_base_color() {
    let canvas = Canvas::new(16.0, 16.0);
    for kind in [CellKind::Cells, CellKind::Balls] {
        let noise = CellularNoise::with_rng(
            canvas,
            palette(),
            20.0,
            Metric::Euclidean,
            kind,
            &mut StdRng::seed_from_u64(3),
        );
        let p = noise.points()[0];
        assert_eq!(noise.distances(p.x, p.y).0, 0.0);
        assert_eq!(noise.value(p.x, p.y), 0.0);
        assert_eq!(noise.get_color(p.x, p.y), palette().base);
    }
}

#[test]
fn distances_wrap_around_edges() {
    let canvas = Canvas::new(10.0, 10.0);
    let noise = CellularNoise::from_points(
        canvas,
        palette(),
        vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)],
        Metric::Euclidean,
        CellKind::Cells,
    );
    assert_eq!(noise.distances(9.0, 0.0).0, 1.0);
    assert_eq!(noise.distances(0.0, 9.0).0, 1.0);
    assert_eq!(
        noise.get_color(9.0, 0.0),
        noise.get_color(1.0, 0.0),
        "mirror pixels across the seam must match"
    );
}

#[test]
fn net_kind_peaks_between_points() {
    let canvas = Canvas::new(10.0, 1.0);
    let noise = CellularNoise::from_points(
        canvas,
        palette(),
        vec![Point::new(2.0, 0.0), Point::new(6.0, 0.0)],
        Metric::Manhattan,
        CellKind::Net,
    );
    // Midpoint between the points has equal distances.
    assert_eq!(noise.distances(4.0, 0.0), (2.0, 2.0));
    assert_eq!(noise.value(4.0, 0.0), 0.0);
    assert_eq!(noise.value(2.0, 0.0), 1.0);
}

#[test]
fn flat_field_is_not_patched() {
    let canvas = Canvas::new(1.0, 1.0);
    let noise = CellularNoise::from_points(
        canvas,
        palette(),
        vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0)],
        Metric::Euclidean,
        CellKind::Cells,
    );
    assert!(noise.value(0.0, 0.0).is_nan());
}
