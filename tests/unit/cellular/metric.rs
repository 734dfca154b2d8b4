use super::*;

#[test]
fn metrics_on_a_3_4_offset() {
    assert_eq!(Metric::Euclidean.distance(3.0, 4.0), 5.0);
    assert_eq!(Metric::Manhattan.distance(3.0, 4.0), 7.0);
    assert_eq!(Metric::Chebyshev.distance(3.0, 4.0), 4.0);
    assert_eq!(Metric::Minkowski.distance(4.0, 9.0), 25.0);
    for m in [
        Metric::Euclidean,
        Metric::Manhattan,
        Metric::Chebyshev,
        Metric::Minkowski,
    ] {
        assert_eq!(m.distance(0.0, 0.0), 0.0);
    }
}

#[test]
fn toroidal_delta_takes_the_short_way_round() {
    assert_eq!(toroidal_delta(1.0, 9.0, 10.0), 2.0);
    assert_eq!(toroidal_delta(9.0, 1.0, 10.0), 2.0);
    assert_eq!(toroidal_delta(2.0, 7.0, 10.0), 5.0);
    assert_eq!(toroidal_delta(3.0, 4.0, 10.0), 1.0);
}

#[test]
fn cell_kinds_combine_nearest_distances() {
    assert_eq!(CellKind::Cells.value(3.0, 5.0), 9.0);
    assert_eq!(CellKind::Net.value(3.0, 5.0), 2.0);
    assert_eq!(CellKind::Balls.value(3.0, 5.0), 15.0);
}

#[test]
fn kinds_and_metrics_use_snake_case_names() {
    let m: Metric = serde_json::from_str("\"chebyshev\"").unwrap();
    assert_eq!(m, Metric::Chebyshev);
    assert_eq!(serde_json::to_string(&CellKind::Net).unwrap(), "\"net\"");
}
