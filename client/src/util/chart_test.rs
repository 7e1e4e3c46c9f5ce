use super::*;
use mission::catalog::MISSION_CHART_DATA;

fn point(missions: u32, discoveries: u32) -> ChartPoint {
    ChartPoint { month: "X", missions, discoveries }
}

#[test]
fn tick_step_picks_one_two_five_multiples() {
    assert_eq!(tick_step(7, 4), 2);
    assert_eq!(tick_step(13, 4), 5);
    assert_eq!(tick_step(37, 4), 10);
    assert_eq!(tick_step(0, 4), 1);
    assert_eq!(tick_step(4, 4), 1);
}

#[test]
fn y_axis_covers_both_series() {
    let geo = ChartGeometry::new(MISSION_CHART_DATA, ChartLayout::default());
    assert_eq!(geo.y_max(), 8);
    assert_eq!(geo.y_ticks(), vec![0, 2, 4, 6, 8]);
}

#[test]
fn empty_series_still_has_a_unit_axis() {
    let geo = ChartGeometry::new(&[], ChartLayout::default());
    assert_eq!(geo.y_max(), 1);
    assert_eq!(geo.area_path(&[]), "");
}

#[test]
fn x_spans_plot_width_edge_to_edge() {
    let geo = ChartGeometry::new(MISSION_CHART_DATA, ChartLayout::default());
    assert_eq!(geo.x(0), 32.0);
    assert_eq!(geo.x(MISSION_CHART_DATA.len() - 1), 590.0);
}

#[test]
fn single_point_is_centered() {
    let geo = ChartGeometry::new(&[point(3, 1)], ChartLayout::default());
    assert_eq!(geo.x(0), 32.0 + 558.0 / 2.0);
}

#[test]
fn y_maps_zero_to_baseline_and_max_to_top() {
    let geo = ChartGeometry::new(MISSION_CHART_DATA, ChartLayout::default());
    assert_eq!(geo.y(0), 272.0);
    assert_eq!(geo.y(8), 10.0);
    assert_eq!(geo.y(4), 141.0);
}

#[test]
fn line_and_area_paths() {
    let points = [point(0, 0), point(2, 1)];
    let geo = ChartGeometry::new(&points, ChartLayout::default());
    let values = ChartGeometry::series_values(&points, Series::Missions);
    assert_eq!(values, vec![0, 2]);
    assert_eq!(geo.line_path(&values), "M32.0,272.0 L590.0,10.0");
    assert_eq!(
        geo.area_path(&values),
        "M32.0,272.0 L590.0,10.0 L590.0,272.0 L32.0,272.0 Z"
    );
}

#[test]
fn series_metadata() {
    assert_eq!(Series::Missions.label(), "Misje");
    assert_eq!(Series::Discoveries.css_key(), "discoveries");
    assert_eq!(Series::Discoveries.value(&point(1, 9)), 9);
}
