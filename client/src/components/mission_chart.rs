//! Two-series SVG area chart of monthly activity.

use leptos::prelude::*;
use mission::catalog::ChartPoint;

use crate::util::chart::{ChartGeometry, ChartLayout, Series};

#[component]
pub fn MissionChart(points: &'static [ChartPoint]) -> impl IntoView {
    let layout = ChartLayout::default();
    let geo = ChartGeometry::new(points, layout);
    let view_box = format!("0 0 {} {}", layout.width, layout.height);
    let left = layout.pad_left;
    let right = layout.width - layout.pad_right;
    let label_y = layout.height - 8.0;

    let grid = geo
        .y_ticks()
        .into_iter()
        .map(|tick| {
            let y = geo.y(tick);
            view! {
                <g class="mission-chart__grid">
                    <line x1=left x2=right y1=y y2=y />
                    <text class="mission-chart__tick" x={left - 6.0} y={y + 4.0} text-anchor="end">{tick}</text>
                </g>
            }
        })
        .collect_view();

    let months = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            view! {
                <text class="mission-chart__month" x={geo.x(i)} y=label_y text-anchor="middle">{p.month}</text>
            }
        })
        .collect_view();

    let series = Series::ALL
        .into_iter()
        .map(|s| {
            let values = ChartGeometry::series_values(points, s);
            let dots = points
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    view! {
                        <circle class=format!("mission-chart__dot mission-chart__dot--{}", s.css_key()) cx={geo.x(i)} cy={geo.y(s.value(p))} r="4">
                            <title>{format!("{}: {} {}", p.month, s.label(), s.value(p))}</title>
                        </circle>
                    }
                })
                .collect_view();
            view! {
                <g class=format!("mission-chart__series mission-chart__series--{}", s.css_key())>
                    <path class="mission-chart__area" d={geo.area_path(&values)} />
                    <path class="mission-chart__line" d={geo.line_path(&values)} />
                    {dots}
                </g>
            }
        })
        .collect_view();

    let legend = Series::ALL
        .into_iter()
        .map(|s| {
            view! {
                <li class=format!("mission-chart__legend-item mission-chart__legend-item--{}", s.css_key())>
                    {s.label()}
                </li>
            }
        })
        .collect_view();

    view! {
        <figure class="mission-chart">
            <svg class="mission-chart__svg" viewBox=view_box role="img" aria-label="Aktywność misji w ostatnich miesiącach">
                {grid}
                {series}
                {months}
            </svg>
            <ul class="mission-chart__legend">{legend}</ul>
        </figure>
    }
}
