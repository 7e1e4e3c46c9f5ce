//! SVG geometry for the mission activity chart.
//!
//! DESIGN
//! ======
//! The chart component only emits `<path>`/`<line>`/`<text>` nodes; every
//! coordinate comes from `ChartGeometry` so the scaling rules can be tested
//! without a DOM. The y axis always starts at zero and ends on a "nice" value
//! (1, 2 or 5 times a power of ten per tick).

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::fmt::Write as _;

use mission::catalog::ChartPoint;

/// Two series plotted by the activity chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Series {
    Missions,
    Discoveries,
}

impl Series {
    pub const ALL: [Self; 2] = [Self::Missions, Self::Discoveries];

    pub fn label(self) -> &'static str {
        match self {
            Self::Missions => "Misje",
            Self::Discoveries => "Odkrycia",
        }
    }

    /// Modifier used for stroke/fill colors in CSS.
    pub fn css_key(self) -> &'static str {
        match self {
            Self::Missions => "missions",
            Self::Discoveries => "discoveries",
        }
    }

    pub fn value(self, point: &ChartPoint) -> u32 {
        match self {
            Self::Missions => point.missions,
            Self::Discoveries => point.discoveries,
        }
    }
}

/// Outer size and inner padding of the drawing area, in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub pad_top: f64,
    pub pad_right: f64,
    pub pad_bottom: f64,
    pub pad_left: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self { width: 600.0, height: 300.0, pad_top: 10.0, pad_right: 10.0, pad_bottom: 28.0, pad_left: 32.0 }
    }
}

impl ChartLayout {
    fn plot_width(&self) -> f64 {
        (self.width - self.pad_left - self.pad_right).max(1.0)
    }

    fn plot_height(&self) -> f64 {
        (self.height - self.pad_top - self.pad_bottom).max(1.0)
    }

    /// y coordinate of the zero line.
    pub fn baseline(&self) -> f64 {
        self.pad_top + self.plot_height()
    }
}

const TARGET_TICKS: u32 = 4;

/// Tick spacing for an axis reaching `max` with roughly `target` intervals.
pub fn tick_step(max: u32, target: u32) -> u32 {
    let raw = max.div_ceil(target.max(1)).max(1);
    let mut magnitude = 1_u32;
    while magnitude.saturating_mul(10) <= raw {
        magnitude *= 10;
    }
    [1, 2, 5, 10]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= raw)
        .unwrap_or(raw)
}

/// Scales for one chart render.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    layout: ChartLayout,
    count: usize,
    y_max: u32,
    y_step: u32,
}

impl ChartGeometry {
    pub fn new(points: &[ChartPoint], layout: ChartLayout) -> Self {
        let data_max = points
            .iter()
            .flat_map(|p| Series::ALL.map(|s| s.value(p)))
            .max()
            .unwrap_or(0);
        let y_step = tick_step(data_max, TARGET_TICKS);
        let y_max = data_max.div_ceil(y_step).max(1) * y_step;
        Self { layout, count: points.len(), y_max, y_step }
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn y_max(&self) -> u32 {
        self.y_max
    }

    /// Tick values from zero to `y_max` inclusive.
    pub fn y_ticks(&self) -> Vec<u32> {
        (0..=self.y_max).step_by(self.y_step as usize).collect()
    }

    /// x coordinate of the `index`-th point; a single point sits in the middle.
    #[allow(clippy::cast_precision_loss)]
    pub fn x(&self, index: usize) -> f64 {
        let plot = self.layout.plot_width();
        if self.count <= 1 {
            return self.layout.pad_left + plot / 2.0;
        }
        self.layout.pad_left + plot * index as f64 / (self.count - 1) as f64
    }

    pub fn y(&self, value: u32) -> f64 {
        let ratio = f64::from(value.min(self.y_max)) / f64::from(self.y_max);
        self.layout.baseline() - ratio * self.layout.plot_height()
    }

    /// Polyline through the series values.
    pub fn line_path(&self, values: &[u32]) -> String {
        let mut d = String::new();
        for (i, v) in values.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{:.1},{:.1} ", self.x(i), self.y(*v));
        }
        d.trim_end().to_owned()
    }

    /// Closed area between the series line and the zero line.
    pub fn area_path(&self, values: &[u32]) -> String {
        if values.is_empty() {
            return String::new();
        }
        let base = self.layout.baseline();
        format!(
            "{} L{:.1},{base:.1} L{:.1},{base:.1} Z",
            self.line_path(values),
            self.x(values.len() - 1),
            self.x(0),
        )
    }

    pub fn series_values(points: &[ChartPoint], series: Series) -> Vec<u32> {
        points.iter().map(|p| series.value(p)).collect()
    }
}
