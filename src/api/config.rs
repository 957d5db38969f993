use serde::{Deserialize, Serialize};

use crate::core::{AnnotationConfig, CurveKind, DataPoint, Insets, Toggle};

/// Secondary value axis index in [`SeriesConfig::y_axis_index`].
pub const SECONDARY_Y_AXIS: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Line,
    Bar,
    Pie,
}

/// Area fill below a line series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaStyle {
    pub opacity: f64,
}

impl Default for AreaStyle {
    fn default() -> Self {
        Self { opacity: 0.2 }
    }
}

/// Circular markers drawn on every data point of a line series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointMarkerStyle {
    pub radius: f64,
}

impl Default for PointMarkerStyle {
    fn default() -> Self {
        Self { radius: 3.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub curve: CurveKind,
    pub stroke_width: f64,
    pub area: Toggle<AreaStyle>,
    pub points: Toggle<PointMarkerStyle>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            curve: CurveKind::Linear,
            stroke_width: 2.0,
            area: Toggle::Disabled,
            points: Toggle::Enabled(PointMarkerStyle::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    /// Fixed bar width in pixels; sized from the category slot when `None`.
    pub width: Option<f64>,
    pub corner_radius: f64,
}

/// Slice labels placed outside the pie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieLabelStyle {
    /// Distance between the outer radius and the label anchor, in pixels.
    pub offset: f64,
}

impl Default for PieLabelStyle {
    fn default() -> Self {
        Self { offset: 12.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieStyle {
    /// Outer radius as a share of half the smaller plot dimension.
    pub radius_ratio: f64,
    /// Inner radius as a share of the outer radius; `0` draws a pie, `> 0` a donut.
    pub inner_radius_ratio: f64,
    /// Angular gap between slices, in radians.
    pub pad_angle: f64,
    pub labels: Toggle<PieLabelStyle>,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            radius_ratio: 0.8,
            inner_radius_ratio: 0.0,
            pad_angle: 0.0,
            labels: Toggle::Disabled,
        }
    }
}

/// One named data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub name: String,
    pub color: String,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    #[serde(default)]
    pub data: Vec<DataPoint>,
    /// `0` routes to the primary value axis, `1` to the secondary one.
    #[serde(default)]
    pub y_axis_index: usize,
    #[serde(default)]
    pub line: LineStyle,
    #[serde(default)]
    pub bar: BarStyle,
    #[serde(default)]
    pub pie: PieStyle,
}

impl SeriesConfig {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        kind: SeriesKind,
        data: Vec<DataPoint>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            kind,
            data,
            y_axis_index: 0,
            line: LineStyle::default(),
            bar: BarStyle::default(),
            pie: PieStyle::default(),
        }
    }

    #[must_use]
    pub fn line(name: impl Into<String>, color: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self::new(name, color, SeriesKind::Line, data)
    }

    #[must_use]
    pub fn bar(name: impl Into<String>, color: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self::new(name, color, SeriesKind::Bar, data)
    }

    #[must_use]
    pub fn pie(name: impl Into<String>, color: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self::new(name, color, SeriesKind::Pie, data)
    }

    #[must_use]
    pub fn with_y_axis_index(mut self, index: usize) -> Self {
        self.y_axis_index = index;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line = style;
        self
    }

    #[must_use]
    pub fn with_bar_style(mut self, style: BarStyle) -> Self {
        self.bar = style;
        self
    }

    #[must_use]
    pub fn with_pie_style(mut self, style: PieStyle) -> Self {
        self.pie = style;
        self
    }
}

/// Ordered category labels for the horizontal axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryAxisConfig {
    pub categories: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl CategoryAxisConfig {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            title: None,
        }
    }
}

/// Numeric axis bounds; missing bounds are inferred from the routed series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueAxisConfig {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub tick_count: usize,
    pub title: Option<String>,
}

impl Default for ValueAxisConfig {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            tick_count: crate::core::DEFAULT_TICK_COUNT,
            title: None,
        }
    }
}

impl ValueAxisConfig {
    #[must_use]
    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }
}

/// Immutable input snapshot for one layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub series: Vec<SeriesConfig>,
    pub x_axis: Option<CategoryAxisConfig>,
    pub y_axis: ValueAxisConfig,
    pub y_axis_secondary: Toggle<ValueAxisConfig>,
    pub padding: Insets,
    pub annotations: Vec<AnnotationConfig>,
}

impl ChartConfig {
    #[must_use]
    pub fn new(series: Vec<SeriesConfig>) -> Self {
        Self {
            series,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: CategoryAxisConfig) -> Self {
        self.x_axis = Some(axis);
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: ValueAxisConfig) -> Self {
        self.y_axis = axis;
        self
    }

    #[must_use]
    pub fn with_secondary_y_axis(mut self, axis: ValueAxisConfig) -> Self {
        self.y_axis_secondary = Toggle::Enabled(axis);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: AnnotationConfig) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// A chart is drawn as a pie when every series is a pie.
    ///
    /// An empty series list qualifies and lays out as a pie with no slices.
    #[must_use]
    pub fn is_pie_mode(&self) -> bool {
        self.series
            .iter()
            .all(|series| series.kind == SeriesKind::Pie)
    }

    /// Value axis a series is evaluated against.
    ///
    /// Series asking for the secondary axis fall back to the primary one unless
    /// a secondary axis is configured.
    #[must_use]
    pub fn effective_y_axis(&self, series: &SeriesConfig) -> usize {
        if series.y_axis_index == SECONDARY_Y_AXIS && self.y_axis_secondary.is_enabled() {
            SECONDARY_Y_AXIS
        } else {
            0
        }
    }
}
