use serde::Serialize;

use crate::core::{
    AnnotationGeometry, AnnotationShape, BandScale, BarRect, ComputedPoint, LineGeometry,
    LinearScale, PieLayout, PieSlice, PlotArea, Viewport,
};
use crate::error::{ChartError, ChartResult};

use super::SECONDARY_Y_AXIS;

/// Category axis tick at a band center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTick {
    pub label: String,
    pub position: f64,
}

/// Numeric axis tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueTick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

impl ValueTick {
    #[must_use]
    pub fn new(value: f64, scale: LinearScale) -> Self {
        Self {
            value,
            position: scale.apply(value),
            label: format_tick_label(value),
        }
    }
}

/// Shortest decimal text for a tick value, never `-0`.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else {
        format!("{value}")
    }
}

/// Marks produced for one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SeriesMarks {
    Line(LineGeometry),
    Bar { rects: Vec<BarRect> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesGeometry {
    /// Position of the series in [`super::ChartConfig::series`].
    pub series_index: usize,
    pub name: String,
    pub color: String,
    /// Value axis the series was mapped through after routing.
    pub y_axis_index: usize,
    pub points: Vec<ComputedPoint>,
    pub marks: SeriesMarks,
}

/// Geometry of an axis-based (line/bar) chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartesianGeometry {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub x_scale: BandScale,
    pub y_scale: LinearScale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_scale_secondary: Option<LinearScale>,
    pub x_ticks: Vec<CategoryTick>,
    pub y_ticks: Vec<ValueTick>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub y_ticks_secondary: Vec<ValueTick>,
    pub series: Vec<SeriesGeometry>,
    pub annotations: Vec<AnnotationGeometry>,
}

impl CartesianGeometry {
    /// Scale for a routed axis index; unknown indices resolve to the primary axis.
    #[must_use]
    pub fn y_scale_for(&self, axis: usize) -> LinearScale {
        match (axis, self.y_scale_secondary) {
            (SECONDARY_Y_AXIS, Some(secondary)) => secondary,
            _ => self.y_scale,
        }
    }

    #[must_use]
    pub fn series_by_index(&self, series_index: usize) -> Option<&SeriesGeometry> {
        self.series
            .iter()
            .find(|series| series.series_index == series_index)
    }
}

/// Geometry of a pie/donut chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieGeometry {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub layout: PieLayout,
    pub slices: Vec<PieSlice>,
}

/// Complete output of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ChartGeometry {
    Cartesian(CartesianGeometry),
    Pie(PieGeometry),
}

impl ChartGeometry {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        match self {
            Self::Cartesian(geometry) => geometry.viewport,
            Self::Pie(geometry) => geometry.viewport,
        }
    }

    #[must_use]
    pub fn plot(&self) -> PlotArea {
        match self {
            Self::Cartesian(geometry) => geometry.plot,
            Self::Pie(geometry) => geometry.plot,
        }
    }

    #[must_use]
    pub fn is_pie(&self) -> bool {
        matches!(self, Self::Pie(_))
    }

    #[must_use]
    pub fn as_cartesian(&self) -> Option<&CartesianGeometry> {
        match self {
            Self::Cartesian(geometry) => Some(geometry),
            Self::Pie(_) => None,
        }
    }

    #[must_use]
    pub fn as_pie(&self) -> Option<&PieGeometry> {
        match self {
            Self::Pie(geometry) => Some(geometry),
            Self::Cartesian(_) => None,
        }
    }

    /// Checks that every emitted coordinate is finite.
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Cartesian(geometry) => {
                for series in &geometry.series {
                    if series
                        .points
                        .iter()
                        .any(|point| !point.x.is_finite() || !point.y.is_finite())
                    {
                        return Err(non_finite("point", &series.name));
                    }
                    if let SeriesMarks::Bar { rects } = &series.marks {
                        if rects.iter().any(|rect| {
                            !rect.x.is_finite()
                                || !rect.y.is_finite()
                                || !rect.width.is_finite()
                                || !rect.height.is_finite()
                        }) {
                            return Err(non_finite("bar", &series.name));
                        }
                    }
                }
                for annotation in &geometry.annotations {
                    let finite = match annotation.shape {
                        AnnotationShape::VerticalLine { x, y1, y2 } => {
                            x.is_finite() && y1.is_finite() && y2.is_finite()
                        }
                        AnnotationShape::Region { x0, x1, y0, y1 } => {
                            x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()
                        }
                    };
                    if !finite {
                        return Err(ChartError::InvalidData(format!(
                            "annotation {} has non-finite coordinates",
                            annotation.index
                        )));
                    }
                }
            }
            Self::Pie(geometry) => {
                for slice in &geometry.slices {
                    if !slice.start_angle.is_finite() || !slice.end_angle.is_finite() {
                        return Err(non_finite("slice", &slice.name));
                    }
                }
            }
        }
        Ok(())
    }
}

fn non_finite(kind: &str, series: &str) -> ChartError {
    ChartError::InvalidData(format!(
        "series `{series}` produced a non-finite {kind} coordinate"
    ))
}
