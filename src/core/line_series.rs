use serde::Serialize;

use crate::core::{BandScale, ComputedPoint, CurveKind, DataPoint, LinearScale, Point, area_path};

/// Path geometry of one line series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineGeometry {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_path: Option<String>,
    /// Marker radius when point markers are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_radius: Option<f64>,
}

/// Maps a series' data points to pixel space.
///
/// The function is deterministic and side-effect free; points whose category
/// is not on the axis are skipped, all others keep their data order.
#[must_use]
pub fn project_points(
    data: &[DataPoint],
    x_scale: &BandScale,
    y_scale: LinearScale,
) -> Vec<ComputedPoint> {
    data.iter()
        .filter_map(|point| {
            let x = x_scale.apply(&point.category)?;
            Some(ComputedPoint {
                x,
                y: y_scale.apply(point.value),
                data_x: point.category.clone(),
                data_y: point.value,
                id: point.id.clone(),
            })
        })
        .collect()
}

/// Builds the stroke path (and optional area fill) through projected points.
///
/// `area_baseline` is the pixel y the area closes against.
#[must_use]
pub fn project_line_series(
    points: &[ComputedPoint],
    curve: CurveKind,
    area_baseline: Option<f64>,
    marker_radius: Option<f64>,
) -> LineGeometry {
    let pixels: Vec<Point> = points.iter().map(ComputedPoint::position).collect();
    LineGeometry {
        path: curve.path(&pixels),
        area_path: area_baseline
            .filter(|_| !pixels.is_empty())
            .map(|baseline| area_path(&pixels, baseline, curve)),
        marker_radius,
    }
}
