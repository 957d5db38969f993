use std::f64::consts::TAU;

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::api::{ChartGeometry, PieGeometry};
use crate::core::{BandScale, ComputedPoint, PIE_START_ANGLE};

/// Chart element under a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HitTarget {
    Point {
        series_index: usize,
        point_index: usize,
        distance: f64,
    },
    Slice {
        slice_index: usize,
        series_index: usize,
    },
}

/// Index of the point horizontally closest to `x`; ties keep the first point.
#[must_use]
pub fn nearest_point(points: &[ComputedPoint], x: f64) -> Option<usize> {
    if !x.is_finite() {
        return None;
    }
    points
        .iter()
        .enumerate()
        .min_by_key(|(_, point)| OrderedFloat((point.x - x).abs()))
        .map(|(index, _)| index)
}

/// Category label whose center is closest to `x`.
#[must_use]
pub fn nearest_category(scale: &BandScale, x: f64) -> Option<&str> {
    scale.nearest_category(x)
}

/// Index of the slice covering `(x, y)`.
///
/// The pointer must lie inside the ring between the inner and outer radius;
/// gaps left by the pad angle hit nothing.
#[must_use]
pub fn slice_at(pie: &PieGeometry, x: f64, y: f64) -> Option<usize> {
    let dx = x - pie.layout.center.x;
    let dy = y - pie.layout.center.y;
    let radius = dx.hypot(dy);
    if !radius.is_finite() || radius > pie.layout.outer_radius || radius < pie.layout.inner_radius
    {
        return None;
    }
    let angle = (dy.atan2(dx) - PIE_START_ANGLE).rem_euclid(TAU);
    pie.slices.iter().position(|slice| {
        let start = slice.start_angle - PIE_START_ANGLE;
        let end = slice.end_angle - PIE_START_ANGLE;
        angle >= start && angle < end
    })
}

/// Resolves the element under the pointer.
///
/// Axis charts return the nearest computed point within `max_distance`
/// pixels (Euclidean); pie charts return the slice under the pointer.
#[must_use]
pub fn hit_test(geometry: &ChartGeometry, x: f64, y: f64, max_distance: f64) -> Option<HitTarget> {
    match geometry {
        ChartGeometry::Cartesian(cartesian) => cartesian
            .series
            .iter()
            .flat_map(|series| {
                series.points.iter().enumerate().map(move |(point_index, point)| {
                    (series.series_index, point_index, (point.x - x).hypot(point.y - y))
                })
            })
            .filter(|(_, _, distance)| *distance <= max_distance)
            .min_by_key(|(_, _, distance)| OrderedFloat(*distance))
            .map(|(series_index, point_index, distance)| HitTarget::Point {
                series_index,
                point_index,
                distance,
            }),
        ChartGeometry::Pie(pie) => slice_at(pie, x, y).map(|slice_index| HitTarget::Slice {
            slice_index,
            series_index: pie.slices[slice_index].series_index,
        }),
    }
}
