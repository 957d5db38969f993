use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::Serialize;

use crate::core::path::PathBuilder;
use crate::core::{DataPoint, Point};

/// Angle of the first slice edge: 12 o'clock.
pub const PIE_START_ANGLE: f64 = -FRAC_PI_2;

const FULL_CIRCLE_EPSILON: f64 = 1e-9;

/// One pie series reduced to the fields slice geometry needs.
#[derive(Debug, Clone, Copy)]
pub struct PieSource<'a> {
    pub series_index: usize,
    pub name: &'a str,
    pub color: &'a str,
    pub data: &'a [DataPoint],
}

impl PieSource<'_> {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.data.iter().map(|point| point.value).sum()
    }
}

/// Placement shared by every slice of one pie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PieLayout {
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// Angular gap between neighbouring slices, in radians.
    pub pad_angle: f64,
    /// Distance beyond the outer radius for label anchors; `None` disables anchors.
    pub label_offset: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieBreakdownEntry {
    pub label: String,
    pub value: f64,
}

/// A rendered wedge built from one series' aggregated value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub series_index: usize,
    pub name: String,
    pub color: String,
    pub value: f64,
    pub percent: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_anchor: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<PieBreakdownEntry>>,
}

impl PieSlice {
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Lays out one slice per source, clockwise from 12 o'clock.
///
/// Returns no slices when the grand total is not positive.
#[must_use]
pub fn compute_pie_slices(sources: &[PieSource<'_>], layout: PieLayout) -> Vec<PieSlice> {
    let totals: Vec<f64> = sources.iter().map(PieSource::total).collect();
    let grand_total: f64 = totals.iter().sum();
    if !(grand_total > 0.0) || !grand_total.is_finite() {
        return Vec::new();
    }

    let half_pad = layout.pad_angle.max(0.0) * 0.5;
    let mut cursor = PIE_START_ANGLE;
    let mut slices = Vec::with_capacity(sources.len());
    for (source, value) in sources.iter().zip(totals) {
        let span = TAU * (value / grand_total);
        let mid_angle = cursor + span * 0.5;
        let (start_angle, end_angle) = if span > 2.0 * half_pad {
            (cursor + half_pad, cursor + span - half_pad)
        } else {
            (mid_angle, mid_angle)
        };
        cursor += span;

        let label_anchor = layout.label_offset.map(|offset| {
            polar(layout.center, layout.outer_radius + offset, mid_angle)
        });
        let breakdown = (source.data.len() > 1).then(|| {
            source
                .data
                .iter()
                .map(|point| PieBreakdownEntry {
                    label: point.category.clone(),
                    value: point.value,
                })
                .collect()
        });

        slices.push(PieSlice {
            series_index: source.series_index,
            name: source.name.to_owned(),
            color: source.color.to_owned(),
            value,
            percent: value / grand_total * 100.0,
            start_angle,
            end_angle,
            mid_angle,
            path: arc_path(
                layout.center,
                layout.inner_radius,
                layout.outer_radius,
                start_angle,
                end_angle,
            ),
            label_anchor,
            breakdown,
        });
    }
    slices
}

/// SVG path for a pie wedge (`inner_radius == 0`) or an annular donut wedge.
///
/// Empty spans produce an empty path. A full turn is drawn as two half arcs
/// because a single arc whose end equals its start renders nothing.
#[must_use]
pub fn arc_path(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> String {
    let span = end_angle - start_angle;
    if !(span > 0.0) || !(outer_radius > 0.0) {
        return String::new();
    }
    let donut = inner_radius > 0.0;
    let mut path = PathBuilder::with_capacity(8);

    if span >= TAU - FULL_CIRCLE_EPSILON {
        full_circle(&mut path, center, outer_radius, start_angle, true);
        if donut {
            full_circle(&mut path, center, inner_radius, start_angle, false);
        }
        return path.finish();
    }

    let large_arc = span > PI;
    path.move_to(polar(center, outer_radius, start_angle))
        .arc_to(
            outer_radius,
            large_arc,
            true,
            polar(center, outer_radius, end_angle),
        );
    if donut {
        path.line_to(polar(center, inner_radius, end_angle))
            .arc_to(
                inner_radius,
                large_arc,
                false,
                polar(center, inner_radius, start_angle),
            );
    } else {
        path.line_to(center);
    }
    path.close();
    path.finish()
}

/// Point at `radius` from `center` along `angle` (radians, y pointing down).
#[must_use]
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

fn full_circle(path: &mut PathBuilder, center: Point, radius: f64, start: f64, clockwise: bool) {
    let opposite = if clockwise { start + PI } else { start - PI };
    let origin = polar(center, radius, start);
    path.move_to(origin)
        .arc_to(radius, false, clockwise, polar(center, radius, opposite))
        .arc_to(radius, false, clockwise, origin)
        .close();
}
