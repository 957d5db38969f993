use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::core::path::PathBuilder;

/// Interpolation used to turn a series' pixel points into a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// Straight segments between consecutive points.
    #[default]
    Linear,
    /// Fritsch–Carlson monotone cubic; never overshoots the data.
    Monotone,
}

impl CurveKind {
    #[must_use]
    pub fn path(self, points: &[Point]) -> String {
        let mut path = PathBuilder::with_capacity(points.len() * 3);
        self.trace(&mut path, points);
        path.finish()
    }

    fn trace(self, path: &mut PathBuilder, points: &[Point]) {
        match self {
            Self::Linear => trace_linear(path, points),
            Self::Monotone if points.len() < 3 => trace_linear(path, points),
            Self::Monotone => trace_monotone(path, points),
        }
    }
}

/// Straight-line path through `points`.
///
/// Empty input yields an empty string and a single point yields a bare move.
#[must_use]
pub fn linear_curve(points: &[Point]) -> String {
    CurveKind::Linear.path(points)
}

/// Monotone cubic path through `points`, falling back to straight lines for
/// fewer than three points.
#[must_use]
pub fn monotone_curve(points: &[Point]) -> String {
    CurveKind::Monotone.path(points)
}

/// Per-point tangents of the monotone cubic interpolant.
///
/// Secants over coincident x are taken as 0. End points reuse the adjacent
/// secant. Interior points get 0 at a sign change or flat neighbour, otherwise
/// the mean of both secants clamped to `3 × min(|prev|, |next|)`.
#[must_use]
pub fn monotone_tangents(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let secants: Vec<f64> = points
        .windows(2)
        .map(|pair| {
            let dx = pair[1].x - pair[0].x;
            if dx == 0.0 {
                0.0
            } else {
                (pair[1].y - pair[0].y) / dx
            }
        })
        .collect();

    let mut tangents = Vec::with_capacity(n);
    tangents.push(secants[0]);
    for window in secants.windows(2) {
        let (prev, next) = (window[0], window[1]);
        if prev == 0.0 || next == 0.0 || prev.signum() != next.signum() {
            tangents.push(0.0);
            continue;
        }
        let mean = (prev + next) * 0.5;
        let bound = 3.0 * prev.abs().min(next.abs());
        tangents.push(mean.clamp(-bound, bound));
    }
    tangents.push(secants[n - 2]);
    tangents
}

/// Closed area between the curve through `points` and the horizontal line at `baseline_y`.
#[must_use]
pub fn area_path(points: &[Point], baseline_y: f64, kind: CurveKind) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut path = PathBuilder::with_capacity(points.len() * 3 + 3);
    kind.trace(&mut path, points);
    path.line_to(Point::new(last.x, baseline_y))
        .line_to(Point::new(first.x, baseline_y))
        .close();
    path.finish()
}

fn trace_linear(path: &mut PathBuilder, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    path.move_to(*first);
    for point in rest {
        path.line_to(*point);
    }
}

fn trace_monotone(path: &mut PathBuilder, points: &[Point]) {
    let tangents = monotone_tangents(points);
    path.move_to(points[0]);
    for (i, pair) in points.windows(2).enumerate() {
        let (p0, p1) = (pair[0], pair[1]);
        let third = (p1.x - p0.x) / 3.0;
        path.cubic_to(
            Point::new(p0.x + third, p0.y + tangents[i] * third),
            Point::new(p1.x - third, p1.y - tangents[i + 1] * third),
            p1,
        );
    }
}
