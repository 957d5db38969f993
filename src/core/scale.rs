use serde::{Deserialize, Serialize};

/// Tick count used when the axis configuration does not request one.
pub const DEFAULT_TICK_COUNT: usize = 5;

const TICK_DECIMALS_FACTOR: f64 = 1e10;
const MAX_TICKS: i64 = 10_000;
const GRID_EPSILON: f64 = 1e-9;

/// Continuous mapping from a numeric domain onto a pixel range.
///
/// The range may be inverted (`range_min > range_max`), which is how value axes
/// put the largest domain value at the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    /// Maps a domain value to a pixel coordinate.
    ///
    /// A zero-span domain collapses every input onto `range_min`.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        let span = self.domain_max - self.domain_min;
        if span == 0.0 {
            return self.range_min;
        }
        if value == self.domain_max {
            return self.range_max;
        }
        self.range_min + (value - self.domain_min) / span * (self.range_max - self.range_min)
    }

    /// Maps a pixel coordinate back into the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_max - self.range_min;
        if span == 0.0 {
            return self.domain_min;
        }
        self.domain_min + (pixel - self.range_min) / span * (self.domain_max - self.domain_min)
    }

    /// Returns "nice" tick values covering the domain.
    ///
    /// The step is snapped to `{1, 2, 5, 10} × 10^m`, so the number of ticks is
    /// only approximately `count`.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain_min <= self.domain_max {
            (self.domain_min, self.domain_max)
        } else {
            (self.domain_max, self.domain_min)
        };
        if !lo.is_finite() || !hi.is_finite() {
            return Vec::new();
        }
        let span = hi - lo;
        if span == 0.0 {
            return vec![lo];
        }

        let step = nice_step(span / (count.max(2) - 1) as f64);
        if step == 0.0 {
            return vec![lo, hi];
        }

        // Grid indices tolerate representation error so aligned endpoints survive.
        let first = (lo / step - GRID_EPSILON).ceil();
        let last = (hi / step + GRID_EPSILON).floor();
        if !first.is_finite() || !last.is_finite() || last < first {
            return Vec::new();
        }
        #[allow(clippy::cast_possible_truncation)]
        let (first, last) = (first as i64, last as i64);
        let last = last.min(first.saturating_add(MAX_TICKS));

        (first..=last)
            .map(|i| round_tick(i as f64 * step))
            .collect()
    }
}

/// Snaps a raw step up to the next `{1, 2, 5, 10} × 10^m` value.
#[must_use]
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let magnitude = 10_f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = [1.0, 2.0, 5.0]
        .into_iter()
        .find(|candidate| normalized <= *candidate)
        .unwrap_or(10.0);
    nice * magnitude
}

fn round_tick(value: f64) -> f64 {
    let rounded = (value * TICK_DECIMALS_FACTOR).round() / TICK_DECIMALS_FACTOR;
    if rounded.is_finite() {
        rounded + 0.0
    } else {
        value
    }
}
