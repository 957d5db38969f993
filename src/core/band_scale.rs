use indexmap::IndexSet;
use serde::Serialize;

/// Discrete scale placing ordered categories at evenly spaced pixel centers.
///
/// With `n > 1` categories the first lands on the padded range start and the
/// last on the padded range end; a single category sits at the padded
/// midpoint. `bandwidth` is the distance between neighbouring centers, not the
/// width of a bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandScale {
    categories: IndexSet<String>,
    range_min: f64,
    range_max: f64,
    outer_padding: f64,
}

impl BandScale {
    /// Builds a scale over `categories`; repeated labels keep their first position.
    pub fn new<I, S>(categories: I, range: (f64, f64)) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            range_min: range.0,
            range_max: range.1,
            outer_padding: 0.0,
        }
    }

    /// Sets pixels removed from both ends of the range before placing categories.
    #[must_use]
    pub fn with_outer_padding(mut self, padding: f64) -> Self {
        self.outer_padding = if padding.is_finite() {
            padding.max(0.0)
        } else {
            0.0
        };
        self
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    #[must_use]
    pub fn outer_padding(&self) -> f64 {
        self.outer_padding
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.categories.iter().map(String::as_str)
    }

    #[must_use]
    pub fn category_at(&self, index: usize) -> Option<&str> {
        self.categories.get_index(index).map(String::as_str)
    }

    #[must_use]
    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.categories.get_index_of(category)
    }

    /// Pixel center of `category`, or `None` when the label is not in the domain.
    #[must_use]
    pub fn apply(&self, category: &str) -> Option<f64> {
        self.index_of(category)
            .and_then(|index| self.position_at(index))
    }

    /// Pixel center of the category at `index`.
    #[must_use]
    pub fn position_at(&self, index: usize) -> Option<f64> {
        let n = self.categories.len();
        if index >= n {
            return None;
        }
        let (start, end) = self.padded_range();
        if n == 1 {
            return Some(start + (end - start) * 0.5);
        }
        Some(start + (end - start) * index as f64 / (n - 1) as f64)
    }

    /// Spacing between adjacent centers (the full padded span for one category).
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        let (start, end) = self.padded_range();
        let span = (end - start).abs();
        match self.categories.len() {
            0 => 0.0,
            1 => span,
            n => span / (n - 1) as f64,
        }
    }

    /// Category whose center is closest to `pixel`.
    #[must_use]
    pub fn nearest_category(&self, pixel: f64) -> Option<&str> {
        let n = self.categories.len();
        if n == 0 || !pixel.is_finite() {
            return None;
        }
        if n == 1 {
            return self.category_at(0);
        }
        let (start, end) = self.padded_range();
        let span = end - start;
        if span == 0.0 {
            return self.category_at(0);
        }
        let fraction = (pixel - start) / span * (n - 1) as f64;
        let clamped = fraction.round().clamp(0.0, (n - 1) as f64);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = clamped as usize;
        self.category_at(index)
    }

    fn padded_range(&self) -> (f64, f64) {
        let direction = if self.range_max >= self.range_min {
            1.0
        } else {
            -1.0
        };
        let pad = self
            .outer_padding
            .min((self.range_max - self.range_min).abs() * 0.5);
        (
            self.range_min + pad * direction,
            self.range_max - pad * direction,
        )
    }
}
