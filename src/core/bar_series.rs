use serde::Serialize;
use smallvec::SmallVec;

use crate::core::{BandScale, ComputedPoint, DataPoint, LinearScale};

/// Horizontal gap between neighbouring bars of one category group, in pixels.
pub const BAR_GROUP_GAP: f64 = 4.0;
/// Share of the band-scale bandwidth that a full default-width group may occupy.
pub const DEFAULT_BAR_GROUP_RATIO: f64 = 0.6;
/// Upper bound for automatically sized bars, in pixels.
pub const MAX_DEFAULT_BAR_WIDTH: f64 = 40.0;
const MIN_DEFAULT_BAR_WIDTH: f64 = 1.0;

/// Deterministic bar rectangle in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub data_x: String,
    pub data_y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Which bar series contribute to each category, and how wide their bars are.
///
/// Series are identified by their ordinal among the chart's bar series. A
/// series only joins a category's group when it has data there, so sparse
/// series never widen groups they are absent from.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGrouping {
    groups: Vec<SmallVec<[usize; 4]>>,
    widths: Vec<f64>,
    gap: f64,
}

impl BarGrouping {
    /// Builds the per-category groups for `series`, in series order.
    ///
    /// `widths[i]` overrides the automatic width of series `i` when `Some`.
    #[must_use]
    pub fn new(
        scale: &BandScale,
        series: &[&[DataPoint]],
        widths: &[Option<f64>],
    ) -> Self {
        let mut groups: Vec<SmallVec<[usize; 4]>> = vec![SmallVec::new(); scale.len()];
        for (ordinal, data) in series.iter().enumerate() {
            for point in data.iter() {
                let Some(index) = scale.index_of(&point.category) else {
                    continue;
                };
                let group = &mut groups[index];
                if !group.contains(&ordinal) {
                    group.push(ordinal);
                }
            }
        }

        let largest = groups.iter().map(SmallVec::len).max().unwrap_or(0).max(1);
        let (auto, gap) = fit_to_budget(
            default_bar_width(scale.bandwidth(), largest),
            group_budget(scale),
            &groups,
            widths,
        );
        let widths = (0..series.len())
            .map(|ordinal| widths.get(ordinal).copied().flatten().unwrap_or(auto))
            .collect();

        Self { groups, widths, gap }
    }

    #[must_use]
    pub fn width_of(&self, ordinal: usize) -> f64 {
        self.widths.get(ordinal).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn members(&self, category_index: usize) -> &[usize] {
        self.groups
            .get(category_index)
            .map(SmallVec::as_slice)
            .unwrap_or(&[])
    }

    /// Total width of the bars at `category_index` including the gaps between them.
    #[must_use]
    pub fn group_width(&self, category_index: usize) -> f64 {
        let members = self.members(category_index);
        if members.is_empty() {
            return 0.0;
        }
        let bars: f64 = members.iter().map(|ordinal| self.width_of(*ordinal)).sum();
        bars + self.gap * (members.len() - 1) as f64
    }

    #[must_use]
    pub fn max_group_width(&self) -> f64 {
        (0..self.groups.len())
            .map(|index| self.group_width(index))
            .fold(0.0, f64::max)
    }

    /// Left edge of series `ordinal`'s bar relative to the category center.
    #[must_use]
    pub fn offset(&self, category_index: usize, ordinal: usize) -> Option<f64> {
        let members = self.members(category_index);
        let position = members.iter().position(|member| *member == ordinal)?;
        let before: f64 = members[..position]
            .iter()
            .map(|member| self.width_of(*member))
            .sum();
        Some(-self.group_width(category_index) * 0.5 + before + self.gap * position as f64)
    }
}

/// Automatic bar width: a full group of `largest_group` bars fills
/// [`DEFAULT_BAR_GROUP_RATIO`] of the spacing between category centers.
#[must_use]
pub fn default_bar_width(bandwidth: f64, largest_group: usize) -> f64 {
    let k = largest_group.max(1) as f64;
    let width = (bandwidth.max(0.0) * DEFAULT_BAR_GROUP_RATIO - BAR_GROUP_GAP * (k - 1.0)) / k;
    width.clamp(MIN_DEFAULT_BAR_WIDTH, MAX_DEFAULT_BAR_WIDTH)
}

/// Widest a category group may get without touching its neighbours.
///
/// Outer padding is half the widest group `g`, so padded centers sit
/// `(span - g) / (n - 1)` apart; that spacing is at least `g` exactly when
/// `g <= span / n`.
fn group_budget(scale: &BandScale) -> f64 {
    let (start, end) = scale.range();
    match scale.len() {
        0 => 0.0,
        n => (end - start).abs() / n as f64,
    }
}

/// Shrinks the automatic width, then the gap, until every group fits `budget`.
///
/// Explicit widths are kept as configured. Returns `(auto_width, gap)`.
fn fit_to_budget(
    auto: f64,
    budget: f64,
    groups: &[SmallVec<[usize; 4]>],
    widths: &[Option<f64>],
) -> (f64, f64) {
    // (explicit width total, automatic bar count, bar count) per group
    let shapes: Vec<(f64, usize, usize)> = groups
        .iter()
        .filter(|members| !members.is_empty())
        .map(|members| {
            let mut explicit = 0.0;
            let mut automatic = 0_usize;
            for ordinal in members {
                match widths.get(*ordinal).copied().flatten() {
                    Some(width) => explicit += width,
                    None => automatic += 1,
                }
            }
            (explicit, automatic, members.len())
        })
        .collect();

    let gap = shapes
        .iter()
        .filter(|(_, _, count)| *count > 1)
        .map(|(explicit, _, count)| (budget - explicit) / (count - 1) as f64)
        .fold(BAR_GROUP_GAP, f64::min)
        .max(0.0);
    let auto = shapes
        .iter()
        .filter(|(_, automatic, _)| *automatic > 0)
        .map(|(explicit, automatic, count)| {
            (budget - explicit - gap * (count - 1) as f64) / *automatic as f64
        })
        .fold(auto, f64::min)
        .max(0.0);
    (auto, gap)
}

/// Value-axis pixel that bars grow from: zero clamped into the scale's domain.
#[must_use]
pub fn bar_baseline(y_scale: LinearScale) -> f64 {
    let (d0, d1) = y_scale.domain();
    y_scale.apply(0.0_f64.clamp(d0.min(d1), d0.max(d1)))
}

/// Projects one bar series into rectangles and hit-test points.
///
/// Data points whose category is not on the axis are skipped.
#[must_use]
pub fn project_bar_series(
    data: &[DataPoint],
    ordinal: usize,
    grouping: &BarGrouping,
    x_scale: &BandScale,
    y_scale: LinearScale,
) -> (Vec<BarRect>, Vec<ComputedPoint>) {
    let baseline = bar_baseline(y_scale);
    let width = grouping.width_of(ordinal);
    let mut rects = Vec::with_capacity(data.len());
    let mut points = Vec::with_capacity(data.len());

    for point in data {
        let Some(index) = x_scale.index_of(&point.category) else {
            continue;
        };
        let (Some(center), Some(offset)) =
            (x_scale.position_at(index), grouping.offset(index, ordinal))
        else {
            continue;
        };
        let x = center + offset;
        let value_y = y_scale.apply(point.value);

        rects.push(BarRect {
            x,
            y: value_y.min(baseline),
            width,
            height: (value_y - baseline).abs(),
            data_x: point.category.clone(),
            data_y: point.value,
            id: point.id.clone(),
        });
        points.push(ComputedPoint {
            x: x + width * 0.5,
            y: value_y,
            data_x: point.category.clone(),
            data_y: point.value,
            id: point.id.clone(),
        });
    }

    (rects, points)
}
