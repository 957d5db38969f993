use tracing::{debug, trace};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{
    BandScale, BarGrouping, DataPoint, LinearScale, PieLayout, PieSource, PlotArea, Viewport,
    bar_baseline, compute_pie_slices, project_bar_series, project_line_series, project_points,
    resolve_annotations,
};
use crate::error::{ChartError, ChartResult};

use super::validation::{validate_chart_config, validate_viewport};
use super::{
    CartesianGeometry, CategoryAxisConfig, CategoryTick, ChartConfig, ChartGeometry, PieGeometry,
    SECONDARY_Y_AXIS, SeriesConfig, SeriesGeometry, SeriesKind, SeriesMarks, ValueAxisConfig,
    ValueTick,
};

/// Headroom applied to the largest value when an axis maximum is inferred.
pub const Y_DOMAIN_HEADROOM: f64 = 1.1;

/// Computes the complete chart geometry for one render pass.
///
/// This is a pure function of its inputs: nothing is cached between calls,
/// so mount, update and resize all go through here.
pub fn compute_layout(config: &ChartConfig, viewport: Viewport) -> ChartResult<ChartGeometry> {
    validate_viewport(viewport)?;
    validate_chart_config(config)?;
    let plot = PlotArea::from_viewport(viewport, config.padding);

    if config.is_pie_mode() {
        debug!(
            series = config.series.len(),
            width = viewport.width,
            height = viewport.height,
            "compute pie layout"
        );
        return Ok(ChartGeometry::Pie(layout_pie(config, viewport, plot)));
    }

    let x_axis = config
        .x_axis
        .as_ref()
        .ok_or(ChartError::MissingCategoryAxis)?;
    debug!(
        series = config.series.len(),
        categories = x_axis.categories.len(),
        width = viewport.width,
        height = viewport.height,
        "compute cartesian layout"
    );
    Ok(ChartGeometry::Cartesian(layout_cartesian(
        config, x_axis, viewport, plot,
    )))
}

/// Resolves a value-axis domain from explicit bounds or the routed series' data.
///
/// A missing minimum is 0; a missing maximum is the largest value plus
/// [`Y_DOMAIN_HEADROOM`], rounded up. Equal bounds are widened by one. An
/// inferred bound that would cross the explicit one is placed one unit past it,
/// so the domain never inverts.
#[must_use]
pub fn resolve_value_domain(
    axis: &ValueAxisConfig,
    values: impl IntoIterator<Item = f64>,
) -> (f64, f64) {
    let min = axis.min.unwrap_or(0.0);
    let max = axis.max.unwrap_or_else(|| {
        let largest = values.into_iter().fold(f64::NEG_INFINITY, f64::max);
        if largest.is_finite() {
            (largest * Y_DOMAIN_HEADROOM).ceil()
        } else {
            0.0
        }
    });
    match (axis.min, axis.max) {
        _ if min < max => (min, max),
        (Some(_), None) | (None, None) => (min, min + 1.0),
        (None, Some(_)) if min > max => (max - 1.0, max),
        _ => (min, max + 1.0),
    }
}

fn layout_cartesian(
    config: &ChartConfig,
    x_axis: &CategoryAxisConfig,
    viewport: Viewport,
    plot: PlotArea,
) -> CartesianGeometry {
    let y_range = (plot.bottom, plot.top);
    let y_scale = LinearScale::new(
        resolve_value_domain(&config.y_axis, routed_values(config, 0)),
        y_range,
    );
    let secondary_used = config.series.iter().any(|series| {
        series.kind != SeriesKind::Pie && config.effective_y_axis(series) == SECONDARY_Y_AXIS
    });
    let y_scale_secondary = config
        .y_axis_secondary
        .as_option()
        .filter(|_| secondary_used)
        .map(|axis| {
            LinearScale::new(
                resolve_value_domain(axis, routed_values(config, SECONDARY_Y_AXIS)),
                y_range,
            )
        });

    let unpadded = BandScale::new(x_axis.categories.iter().cloned(), (plot.left, plot.right));
    let (bar_ordinals, grouping) = group_bar_series(config, &unpadded);
    let x_scale = unpadded.with_outer_padding(grouping.max_group_width() * 0.5);

    let project = |(series_index, series): (usize, &SeriesConfig)| {
        if series.kind == SeriesKind::Pie {
            trace!(series = %series.name, "pie series ignored in cartesian chart");
            return None;
        }
        let axis = config.effective_y_axis(series);
        let scale = match (axis, y_scale_secondary) {
            (SECONDARY_Y_AXIS, Some(secondary)) => secondary,
            _ => y_scale,
        };
        Some(project_series(
            series_index,
            series,
            axis,
            scale,
            &x_scale,
            bar_ordinals[series_index].map(|ordinal| (ordinal, &grouping)),
        ))
    };

    #[cfg(feature = "parallel-projection")]
    let series: Vec<SeriesGeometry> = config
        .series
        .par_iter()
        .enumerate()
        .filter_map(project)
        .collect();

    #[cfg(not(feature = "parallel-projection"))]
    let series: Vec<SeriesGeometry> = config
        .series
        .iter()
        .enumerate()
        .filter_map(project)
        .collect();

    let annotations = resolve_annotations(&config.annotations, &x_scale, plot);
    if annotations.len() < config.annotations.len() {
        debug!(
            dropped = config.annotations.len() - annotations.len(),
            "annotations with unresolved anchors dropped"
        );
    }

    let x_ticks = x_scale
        .categories()
        .enumerate()
        .filter_map(|(index, label)| {
            x_scale.position_at(index).map(|position| CategoryTick {
                label: label.to_owned(),
                position,
            })
        })
        .collect();
    let y_ticks = value_ticks(y_scale, config.y_axis.tick_count);
    let y_ticks_secondary = match (y_scale_secondary, config.y_axis_secondary.as_option()) {
        (Some(scale), Some(axis)) => value_ticks(scale, axis.tick_count),
        _ => Vec::new(),
    };

    CartesianGeometry {
        viewport,
        plot,
        x_scale,
        y_scale,
        y_scale_secondary,
        x_ticks,
        y_ticks,
        y_ticks_secondary,
        series,
        annotations,
    }
}

/// Values of every axis-based series routed to `axis`.
fn routed_values(config: &ChartConfig, axis: usize) -> impl Iterator<Item = f64> + '_ {
    config
        .series
        .iter()
        .filter(move |series| {
            series.kind != SeriesKind::Pie && config.effective_y_axis(series) == axis
        })
        .flat_map(|series| series.data.iter().map(|point| point.value))
}

/// Assigns each bar series an ordinal and groups them per category.
fn group_bar_series(
    config: &ChartConfig,
    scale: &BandScale,
) -> (Vec<Option<usize>>, BarGrouping) {
    let mut ordinals = Vec::with_capacity(config.series.len());
    let mut data: Vec<&[DataPoint]> = Vec::new();
    let mut widths = Vec::new();
    for series in &config.series {
        if series.kind == SeriesKind::Bar {
            ordinals.push(Some(data.len()));
            data.push(&series.data);
            widths.push(series.bar.width);
        } else {
            ordinals.push(None);
        }
    }
    let grouping = BarGrouping::new(scale, &data, &widths);
    (ordinals, grouping)
}

fn project_series(
    series_index: usize,
    series: &SeriesConfig,
    axis: usize,
    y_scale: LinearScale,
    x_scale: &BandScale,
    bar: Option<(usize, &BarGrouping)>,
) -> SeriesGeometry {
    let (points, marks) = match (series.kind, bar) {
        (SeriesKind::Bar, Some((ordinal, grouping))) => {
            let (rects, points) =
                project_bar_series(&series.data, ordinal, grouping, x_scale, y_scale);
            (points, SeriesMarks::Bar { rects })
        }
        _ => {
            let points = project_points(&series.data, x_scale, y_scale);
            let style = &series.line;
            let line = project_line_series(
                &points,
                style.curve,
                style.area.is_enabled().then(|| bar_baseline(y_scale)),
                style.points.as_option().map(|markers| markers.radius),
            );
            (points, SeriesMarks::Line(line))
        }
    };

    let skipped = series.data.len() - points.len();
    if skipped > 0 {
        trace!(
            series = %series.name,
            skipped,
            "data points outside the category axis skipped"
        );
    }

    SeriesGeometry {
        series_index,
        name: series.name.clone(),
        color: series.color.clone(),
        y_axis_index: axis,
        points,
        marks,
    }
}

fn value_ticks(scale: LinearScale, count: usize) -> Vec<ValueTick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|value| ValueTick::new(value, scale))
        .collect()
}

fn layout_pie(config: &ChartConfig, viewport: Viewport, plot: PlotArea) -> PieGeometry {
    let style = config
        .series
        .first()
        .map(|series| series.pie.clone())
        .unwrap_or_default();
    let outer_radius = plot.width().min(plot.height()) * 0.5 * style.radius_ratio;
    let layout = PieLayout {
        center: plot.center(),
        outer_radius,
        inner_radius: outer_radius * style.inner_radius_ratio,
        pad_angle: style.pad_angle,
        label_offset: style.labels.as_option().map(|labels| labels.offset),
    };

    let sources: Vec<PieSource<'_>> = config
        .series
        .iter()
        .enumerate()
        .map(|(series_index, series)| PieSource {
            series_index,
            name: &series.name,
            color: &series.color,
            data: &series.data,
        })
        .collect();
    let slices = compute_pie_slices(&sources, layout);
    if slices.is_empty() {
        debug!("pie total is zero; no slices produced");
    }

    PieGeometry {
        viewport,
        plot,
        layout,
        slices,
    }
}
