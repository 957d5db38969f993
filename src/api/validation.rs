use std::f64::consts::TAU;

use crate::core::{Insets, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{ChartConfig, PieStyle, SeriesConfig, SeriesKind, ValueAxisConfig};

pub(super) fn validate_viewport(viewport: Viewport) -> ChartResult<Viewport> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

pub(super) fn validate_chart_config(config: &ChartConfig) -> ChartResult<()> {
    validate_padding(config.padding)?;
    validate_value_axis("y_axis", &config.y_axis)?;
    if let Some(axis) = config.y_axis_secondary.as_option() {
        validate_value_axis("y_axis_secondary", axis)?;
    }
    for series in &config.series {
        validate_series(series)?;
    }
    Ok(())
}

fn validate_padding(padding: Insets) -> ChartResult<Insets> {
    for (side, value) in [
        ("top", padding.top),
        ("right", padding.right),
        ("bottom", padding.bottom),
        ("left", padding.left),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "padding `{side}` must be finite and >= 0"
            )));
        }
    }
    Ok(padding)
}

fn validate_value_axis(name: &str, axis: &ValueAxisConfig) -> ChartResult<()> {
    for (bound, value) in [("min", axis.min), ("max", axis.max)] {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "{name} {bound} must be finite"
                )));
            }
        }
    }
    if let (Some(min), Some(max)) = (axis.min, axis.max) {
        if min > max {
            return Err(ChartError::InvalidData(format!(
                "{name} min must be <= max"
            )));
        }
    }
    Ok(())
}

fn validate_series(series: &SeriesConfig) -> ChartResult<()> {
    if series.y_axis_index > 1 {
        return Err(ChartError::InvalidData(format!(
            "series `{}` y_axis_index must be 0 or 1",
            series.name
        )));
    }
    if series.data.iter().any(|point| !point.value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "series `{}` values must be finite",
            series.name
        )));
    }

    match series.kind {
        SeriesKind::Line => {
            let style = &series.line;
            if !style.stroke_width.is_finite() || style.stroke_width < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` stroke width must be finite and >= 0",
                    series.name
                )));
            }
            if let Some(markers) = style.points.as_option() {
                if !markers.radius.is_finite() || markers.radius < 0.0 {
                    return Err(ChartError::InvalidData(format!(
                        "series `{}` marker radius must be finite and >= 0",
                        series.name
                    )));
                }
            }
        }
        SeriesKind::Bar => {
            if let Some(width) = series.bar.width {
                if !width.is_finite() || width <= 0.0 {
                    return Err(ChartError::InvalidData(format!(
                        "series `{}` bar width must be finite and > 0",
                        series.name
                    )));
                }
            }
        }
        SeriesKind::Pie => {
            if series.data.iter().any(|point| point.value < 0.0) {
                return Err(ChartError::InvalidData(format!(
                    "pie series `{}` values must be >= 0",
                    series.name
                )));
            }
            validate_pie_style(&series.name, &series.pie)?;
        }
    }
    Ok(())
}

fn validate_pie_style(name: &str, style: &PieStyle) -> ChartResult<()> {
    if !style.radius_ratio.is_finite() || style.radius_ratio <= 0.0 || style.radius_ratio > 1.0 {
        return Err(ChartError::InvalidData(format!(
            "pie series `{name}` radius_ratio must be in (0, 1]"
        )));
    }
    if !style.inner_radius_ratio.is_finite()
        || style.inner_radius_ratio < 0.0
        || style.inner_radius_ratio >= 1.0
    {
        return Err(ChartError::InvalidData(format!(
            "pie series `{name}` inner_radius_ratio must be in [0, 1)"
        )));
    }
    if !style.pad_angle.is_finite() || style.pad_angle < 0.0 || style.pad_angle >= TAU {
        return Err(ChartError::InvalidData(format!(
            "pie series `{name}` pad_angle must be in [0, 2π)"
        )));
    }
    if let Some(labels) = style.labels.as_option() {
        if !labels.offset.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "pie series `{name}` label offset must be finite"
            )));
        }
    }
    Ok(())
}
