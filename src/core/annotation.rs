use serde::{Deserialize, Serialize};

use crate::core::{BandScale, PlotArea, Point};

/// Reference to a category either by label or by position in the axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Index(usize),
    Label(String),
}

impl CategoryRef {
    /// Pixel center of the referenced category, `None` when it does not exist.
    #[must_use]
    pub fn resolve(&self, scale: &BandScale) -> Option<f64> {
        match self {
            Self::Index(index) => scale.position_at(*index),
            Self::Label(label) => scale.apply(label),
        }
    }
}

impl From<usize> for CategoryRef {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl From<&str> for CategoryRef {
    fn from(value: &str) -> Self {
        Self::Label(value.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnnotationConfig {
    VerticalLine {
        at: CategoryRef,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        color: Option<String>,
    },
    Region {
        from: CategoryRef,
        to: CategoryRef,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        color: Option<String>,
    },
}

impl AnnotationConfig {
    #[must_use]
    pub fn vertical_line(at: impl Into<CategoryRef>) -> Self {
        Self::VerticalLine {
            at: at.into(),
            label: None,
            color: None,
        }
    }

    #[must_use]
    pub fn region(from: impl Into<CategoryRef>, to: impl Into<CategoryRef>) -> Self {
        Self::Region {
            from: from.into(),
            to: to.into(),
            label: None,
            color: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            Self::VerticalLine { label, .. } | Self::Region { label, .. } => {
                *label = Some(text.into());
            }
        }
        self
    }

    fn label(&self) -> Option<&String> {
        match self {
            Self::VerticalLine { label, .. } | Self::Region { label, .. } => label.as_ref(),
        }
    }

    fn color(&self) -> Option<&String> {
        match self {
            Self::VerticalLine { color, .. } | Self::Region { color, .. } => color.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnnotationShape {
    VerticalLine { x: f64, y1: f64, y2: f64 },
    Region { x0: f64, x1: f64, y0: f64, y1: f64 },
}

/// Pixel placement of one annotation; `index` points back into the config list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationGeometry {
    pub index: usize,
    pub shape: AnnotationShape,
    pub label: Option<String>,
    pub color: Option<String>,
    /// Top-center of the shape, where a label would hang.
    pub label_anchor: Point,
}

/// Resolves annotation anchors against the category axis.
///
/// Annotations whose anchors cannot be resolved are left out of the result.
#[must_use]
pub fn resolve_annotations(
    annotations: &[AnnotationConfig],
    scale: &BandScale,
    plot: PlotArea,
) -> Vec<AnnotationGeometry> {
    annotations
        .iter()
        .enumerate()
        .filter_map(|(index, annotation)| {
            let shape = resolve_shape(annotation, scale, plot)?;
            let anchor_x = match shape {
                AnnotationShape::VerticalLine { x, .. } => x,
                AnnotationShape::Region { x0, x1, .. } => (x0 + x1) * 0.5,
            };
            Some(AnnotationGeometry {
                index,
                shape,
                label: annotation.label().cloned(),
                color: annotation.color().cloned(),
                label_anchor: Point::new(anchor_x, plot.top),
            })
        })
        .collect()
}

fn resolve_shape(
    annotation: &AnnotationConfig,
    scale: &BandScale,
    plot: PlotArea,
) -> Option<AnnotationShape> {
    match annotation {
        AnnotationConfig::VerticalLine { at, .. } => {
            let x = at.resolve(scale)?;
            Some(AnnotationShape::VerticalLine {
                x,
                y1: plot.top,
                y2: plot.bottom,
            })
        }
        AnnotationConfig::Region { from, to, .. } => {
            let a = from.resolve(scale)?;
            let b = to.resolve(scale)?;
            Some(AnnotationShape::Region {
                x0: a.min(b),
                x1: a.max(b),
                y0: plot.top,
                y1: plot.bottom,
            })
        }
    }
}
