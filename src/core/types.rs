use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Container size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Abstract 2D coordinate, used both in data space and in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Padding between the container edge and the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 40.0,
            left: 50.0,
        }
    }
}

/// Pixel rectangle that data marks are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    /// Insets the viewport by `padding`; collapses to zero size instead of inverting.
    #[must_use]
    pub fn from_viewport(viewport: Viewport, padding: Insets) -> Self {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let left = padding.left.min(width);
        let top = padding.top.min(height);
        let right = (width - padding.right).max(left);
        let bottom = (height - padding.bottom).max(top);
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(
            self.left + self.width() * 0.5,
            self.top + self.height() * 0.5,
        )
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Pixel-space point carrying the data values it was projected from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedPoint {
    pub x: f64,
    pub y: f64,
    pub data_x: String,
    pub data_y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ComputedPoint {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// An optional feature that is either switched off or carries its configuration.
///
/// In JSON the value may be `false`, `true` (enabled with default settings) or a
/// configuration object.
#[derive(Debug, Clone, PartialEq)]
pub enum Toggle<T> {
    Disabled,
    Enabled(T),
}

impl<T> Toggle<T> {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    #[must_use]
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Disabled => None,
            Self::Enabled(config) => Some(config),
        }
    }
}

impl<T> Default for Toggle<T> {
    fn default() -> Self {
        Self::Disabled
    }
}

impl<T> From<Option<T>> for Toggle<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(config) => Self::Enabled(config),
            None => Self::Disabled,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ToggleRepr<T> {
    Flag(bool),
    Config(T),
}

impl<'de, T> Deserialize<'de> for Toggle<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match ToggleRepr::<T>::deserialize(deserializer)? {
            ToggleRepr::Flag(false) => Self::Disabled,
            ToggleRepr::Flag(true) => Self::Enabled(T::default()),
            ToggleRepr::Config(config) => Self::Enabled(config),
        })
    }
}

impl<T: Serialize> Serialize for Toggle<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Enabled(config) => config.serialize(serializer),
        }
    }
}

/// One `{category, value}` observation of a series.
///
/// Categories may repeat within a series; pie series keep every repeat as a
/// separate breakdown entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub category: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DataPoint {
    #[must_use]
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
            id: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
