//! chart-layout: deterministic geometry for interactive 2D charts.
//!
//! The crate turns a declarative [`ChartConfig`] and a viewport into scales,
//! tick positions, SVG path strings, bar rectangles, pie arcs and annotation
//! positions. Drawing is delegated to a [`render::Renderer`] backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine, ChartGeometry, compute_layout};
pub use error::{ChartError, ChartResult};
