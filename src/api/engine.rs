use tracing::{debug, trace};

use crate::core::{ComputedPoint, Viewport};
use crate::error::ChartResult;
use crate::interaction::{HitTarget, hit_test};
use crate::render::Renderer;

use super::{ChartConfig, ChartGeometry, compute_layout};

/// Live chart instance consumed by host applications.
///
/// Holds the current configuration and viewport together with the geometry
/// computed from them. Every mutation recomputes the geometry from scratch;
/// a failed recomputation leaves the previous state untouched.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    viewport: Viewport,
    geometry: ChartGeometry,
}

impl<R: Renderer> ChartEngine<R> {
    /// Mounts a chart: validates the inputs and computes the initial geometry.
    pub fn new(renderer: R, config: ChartConfig, viewport: Viewport) -> ChartResult<Self> {
        let geometry = compute_layout(&config, viewport)?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            pie = geometry.is_pie(),
            "chart mounted"
        );
        Ok(Self {
            renderer,
            config,
            viewport,
            geometry,
        })
    }

    /// Replaces the configuration and recomputes the geometry.
    pub fn update(&mut self, config: ChartConfig) -> ChartResult<()> {
        let geometry = compute_layout(&config, self.viewport)?;
        debug!(series = config.series.len(), "chart config updated");
        self.config = config;
        self.geometry = geometry;
        Ok(())
    }

    /// Applies new container dimensions; an unchanged viewport is a no-op.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if viewport == self.viewport {
            trace!(
                width = viewport.width,
                height = viewport.height,
                "resize skipped: viewport unchanged"
            );
            return Ok(());
        }
        let geometry = compute_layout(&self.config, viewport)?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "chart resized"
        );
        self.viewport = viewport;
        self.geometry = geometry;
        Ok(())
    }

    pub fn render(&mut self) -> ChartResult<()> {
        self.renderer.render(&self.geometry)
    }

    #[must_use]
    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Computed points of the series at `series_index`, if it was projected.
    #[must_use]
    pub fn series_points(&self, series_index: usize) -> Option<&[ComputedPoint]> {
        self.geometry
            .as_cartesian()?
            .series_by_index(series_index)
            .map(|series| series.points.as_slice())
    }

    /// Element under the pointer at `(x, y)`; see [`hit_test`].
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64, max_distance: f64) -> Option<HitTarget> {
        hit_test(&self.geometry, x, y, max_distance)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
