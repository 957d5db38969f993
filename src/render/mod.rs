mod null_renderer;

pub use null_renderer::NullRenderer;

use crate::api::ChartGeometry;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive fully computed, deterministic geometry so drawing code
/// stays isolated from layout and configuration logic.
pub trait Renderer {
    fn render(&mut self, geometry: &ChartGeometry) -> ChartResult<()>;
}
