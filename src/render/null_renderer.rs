use crate::api::ChartGeometry;
use crate::error::ChartResult;
use crate::render::Renderer;

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates geometry so tests catch non-finite output before a real
/// backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_series_count: usize,
    pub last_slice_count: usize,
    pub last_annotation_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, geometry: &ChartGeometry) -> ChartResult<()> {
        geometry.validate()?;
        self.render_count += 1;
        match geometry {
            ChartGeometry::Cartesian(cartesian) => {
                self.last_series_count = cartesian.series.len();
                self.last_slice_count = 0;
                self.last_annotation_count = cartesian.annotations.len();
            }
            ChartGeometry::Pie(pie) => {
                self.last_series_count = 0;
                self.last_slice_count = pie.slices.len();
                self.last_annotation_count = 0;
            }
        }
        Ok(())
    }
}
