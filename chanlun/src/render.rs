//! Rendering interface. The core pipeline never depends on a renderer; this
//! trait exists purely so a caller can plug one in without the core crate
//! taking on a charting dependency.

use crate::error::ChanlunError;
use crate::pipeline::PipelineOutput;

pub trait ChartRenderer {
    fn render(&self, output: &PipelineOutput) -> Result<(), ChanlunError>;
}

/// A renderer that does nothing; useful for headless pipelines and tests.
pub struct NullRenderer;

impl ChartRenderer for NullRenderer {
    fn render(&self, _output: &PipelineOutput) -> Result<(), ChanlunError> {
        Ok(())
    }
}
