pub mod acquirer;
pub mod bar;
pub mod config;
pub mod constant;
pub mod error;
pub mod filter;
mod fractal;
pub mod logging;
mod merger;
pub mod pipeline;
pub mod render;
pub mod stroke;
pub mod symbol;
mod trimmer;

pub use acquirer::{Acquirer, BaostockAcquirer, CsvAcquirer, FetchRequest, MootdxAcquirer};
pub use bar::{RawBar, Stroke, StructuralBar};
pub use config::{DataSourceName, PipelineConfig, ServerProbeConfig};
pub use constant::{AdjustMode, Const, DataSource, DataType, Direction, FractalType, Frequency};
pub use error::{ChanlunError, ChanlunResult};
pub use logging::init_logging;
pub use pipeline::PipelineOutput;
pub use render::{ChartRenderer, NullRenderer};
pub use symbol::{Market, market_of, normalize};
