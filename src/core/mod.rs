pub mod analyzer;
pub mod meter;
pub mod samples;
pub mod session;
pub mod summary;

pub use crate::domain::model::{AnalysisMode, AnalyzeOptions, Outcome, Parse, PoemResult};
pub use crate::domain::ports::{ConfigProvider, ScansionService};
pub use crate::utils::error::Result;
