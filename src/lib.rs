pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpScansionService;
pub use app::presenter::{present, present_error, OutputFormat, Rendering, View};
pub use config::Settings;
pub use crate::core::{
    analyzer::Analyzer,
    meter::{compute_meter, render_parse_text},
    samples::SampleLibrary,
    session::Session,
};
pub use domain::model::{AnalysisMode, AnalyzeOptions, Outcome, Parse, PoemResult};
pub use utils::error::{Result, ScanError};
