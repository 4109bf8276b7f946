use crate::domain::model::{AnalysisMode, Parse, ScansionRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// An external scansion backend.
#[async_trait]
pub trait ScansionService: Send + Sync {
    /// Where requests go; used in error messages.
    fn endpoint(&self) -> &str;

    /// Returns the parsed lines, or `ServiceUnavailable` on any failure.
    async fn scan(&self, request: &ScansionRequest) -> Result<Vec<Parse>>;
}

pub trait ConfigProvider: Send + Sync {
    fn service_url(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn mode(&self) -> AnalysisMode;
    fn improve_vowel_syllables(&self) -> bool;
    fn samples_path(&self) -> Option<&str>;
}
