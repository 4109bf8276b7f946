use crate::core::meter::scan_line;
use crate::core::samples::SampleLibrary;
use crate::domain::model::{AnalysisMode, AnalyzeOptions, Parse, PoemResult, ScansionRequest};
use crate::domain::ports::ScansionService;
use crate::utils::error::{Result, ScanError};
use std::sync::Arc;

/// Non-blank lines of a poem, with a trailing `\r` removed.
pub fn poem_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
}

pub fn scan_poem(text: &str) -> Vec<Parse> {
    poem_lines(text).map(scan_line).collect()
}

/// Chooses between canned samples, the remote service and the local heuristic.
pub struct Analyzer<S: ScansionService> {
    service: S,
    samples: Arc<SampleLibrary>,
}

impl<S: ScansionService> Analyzer<S> {
    pub fn new(service: S) -> Self {
        Self::with_samples(service, SampleLibrary::builtin())
    }

    pub fn with_samples(service: S, samples: Arc<SampleLibrary>) -> Self {
        Self { service, samples }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn samples(&self) -> &SampleLibrary {
        &self.samples
    }

    pub async fn analyze(
        &self,
        text: &str,
        mode: AnalysisMode,
        options: AnalyzeOptions,
    ) -> Result<PoemResult> {
        if text.trim().is_empty() {
            return Err(ScanError::EmptyInput);
        }

        match mode {
            AnalysisMode::Local => Ok(self.analyze_local(text)),
            AnalysisMode::Remote => self.analyze_remote(text, options).await,
        }
    }

    pub fn analyze_local(&self, text: &str) -> PoemResult {
        if let Some(sample) = self.samples.match_sample(text) {
            tracing::info!(
                "Using canned scansion for '{}'",
                sample.title.as_deref().unwrap_or("sample")
            );
            return sample.clone();
        }

        let parses = scan_poem(text);
        tracing::debug!("Heuristic scansion produced {} lines", parses.len());
        PoemResult::local(parses)
    }

    async fn analyze_remote(&self, text: &str, options: AnalyzeOptions) -> Result<PoemResult> {
        let request = ScansionRequest {
            text: text.to_string(),
            improve_vowel_syllables: options.improve_vowel_syllables,
        };

        tracing::info!("Requesting scansion from {}", self.service.endpoint());
        let parses = self.service.scan(&request).await.map_err(|e| {
            tracing::error!("Scansion service failed: {}", e);
            e
        })?;

        tracing::debug!("Scansion service returned {} lines", parses.len());
        Ok(PoemResult::untitled(parses))
    }
}
