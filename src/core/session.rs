use crate::adapters::upload::{accept_upload, read_poem_file};
use crate::core::analyzer::Analyzer;
use crate::domain::model::{AnalysisMode, AnalyzeOptions, Outcome, PoemResult};
use crate::domain::ports::ScansionService;
use crate::utils::error::{Result, ScanError};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Everything the front end shows: the input box, the option toggle, the
/// loading indicator and the last rendered outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub poem_text: String,
    pub improve_vowel_syllables: bool,
    pub loading: bool,
    pub outcome: Option<Outcome>,
}

/// Application state around an [`Analyzer`]. Only one analysis may be in
/// flight; a second submit while one is pending fails with
/// `AnalysisInProgress`.
pub struct Session<S: ScansionService> {
    analyzer: Analyzer<S>,
    state: Mutex<SessionState>,
}

struct LoadingGuard<'a> {
    state: &'a Mutex<SessionState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        lock(self.state).loading = false;
    }
}

fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<S: ScansionService> Session<S> {
    pub fn new(analyzer: Analyzer<S>) -> Self {
        Self {
            analyzer,
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn analyzer(&self) -> &Analyzer<S> {
        &self.analyzer
    }

    pub fn snapshot(&self) -> SessionState {
        lock(&self.state).clone()
    }

    pub fn poem_text(&self) -> String {
        lock(&self.state).poem_text.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading
    }

    pub fn outcome(&self) -> Option<Outcome> {
        lock(&self.state).outcome.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        lock(&self.state).poem_text = text.into();
    }

    pub fn set_improve_vowel_syllables(&self, enabled: bool) {
        lock(&self.state).improve_vowel_syllables = enabled;
    }

    /// Replaces the poem text with an uploaded file. The text is untouched
    /// when the upload is rejected.
    pub fn load_upload(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<()> {
        let text = accept_upload(file_name, content_type, bytes)?;
        self.set_text(text);
        Ok(())
    }

    pub async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = read_poem_file(path).await?;
        self.set_text(text);
        Ok(())
    }

    pub async fn submit(&self, mode: AnalysisMode) -> Result<PoemResult> {
        let (text, options) = {
            let mut state = lock(&self.state);
            let text = state.poem_text.trim().to_string();
            if text.is_empty() {
                tracing::warn!("Submit ignored: no poem text");
                return Err(ScanError::EmptyInput);
            }
            if state.loading {
                tracing::warn!("Submit rejected: analysis already in progress");
                return Err(ScanError::AnalysisInProgress);
            }
            state.loading = true;
            state.outcome = None;
            (
                text,
                AnalyzeOptions {
                    improve_vowel_syllables: state.improve_vowel_syllables,
                },
            )
        };

        let guard = LoadingGuard { state: &self.state };
        tracing::info!("Analyzing {} bytes of poem text in {} mode", text.len(), mode);
        let result = self.analyzer.analyze(&text, mode, options).await;
        drop(guard);

        let outcome = match &result {
            Ok(poem) => Outcome::Ready(poem.clone()),
            Err(e) => Outcome::Failed(e.user_friendly_message()),
        };
        lock(&self.state).outcome = Some(outcome);

        result
    }
}
