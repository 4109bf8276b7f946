pub mod toml_config;

use crate::adapters::http::{DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::domain::model::AnalysisMode;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_range, validate_url, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::app::presenter::{OutputFormat, View};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const MAX_TIMEOUT_SECONDS: u64 = 600;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "poem-scan")]
#[command(about = "Scan the meter of a poem, line by line")]
pub struct CliConfig {
    /// Plain-text (.txt) file holding the poem; stdin is read when no input is given
    pub file: Option<PathBuf>,

    /// Poem text given directly
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Analyze the built-in demo poem
    #[arg(long, conflicts_with_all = ["file", "text"])]
    pub demo: bool,

    /// TOML config file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// local (samples + heuristic) or remote (scansion service)
    #[arg(long)]
    pub mode: Option<AnalysisMode>,

    #[arg(long)]
    pub service_url: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Ask the scansion service to split vowel clusters into separate syllables
    #[arg(long)]
    pub improve_vowel_syllables: bool,

    /// TOML sample table replacing the built-in one
    #[arg(long)]
    pub samples: Option<PathBuf>,

    /// Views to print (repeatable); all views when omitted
    #[arg(long = "view", value_enum)]
    pub views: Vec<View>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// Resolved settings: defaults, then the config file, then flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub service_url: String,
    pub timeout_seconds: u64,
    pub mode: AnalysisMode,
    pub improve_vowel_syllables: bool,
    pub samples_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            mode: AnalysisMode::Local,
            improve_vowel_syllables: false,
            samples_path: None,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let mut settings = Self::default();
        settings.apply_toml(config);
        settings
    }

    pub fn apply_toml(&mut self, config: &TomlConfig) {
        if let Some(endpoint) = &config.service.endpoint {
            self.service_url = endpoint.clone();
        }
        if let Some(timeout) = config.service.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(mode) = config.analysis.mode {
            self.mode = mode;
        }
        if let Some(improve) = config.analysis.improve_vowel_syllables {
            self.improve_vowel_syllables = improve;
        }
        if let Some(samples) = &config.analysis.samples {
            self.samples_path = Some(samples.clone());
        }
    }

    #[cfg(feature = "cli")]
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                Self::from_toml(&TomlConfig::from_file(path)?)
            }
            None => Self::default(),
        };
        settings.apply_cli(cli);
        Ok(settings)
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli(&mut self, cli: &CliConfig) {
        if let Some(url) = &cli.service_url {
            self.service_url = url.clone();
        }
        if let Some(timeout) = cli.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(mode) = cli.mode {
            self.mode = mode;
        }
        if cli.improve_vowel_syllables {
            self.improve_vowel_syllables = true;
        }
        if let Some(samples) = &cli.samples {
            self.samples_path = Some(samples.to_string_lossy().into_owned());
        }
    }
}

impl ConfigProvider for Settings {
    fn service_url(&self) -> &str {
        &self.service_url
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn mode(&self) -> AnalysisMode {
        self.mode
    }

    fn improve_vowel_syllables(&self) -> bool {
        self.improve_vowel_syllables
    }

    fn samples_path(&self) -> Option<&str> {
        self.samples_path.as_deref()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("service_url", &self.service_url)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        if let Some(samples) = &self.samples_path {
            validate_file_extension("samples", samples, &["toml"])?;
        }
        Ok(())
    }
}
