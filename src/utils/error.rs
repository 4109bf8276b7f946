use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Unsupported file type for '{file_name}': {content_type}")]
    UnsupportedFileType {
        file_name: String,
        content_type: String,
    },

    #[error("No poem text was submitted")]
    EmptyInput,

    #[error("Scansion service at {endpoint} is unavailable: {reason}")]
    ServiceUnavailable { endpoint: String, reason: String },

    #[error("An analysis is already in progress")]
    AnalysisInProgress,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Sample library error: {message}")]
    SampleLibraryError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Service,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScanError::UnsupportedFileType { .. }
            | ScanError::EmptyInput
            | ScanError::AnalysisInProgress => ErrorCategory::Input,
            ScanError::ServiceUnavailable { .. } => ErrorCategory::Service,
            ScanError::ConfigError { .. }
            | ScanError::InvalidConfigValueError { .. }
            | ScanError::ConfigValidationError { .. }
            | ScanError::SampleLibraryError { .. } => ErrorCategory::Configuration,
            ScanError::IoError(_) | ScanError::SerializationError(_) | ScanError::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Service => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScanError::UnsupportedFileType { .. } => {
                "Please upload a text file (.txt)".to_string()
            }
            ScanError::EmptyInput => "Please enter a poem or upload a text file.".to_string(),
            ScanError::ServiceUnavailable { endpoint, .. } => format!(
                "Make sure the scansion service is running at {}, or use --mode local",
                endpoint
            ),
            ScanError::AnalysisInProgress => {
                "Wait for the current analysis to finish before submitting again".to_string()
            }
            ScanError::InvalidConfigValueError { field, .. }
            | ScanError::ConfigValidationError { field, .. } => {
                format!("Check the '{}' setting in your flags or config file", field)
            }
            ScanError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            ScanError::SampleLibraryError { .. } => {
                "Check the sample table file: every sample needs a phrase and +/- meters"
                    .to_string()
            }
            ScanError::IoError(_) => "Check that the file path exists and is readable".to_string(),
            ScanError::SerializationError(_) | ScanError::CsvError(_) => {
                "Retry with --format text".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScanError::UnsupportedFileType { file_name, .. } => {
                format!("'{}' is not a plain text file", file_name)
            }
            ScanError::EmptyInput => "There is no poem to analyze".to_string(),
            ScanError::ServiceUnavailable { endpoint, .. } => format!(
                "Error connecting to the scansion service. Make sure the service is running at {}.",
                endpoint
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_errors_point_at_the_endpoint() {
        let err = ScanError::ServiceUnavailable {
            endpoint: "http://127.0.0.1:8181/api/parse".to_string(),
            reason: "connection refused".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Service);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("127.0.0.1:8181"));
        assert!(err.recovery_suggestion().contains("running"));
    }

    #[test]
    fn test_input_errors() {
        let err = ScanError::UnsupportedFileType {
            file_name: "cover.png".to_string(),
            content_type: "image/png".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.recovery_suggestion(), "Please upload a text file (.txt)");

        assert_eq!(ScanError::EmptyInput.category(), ErrorCategory::Input);
        assert_eq!(ScanError::AnalysisInProgress.severity(), ErrorSeverity::High);
    }
}
