use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const LOCAL_TITLE: &str = "Your Poem";
pub const LOCAL_AUTHOR: &str = "Unknown";

/// Scansion of a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parse {
    /// The line as submitted.
    pub text: String,
    /// `+` stressed, `-` unstressed.
    pub meter: String,
    /// The line's words, upper-cased where stressed.
    pub parse_txt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub parses: Vec<Parse>,
}

impl PoemResult {
    pub fn untitled(parses: Vec<Parse>) -> Self {
        Self {
            title: None,
            author: None,
            parses,
        }
    }

    pub fn local(parses: Vec<Parse>) -> Self {
        Self {
            title: Some(LOCAL_TITLE.to_string()),
            author: Some(LOCAL_AUTHOR.to_string()),
            parses,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Sample matcher, then the meter heuristic. Never touches the network.
    #[default]
    Local,
    /// External scansion service only.
    Remote,
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(AnalysisMode::Local),
            "remote" => Ok(AnalysisMode::Remote),
            other => Err(format!("unknown mode '{}', expected local or remote", other)),
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisMode::Local => write!(f, "local"),
            AnalysisMode::Remote => write!(f, "remote"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyzeOptions {
    pub improve_vowel_syllables: bool,
}

/// Body sent to the external scansion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScansionRequest {
    pub text: String,
    pub improve_vowel_syllables: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScansionResponse {
    #[serde(default)]
    pub parses: Option<Vec<Parse>>,
}

/// What the presentation side sees after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ready(PoemResult),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case_option() {
        let request = ScansionRequest {
            text: "Whose woods these are".to_string(),
            improve_vowel_syllables: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["improveVowelSyllables"], serde_json::json!(true));
        assert_eq!(json["text"], serde_json::json!("Whose woods these are"));
    }

    #[test]
    fn test_response_without_parses() {
        let response: ScansionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.parses.is_none());
    }

    #[test]
    fn test_untitled_result_omits_title_in_json() {
        let json = serde_json::to_string(&PoemResult::untitled(vec![])).unwrap();
        assert_eq!(json, r#"{"parses":[]}"#);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Remote".parse::<AnalysisMode>().unwrap(), AnalysisMode::Remote);
        assert_eq!("local".parse::<AnalysisMode>().unwrap(), AnalysisMode::Local);
        assert!("offline".parse::<AnalysisMode>().is_err());
    }
}
