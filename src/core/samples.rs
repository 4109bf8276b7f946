use crate::core::meter::{STRESSED, UNSTRESSED};
use crate::domain::model::{Parse, PoemResult};
use crate::utils::error::{Result, ScanError};
use crate::utils::validation::{validate_file_extension, validate_non_empty_string};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Opening of Shakespeare's Sonnet 1, analyzed by `--demo`.
pub const DEMO_POEM: &str = "From fairest creatures we desire increase,
That thereby beauty's rose might never die,
But as the riper should by time decease,
His tender heir might bear his memory:
But thou, contracted to thine own bright eyes,
Feed'st thy light'st flame with self-substantial fuel,
Making a famine where abundance lies,
Thyself thy foe, to thy sweet self too cruel.";

const BUILTIN_TABLE: &str = include_str!("../../data/samples.toml");

static BUILTIN: Lazy<Arc<SampleLibrary>> = Lazy::new(|| {
    Arc::new(
        SampleLibrary::from_toml_str(BUILTIN_TABLE)
            .expect("built-in sample table must parse and validate"),
    )
});

#[derive(Debug, Deserialize)]
struct SampleTable {
    samples: Vec<SampleRecord>,
}

#[derive(Debug, Deserialize)]
struct SampleRecord {
    key: String,
    phrases: Vec<String>,
    title: String,
    author: String,
    parses: Vec<Parse>,
}

#[derive(Debug, Clone)]
pub struct SampleEntry {
    pub key: String,
    /// Stored lower-cased.
    phrases: Vec<String>,
    pub result: PoemResult,
}

impl SampleEntry {
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    fn matches(&self, lowered_text: &str) -> bool {
        self.phrases
            .iter()
            .any(|phrase| lowered_text.contains(phrase.as_str()))
    }
}

/// Canned results for known reference poems, keyed by recognition phrase.
#[derive(Debug, Clone, Default)]
pub struct SampleLibrary {
    entries: Vec<SampleEntry>,
}

impl SampleLibrary {
    /// The table compiled into the binary, parsed on first use and shared.
    pub fn builtin() -> Arc<SampleLibrary> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        validate_file_extension("samples", &path.to_string_lossy(), &["toml"])?;
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: SampleTable =
            toml::from_str(content).map_err(|e| ScanError::SampleLibraryError {
                message: format!("TOML parsing error: {}", e),
            })?;

        let entries = table
            .samples
            .into_iter()
            .map(SampleEntry::try_from)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Loaded {} sample poems", entries.len());
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SampleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry, in table order, with a phrase contained in `text` (case-insensitive).
    pub fn match_sample(&self, text: &str) -> Option<&PoemResult> {
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.matches(&lowered))
            .map(|entry| {
                tracing::debug!("Recognized sample poem '{}'", entry.key);
                &entry.result
            })
    }
}

impl TryFrom<SampleRecord> for SampleEntry {
    type Error = ScanError;

    fn try_from(record: SampleRecord) -> Result<Self> {
        let field = format!("samples.{}.phrases", record.key);
        if record.phrases.is_empty() {
            return Err(ScanError::SampleLibraryError {
                message: format!("sample '{}' has no recognition phrases", record.key),
            });
        }
        for phrase in &record.phrases {
            validate_non_empty_string(&field, phrase)?;
        }

        for parse in &record.parses {
            if let Some(symbol) = parse
                .meter
                .chars()
                .find(|c| *c != STRESSED && *c != UNSTRESSED)
            {
                return Err(ScanError::SampleLibraryError {
                    message: format!(
                        "sample '{}' has meter symbol '{}' in line '{}'",
                        record.key, symbol, parse.text
                    ),
                });
            }
        }

        Ok(SampleEntry {
            phrases: record.phrases.iter().map(|p| p.to_lowercase()).collect(),
            result: PoemResult {
                title: Some(record.title),
                author: Some(record.author),
                parses: record.parses,
            },
            key: record.key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_table_order() {
        let library = SampleLibrary::builtin();
        let keys: Vec<&str> = library.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["stopping_by_woods", "sonnet"]);
        assert_eq!(library.entries()[0].result.parses.len(), 4);
        assert_eq!(library.entries()[1].result.parses.len(), 4);
    }

    #[test]
    fn test_match_first_line_of_frost() {
        let library = SampleLibrary::builtin();
        let result = library
            .match_sample("Whose woods these are I think I know.")
            .unwrap();

        assert_eq!(result.title.as_deref(), Some("Stopping by Woods on a Snowy Evening"));
        assert_eq!(result.author.as_deref(), Some("Robert Frost"));
        assert_eq!(result.parses[0].meter, "-+-+-+-+");
    }

    #[test]
    fn test_match_is_case_insensitive_and_uses_alternate_phrases() {
        let library = SampleLibrary::builtin();

        let frost = library.match_sample("Notes on STOPPING BY WOODS").unwrap();
        assert_eq!(frost.author.as_deref(), Some("Robert Frost"));

        let sonnet = library.match_sample("a long Summer's Day").unwrap();
        assert_eq!(sonnet.title.as_deref(), Some("Sonnet 18"));
        assert_eq!(sonnet.parses[0].meter, "-+-+-+-+-+");
    }

    #[test]
    fn test_first_match_wins() {
        let library = SampleLibrary::builtin();
        let text = "Shall I compare thee to a summer's day?\nWhose woods these are I think I know.";
        let result = library.match_sample(text).unwrap();
        assert_eq!(result.author.as_deref(), Some("Robert Frost"));
    }

    #[test]
    fn test_no_match() {
        let library = SampleLibrary::builtin();
        assert!(library.match_sample("Hello world").is_none());
        assert!(library.match_sample("whose  woods these are").is_none());
        assert!(library.match_sample("").is_none());
    }

    #[test]
    fn test_matching_is_idempotent() {
        let library = SampleLibrary::builtin();
        let first = library.match_sample("shall I compare thee").cloned();
        let second = library.match_sample("shall I compare thee").cloned();
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn test_demo_poem_is_not_a_sample() {
        assert!(SampleLibrary::builtin().match_sample(DEMO_POEM).is_none());
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = SampleLibrary::builtin();
        let b = SampleLibrary::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_rejects_bad_meter_symbols() {
        let table = r#"
[[samples]]
key = "broken"
phrases = ["broken line"]
title = "Broken"
author = "Nobody"

[[samples.parses]]
text = "a broken line"
meter = "-x+"
parse_txt = "a BROKEN line"
"#;
        let err = SampleLibrary::from_toml_str(table).unwrap_err();
        assert!(matches!(err, ScanError::SampleLibraryError { .. }));
    }

    #[test]
    fn test_rejects_missing_phrases() {
        let table = r#"
[[samples]]
key = "silent"
phrases = []
title = "Silent"
author = "Nobody"
parses = []
"#;
        assert!(SampleLibrary::from_toml_str(table).is_err());

        let blank = table.replace("phrases = []", r#"phrases = ["  "]"#);
        assert!(SampleLibrary::from_toml_str(&blank).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        temp_file
            .write_all(
                br#"
[[samples]]
key = "tyger"
phrases = ["tyger tyger"]
title = "The Tyger"
author = "William Blake"

[[samples.parses]]
text = "Tyger Tyger, burning bright,"
meter = "+-+-+-+"
parse_txt = "TY ger TY ger BURN ing BRIGHT"
"#,
            )
            .unwrap();

        let library = SampleLibrary::from_file(temp_file.path()).unwrap();
        assert_eq!(library.len(), 1);
        let result = library.match_sample("TYGER TYGER burning bright").unwrap();
        assert_eq!(result.author.as_deref(), Some("William Blake"));
    }
}
