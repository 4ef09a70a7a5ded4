//! JSON dictionary snapshots.
//!
//! A snapshot is the serialized form of a downloaded dictionary:
//!
//! ```json
//! {
//!   "updatedAt": "2024-11-01T00:00:00+09:00",
//!   "words": [{ "uniqueName": "tis", "name": "tis", "parts": { "ja": { "sort": "動", "equivalents": [] } } }],
//!   "suggestions": [{ "form": "alakis", "kind": "verbalInflection", "names": ["lakis"], "descriptions": [] }]
//! }
//! ```
//!
//! Snapshots taken before [`MINIMUM_UPDATED_AT`] predate the digit entries the
//! numeral tables are built from and are rejected.

use super::{MemoryLexicon, SuggestionEntry, Word};
use crate::Error;
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Oldest snapshot the engine accepts.
pub static MINIMUM_UPDATED_AT: Lazy<DateTime<FixedOffset>> =
    Lazy::new(|| DateTime::parse_from_rfc3339("2024-10-06T00:00:00+09:00").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub updated_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(default)]
    pub suggestions: Vec<SuggestionEntry>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn is_outdated(&self) -> bool {
        self.updated_at < *MINIMUM_UPDATED_AT
    }

    /// Fail with [`Error::Outdated`] when the snapshot is too old to use.
    pub fn ensure_supported(&self) -> Result<(), Error> {
        if self.is_outdated() {
            return Err(Error::Outdated { updated_at: self.updated_at, minimum: *MINIMUM_UPDATED_AT });
        }
        Ok(())
    }

    pub fn into_lexicon(self) -> (MemoryLexicon, DateTime<FixedOffset>) {
        (MemoryLexicon::new(self.words, self.suggestions), self.updated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexicalResource;

    const SAMPLE: &str = r#"{
        "updatedAt": "2024-11-01T12:00:00+09:00",
        "words": [
            {
                "uniqueName": "lakis",
                "name": "lakis",
                "date": 1200,
                "parts": { "ja": { "sort": "動", "equivalents": [{ "category": "動", "names": ["歩く"] }] } }
            }
        ],
        "suggestions": [
            {
                "form": "alakis",
                "kind": "verbalInflection",
                "names": ["lakis"],
                "descriptions": [{ "kind": "tense", "type": "past" }]
            }
        ]
    }"#;

    #[test]
    fn parses_sample_snapshot() {
        let snapshot = Snapshot::from_json(SAMPLE).unwrap();
        assert!(!snapshot.is_outdated());
        assert!(snapshot.ensure_supported().is_ok());
        assert_eq!(snapshot.words.len(), 1);
        assert_eq!(snapshot.suggestions[0].suggestion.description("tense"), Some("past"));

        let (lexicon, updated_at) = snapshot.into_lexicon();
        assert_eq!(updated_at.to_rfc3339(), "2024-11-01T12:00:00+09:00");
        let word = lexicon.get("lakis").unwrap();
        assert_eq!(lexicon.lookup_sort(word, "ja").as_deref(), Some("動"));
        assert_eq!(word.part("ja").unwrap().equivalents[0].frame, None);
    }

    #[test]
    fn rejects_old_snapshots() {
        let json = r#"{ "updatedAt": "2024-10-05T23:59:59+09:00" }"#;
        let snapshot = Snapshot::from_json(json).unwrap();
        assert!(snapshot.is_outdated());
        assert!(matches!(snapshot.ensure_supported(), Err(Error::Outdated { .. })));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(Snapshot::from_json("{"), Err(Error::Json(_))));
    }
}
