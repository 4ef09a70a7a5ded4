//! Lexical resource boundary.
//!
//! The glossing engine never owns the dictionary data itself: it talks to a
//! [`LexicalResource`] that answers exact/partial/regular-expression queries,
//! can retire entries, and classifies words by their "sort" (the short
//! part-of-speech code whose first character names the class, e.g. `動` for
//! verb-class and `名` for noun-class entries).
//!
//! [`MemoryLexicon`] is the in-memory implementation used by the CLI and the
//! tests; it is built from a JSON [`Snapshot`].

#[path = "lexicon/memory.rs"]
mod memory;
#[path = "lexicon/snapshot.rs"]
mod snapshot;

pub use memory::{MemoryLexicon, SuggestionEntry};
pub use snapshot::{MINIMUM_UPDATED_AT, Snapshot};

use crate::normalize::NormalizeFlags;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A dictionary entry as returned by the resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// Identifier unique within the resource (homonyms carry a suffix).
    pub unique_name: String,
    /// Spelling of the entry.
    pub name: String,
    #[serde(default)]
    pub date: u32,
    /// Definitional content per display language.
    #[serde(default)]
    pub parts: BTreeMap<String, Part>,
}

/// Definitional content of a word in one display language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub equivalents: Vec<Equivalent>,
}

/// One gloss group: a category tag, an optional usage frame and the glosses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equivalent {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub frame: Option<String>,
    pub names: Vec<String>,
}

impl Word {
    pub fn part(&self, language: &str) -> Option<&Part> {
        self.parts.get(language)
    }

    /// Flat list of glosses in `language`, in definition order.
    pub fn equivalent_names(&self, language: &str) -> Vec<&str> {
        self.part(language)
            .map(|part| part.equivalents.iter().flat_map(|eq| eq.names.iter().map(String::as_str)).collect())
            .unwrap_or_default()
    }
}

/// A `{kind, type}` pair describing one grammatical feature of a suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub kind: String,
    #[serde(rename = "type")]
    pub value: String,
}

/// A hint from the resource that the query is an inflected or revised form of
/// other entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// `revision`, `verbalInflection`, `nominalInflection`, ...
    pub kind: String,
    pub names: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<Description>,
}

impl Suggestion {
    pub fn is_revision(&self) -> bool {
        self.kind == "revision"
    }

    /// Value of the description with the given `kind`, if any.
    pub fn description(&self, kind: &str) -> Option<&str> {
        self.descriptions.iter().find(|d| d.kind == kind).map(|d| d.value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Equivalent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    Part,
    /// `text` is a regular expression matched against the raw field.
    Regular,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub field: SearchField,
    pub mode: MatchMode,
    pub language: String,
    /// Differences to ignore when comparing.
    pub flags: NormalizeFlags,
}

impl Query {
    /// Exact match on the entry name.
    pub fn exact_name(text: impl Into<String>, language: impl Into<String>, flags: NormalizeFlags) -> Self {
        Query { text: text.into(), field: SearchField::Name, mode: MatchMode::Exact, language: language.into(), flags }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub words: Vec<Word>,
    pub suggestions: Vec<Suggestion>,
}

/// The external lexical resource consumed by the engine.
pub trait LexicalResource {
    fn search(&self, query: &Query) -> SearchResult;

    /// Remove an entry; returns whether it existed.
    fn delete_word(&mut self, unique_name: &str) -> bool;

    /// Classification code of `word` in `language`.
    fn lookup_sort(&self, word: &Word, language: &str) -> Option<String> {
        word.part(language).and_then(|part| part.sort.clone())
    }
}
