//! In-memory lexical resource.
//!
//! Words are kept in insertion order so search results are deterministic.
//! Name and gloss comparisons canonicalize the elision mark first (the data
//! may spell contractions with either `'` or `’`) and then fold according to
//! the query's [`NormalizeFlags`]. `Regular` queries run the pattern against
//! the raw field instead.

use super::{LexicalResource, MatchMode, Query, SearchField, SearchResult, Suggestion, Word};
use crate::normalize::{NormalizeFlags, canonicalize_elision, fold};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A suggestion offered whenever an exact name query equals `form`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionEntry {
    pub form: String,
    #[serde(flatten)]
    pub suggestion: Suggestion,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    words: Vec<Word>,
    suggestions: Vec<SuggestionEntry>,
}

impl MemoryLexicon {
    pub fn new(words: Vec<Word>, suggestions: Vec<SuggestionEntry>) -> Self {
        MemoryLexicon { words, suggestions }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn get(&self, unique_name: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.unique_name == unique_name)
    }
}

enum Matcher {
    Exact(String, NormalizeFlags),
    Part(String, NormalizeFlags),
    Regular(Option<Regex>),
}

impl Matcher {
    fn new(query: &Query) -> Self {
        match query.mode {
            MatchMode::Exact => Matcher::Exact(key(&query.text, query.flags), query.flags),
            MatchMode::Part => Matcher::Part(key(&query.text, query.flags), query.flags),
            MatchMode::Regular => {
                let re = Regex::new(&query.text).ok();
                if re.is_none() {
                    crate::trace!("[lexicon] invalid regular query {:?}", query.text);
                }
                Matcher::Regular(re)
            }
        }
    }

    fn is_match(&self, candidate: &str) -> bool {
        match self {
            Matcher::Exact(needle, flags) => key(candidate, *flags) == *needle,
            Matcher::Part(needle, flags) => key(candidate, *flags).contains(needle.as_str()),
            Matcher::Regular(re) => re.as_ref().is_some_and(|re| re.is_match(candidate)),
        }
    }
}

fn key(text: &str, flags: NormalizeFlags) -> String {
    fold(&canonicalize_elision(text), flags)
}

impl LexicalResource for MemoryLexicon {
    fn search(&self, query: &Query) -> SearchResult {
        let matcher = Matcher::new(query);

        let words = self
            .words
            .iter()
            .filter(|word| match query.field {
                SearchField::Name => matcher.is_match(&word.name),
                SearchField::Equivalent => {
                    word.equivalent_names(&query.language).into_iter().any(|name| matcher.is_match(name))
                }
            })
            .cloned()
            .collect();

        let suggestions = if query.field == SearchField::Name && query.mode == MatchMode::Exact {
            self.suggestions.iter().filter(|e| matcher.is_match(&e.form)).map(|e| e.suggestion.clone()).collect()
        } else {
            Vec::new()
        };

        SearchResult { words, suggestions }
    }

    fn delete_word(&mut self, unique_name: &str) -> bool {
        let before = self.words.len();
        self.words.retain(|w| w.unique_name != unique_name);
        self.words.len() != before
    }
}
