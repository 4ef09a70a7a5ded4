//! The loaded dictionary: a lexical resource plus everything derived from it
//! once at load time.
//!
//! Construction is the only phase that mutates the resource. The digit
//! entries (words glossed `0`..`9` or `.0`..`.9`) are grammar infrastructure
//! rather than vocabulary: they are folded into [`DigitTables`] and then
//! retired from the resource so literal lookups never return them. After
//! `Dictionary::new` returns, the resource is only read.

use crate::engine::WordPattern;
use crate::lexicon::{LexicalResource, MatchMode, MemoryLexicon, Query, SearchField, SearchResult, Snapshot, Word};
use crate::normalize::{NormalizeFlags, canonicalize_elision};
use crate::rules::numeral::{DigitClass, DigitTables, NumeralMode};
use crate::{Category, DEFAULT_LANGUAGE, Error};
use chrono::{DateTime, FixedOffset};
use std::path::Path;

/// Glosses identifying digit entries. ASCII digits only.
const DIGIT_GLOSS_PATTERN: &str = r"^\.?[0-9]$";

#[derive(Debug)]
pub struct Dictionary<R> {
    resource: R,
    updated_at: DateTime<FixedOffset>,
    abbreviations: Vec<String>,
    digits: DigitTables,
    pattern: WordPattern,
}

impl<R: LexicalResource> Dictionary<R> {
    /// Derive abbreviations, digit tables and the tokenizer pattern from
    /// `resource`, retiring the digit entries.
    pub fn new(mut resource: R, updated_at: DateTime<FixedOffset>) -> Result<Self, Error> {
        let abbreviations = collect_abbreviations(&resource);
        let digits = build_digit_tables(&mut resource);
        let pattern = WordPattern::new(&abbreviations)?;

        crate::trace!(
            "[dictionary] updated_at={} abbreviations={:?} digit_morphemes={}",
            updated_at,
            abbreviations,
            digits.len()
        );

        Ok(Dictionary { resource, updated_at, abbreviations, digits, pattern })
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn updated_at(&self) -> DateTime<FixedOffset> {
        self.updated_at
    }

    /// Contracted surface forms, canonicalized and in matching precedence.
    pub fn abbreviations(&self) -> &[String] {
        &self.abbreviations
    }

    pub fn digits(&self) -> &DigitTables {
        &self.digits
    }

    pub(crate) fn pattern(&self) -> &WordPattern {
        &self.pattern
    }

    pub fn search(&self, query: &Query) -> SearchResult {
        self.resource.search(query)
    }

    pub fn lookup_sort(&self, word: &Word, language: &str) -> Option<String> {
        self.resource.lookup_sort(word, language)
    }
}

impl Dictionary<MemoryLexicon> {
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, Error> {
        snapshot.ensure_supported()?;
        let (lexicon, updated_at) = snapshot.into_lexicon();
        Self::new(lexicon, updated_at)
    }

    /// Read a JSON snapshot from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_snapshot(Snapshot::from_path(path)?)
    }
}

/// Names containing an elision mark, canonicalized and ordered longest first
/// so that `l’an` is tried before `l’`.
fn collect_abbreviations<R: LexicalResource>(resource: &R) -> Vec<String> {
    let query = Query {
        text: "'".to_string(),
        field: SearchField::Name,
        mode: MatchMode::Part,
        language: DEFAULT_LANGUAGE.to_string(),
        flags: NormalizeFlags::empty(),
    };

    let mut abbreviations: Vec<String> = Vec::new();
    for word in resource.search(&query).words {
        let name = canonicalize_elision(&word.name);
        if !abbreviations.contains(&name) {
            abbreviations.push(name);
        }
    }
    abbreviations.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));
    abbreviations
}

fn build_digit_tables<R: LexicalResource>(resource: &mut R) -> DigitTables {
    let query = Query {
        text: DIGIT_GLOSS_PATTERN.to_string(),
        field: SearchField::Equivalent,
        mode: MatchMode::Regular,
        language: DEFAULT_LANGUAGE.to_string(),
        flags: NormalizeFlags::empty(),
    };
    let result = resource.search(&query);

    let mut digits = DigitTables::default();
    for word in &result.words {
        let sort = resource.lookup_sort(word, DEFAULT_LANGUAGE);
        let class = match sort.as_deref() {
            Some(sort) if sort.starts_with(Category::Verb.abbreviation()) => Some(DigitClass::Verbal),
            Some(sort) if sort.starts_with(Category::Noun.abbreviation()) => Some(DigitClass::Nominal),
            _ => None,
        };

        if let (Some(class), Some(gloss)) = (class, word.equivalent_names(DEFAULT_LANGUAGE).first()) {
            let chars: Vec<char> = gloss.chars().collect();
            match chars.as_slice() {
                [digit] if digit.is_ascii_digit() => {
                    digits.insert(class, NumeralMode::Integer, word.name.clone(), *digit)
                }
                [_, digit] if digit.is_ascii_digit() => {
                    digits.insert(class, NumeralMode::Decimal, word.name.clone(), *digit)
                }
                _ => {}
            }
        }

        resource.delete_word(&word.unique_name);
    }

    digits
}
