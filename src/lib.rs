extern crate self as shaleian_gloss;

#[macro_use]
mod macros;
mod api;
mod dictionary;
mod engine;
mod error;
pub mod lexicon;
pub mod normalize;
pub mod rules;

#[cfg(test)]
mod fixtures;

pub use api::{
    AnalysisDetails, AnalysisResult, AnalysisResultVerbose, Options, TokenAnalysis, analyze, analyze_verbose,
};
pub use dictionary::Dictionary;
pub use engine::{
    Aspect, FormattedEquivalent, FormattedWord, Inflection, InflectionTag, Tense, TokenMetrics, WordPattern,
    format_reading, parse_inflection, replace_abbreviations, search_and_generate, search_words, split_to_tokens,
};
pub use error::Error;

use crate::lexicon::Word;
use std::fmt;

/// Display language the glosses and tags are produced in.
pub const DEFAULT_LANGUAGE: &str = "ja";

/// Usage frame of a gloss that takes the word's argument (`/†/`).
pub const ARGUMENT_FRAME: &str = "/†/";

// --- Tokens -----------------------------------------------------------------

/// One word of an input sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Original text including the punctuation reattached around the word.
    pub input: String,
    /// Bare word form used for lookup.
    pub name: String,
    /// The word directly follows a hyphen and is looked up uninflected.
    pub after_fek: bool,
}

// --- Categories -------------------------------------------------------------

/// Grammatical category of a reading, displayed by its one- or two-character
/// abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Verb,
    Adjective,
    Adverb,
    Noun,
    Adpredicative,
    Special,
    Particle,
    Contraction,
    ProperNoun,
}

impl Category {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Category::Verb => "動",
            Category::Adjective => "形",
            Category::Adverb => "副",
            Category::Noun => "名",
            Category::Adpredicative => "述",
            Category::Special => "特",
            Category::Particle => "助",
            Category::Contraction => "縮",
            Category::ProperNoun => "名固",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

// --- Readings ---------------------------------------------------------------

/// A candidate reading of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    /// An entry returned by the lexical resource.
    Literal(LiteralReading),
    /// A reading synthesized by the engine (numerals, irregular contractions,
    /// unknown proper nouns, literal digits).
    Generated(GeneratedReading),
}

impl Reading {
    pub fn name(&self) -> &str {
        match self {
            Reading::Literal(literal) => &literal.word.name,
            Reading::Generated(generated) => &generated.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralReading {
    pub word: Word,
    /// Category the token is read as, when inflection analysis ran.
    pub category: Option<Category>,
    pub inflection_tags: Vec<InflectionTag>,
}

impl LiteralReading {
    pub fn plain(word: Word) -> Self {
        LiteralReading { word, category: None, inflection_tags: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReading {
    pub name: String,
    pub equivalents: Vec<GeneratedEquivalent>,
    /// Display the reading like a dictionary entry (e.g. a bare digit).
    pub not_show_as_generated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedEquivalent {
    pub category: Category,
    pub frame: Option<String>,
    pub names: Option<String>,
}

impl GeneratedEquivalent {
    pub fn new(category: Category, frame: Option<&str>, names: Option<&str>) -> Self {
        GeneratedEquivalent { category, frame: frame.map(str::to_string), names: names.map(str::to_string) }
    }
}
