//! Glossing engine.
//!
//! Analysing a sentence is a short pipeline:
//!
//! ```text
//! sentence ── WordPattern::tokenize ──> Vec<Token>        (tokenizer.rs)
//!                                          │
//!            for each token                v
//!                               search_and_generate        (search.rs)
//!                                 - proper noun (ʻ)
//!                                 - search_words + parse_inflection
//!                                                          (inflection.rs)
//!                                 - replace_abbreviations  (abbreviation.rs)
//!                                 - numeral::generate      (rules/numeral)
//!                                 - literal digits
//!                                          │
//!                                          v
//!                                     Vec<Reading> ── format_reading ──> FormattedWord
//!                                                          (format.rs)
//! ```
//!
//! Every stage only reads the [`Dictionary`](crate::Dictionary); the one
//! mutation (retiring digit entries) happens when it is built.
//!
//! ## Debugging
//!
//! Set `SHALEIAN_GLOSS_DEBUG=1` to print tokenizer segments and per-token
//! reading counts.

#[path = "engine/abbreviation.rs"]
mod abbreviation;
#[path = "engine/format.rs"]
mod format;
#[path = "engine/inflection.rs"]
mod inflection;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/search.rs"]
mod search;
#[path = "engine/tokenizer.rs"]
mod tokenizer;

pub use abbreviation::replace_abbreviations;
pub use format::{FormattedEquivalent, FormattedWord, format_reading};
pub use inflection::{Aspect, Inflection, InflectionTag, Tense, parse_inflection};
pub use metrics::{RunMetrics, SearchMetrics, TokenMetrics};
pub use search::{search_and_generate, search_words};
pub use tokenizer::WordPattern;

use crate::Token;
use crate::dictionary::Dictionary;
use crate::lexicon::LexicalResource;

/// Split `sentence` into tokens using the dictionary's abbreviation set.
pub fn split_to_tokens<R: LexicalResource>(dictionary: &Dictionary<R>, sentence: &str) -> Vec<Token> {
    dictionary.pattern().tokenize(sentence)
}
