//! Sentence tokenizer.
//!
//! The input is composed to NFC, its apostrophes are canonicalized to `’`, and
//! it is split by a [`WordPattern`]: a single regex alternating
//!
//! 1. every known abbreviation, longest first (`al’` matches on its own;
//!    abbreviations not ending in `’`, like `l’an`, must not be followed by a
//!    letter),
//! 2. a run of letters, optionally bracketed by `+`,
//! 3. a bare `’`,
//! 4. a run of digits, `·`, thin spaces, and `.` directly followed by a digit.
//!
//! Splitting yields alternating separator/word segments:
//!
//! ```text
//! "«lakis», sakil-cal."
//!  sep   word   sep    word  sep word sep
//!  "«"  "lakis" "», " "sakil" "-" "cal" "."
//! ```
//!
//! Separators are glued back onto the neighbouring tokens' `input`: one
//! without whitespace goes to the previous token; one with whitespace is cut at
//! its last whitespace run, the head going to the previous token and the tail
//! becoming the prefix of the next one. A bare `-` separator marks the next
//! token as `after_fek`.
//!
//! The regex crate has no lookahead, so the "not followed by a letter" check
//! consumes the following character; only the capture group is taken as the
//! word, and the next search starts right after it.

use crate::normalize::{ELISION_MARK, FEK, normalize_sentence};
use crate::Token;
use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// Everything that is a word apart from abbreviations.
const GENERIC_WORD: &str = r"\+?\p{L}+\+?|’|[0-9·](?:[0-9·\x{202F}]|\.[0-9])*";

/// Word-matching pattern derived from an abbreviation set.
///
/// Rebuild it whenever the abbreviation set changes; `Dictionary` builds it
/// once at load time.
#[derive(Debug, Clone)]
pub struct WordPattern {
    regex: Regex,
}

impl WordPattern {
    /// Build the pattern. Abbreviations take precedence over the generic
    /// alternatives, in the order given.
    pub fn new(abbreviations: &[String]) -> Result<Self, regex::Error> {
        let mut alternatives: Vec<String> = abbreviations
            .iter()
            .filter(|abbreviation| !abbreviation.is_empty())
            .map(|abbreviation| {
                let escaped = regex::escape(abbreviation);
                if abbreviation.ends_with(ELISION_MARK) {
                    format!("({escaped})")
                } else {
                    format!(r"({escaped})(?:$|\P{{L}})")
                }
            })
            .collect();
        alternatives.push(format!("({GENERIC_WORD})"));

        let regex = RegexBuilder::new(&alternatives.join("|")).case_insensitive(true).build()?;
        Ok(WordPattern { regex })
    }

    /// Byte range of the first word starting at or after `start`.
    fn find_at(&self, text: &str, start: usize) -> Option<Range<usize>> {
        let caps = self.regex.captures_at(text, start)?;
        caps.iter().skip(1).flatten().next().map(|m| m.range())
    }

    /// Split `text` into `[separator, word, separator, ..., word, separator]`.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut segments = Vec::new();
        let mut last = 0;
        while let Some(range) = self.find_at(text, last) {
            segments.push(&text[last..range.start]);
            segments.push(&text[range.start..range.end]);
            last = range.end;
        }
        segments.push(&text[last..]);
        segments
    }

    /// Split a sentence into tokens.
    pub fn tokenize(&self, sentence: &str) -> Vec<Token> {
        let normalized = normalize_sentence(sentence.trim());
        let segments = self.split(&normalized);
        let last = segments.len() - 1;

        crate::trace!("[tokenizer] segments={:?}", segments);

        let mut tokens: Vec<Token> = Vec::new();
        let mut prefix = segments[0].trim_start().to_string();
        let mut fek = false;

        for (i, segment) in segments.iter().enumerate().take(last).skip(1) {
            if i % 2 == 1 {
                tokens.push(Token { input: format!("{prefix}{segment}"), name: segment.to_string(), after_fek: fek });
                prefix.clear();
                fek = false;
                continue;
            }

            let Some(previous) = tokens.last_mut() else {
                continue;
            };
            if segment.chars().all(char::is_whitespace) {
                continue;
            }
            if !segment.chars().any(char::is_whitespace) {
                previous.input.push_str(segment);
                fek = *segment == FEK;
                continue;
            }

            let head = segment.trim_end_matches(|c: char| !c.is_whitespace());
            previous.input.push_str(head.trim_end());
            prefix = segment[head.len()..].to_string();
        }

        if let Some(previous) = tokens.last_mut() {
            previous.input.push_str(segments[last].trim_end());
        }

        tokens
    }
}
