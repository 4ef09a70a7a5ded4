//! Contraction resolver.
//!
//! A contraction (`l’an`, `d’`) is an entry whose name contains the elision
//! mark and whose glosses name the long forms. Each long form found in the
//! dictionary replaces the contraction with a reading carrying the
//! contraction's name and the long word's content. Contractions whose glosses
//! are prose rather than word names (`al’`, `s’`) come from a fixed table.

use crate::dictionary::Dictionary;
use crate::engine::search::search_words;
use crate::lexicon::{LexicalResource, Word};
use crate::normalize::{ELISION_MARK, canonicalize_elision};
use crate::{ARGUMENT_FRAME, Category, GeneratedEquivalent, GeneratedReading, LiteralReading, Reading};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Unique name of a contraction -> (frame, glosses) of its generated reading.
static IRREGULAR_CONTRACTIONS: Lazy<HashMap<&'static str, (&'static str, &'static str)>> = Lazy::new(|| {
    HashMap::from([
        ("al’", (ARGUMENT_FRAME, "〜個の, 〜人の")),
        ("ac’", (ARGUMENT_FRAME, "〜番目の, 〜回目の, 〜番の, 〜位の")),
        ("s’", ("それは /e/ で", "ある")),
    ])
});

/// Replace every contraction in `words` by its expansions, keeping order.
/// Non-contractions pass through unchanged.
pub fn replace_abbreviations<R: LexicalResource>(
    words: Vec<LiteralReading>,
    dictionary: &Dictionary<R>,
    language: &str,
) -> Vec<Reading> {
    let mut readings = Vec::with_capacity(words.len());
    for word in words {
        readings.extend(expand_contraction(word, dictionary, language));
    }
    readings
}

fn expand_contraction<R: LexicalResource>(
    reading: LiteralReading,
    dictionary: &Dictionary<R>,
    language: &str,
) -> Vec<Reading> {
    let surface = canonicalize_elision(&reading.word.name);
    if !surface.contains(ELISION_MARK) {
        return vec![Reading::Literal(reading)];
    }

    let glosses = reading.word.equivalent_names(language);
    let expandable = !glosses.is_empty() && glosses.iter().all(|gloss| !gloss.contains(char::is_whitespace));
    if expandable {
        let expansions: Vec<Reading> = glosses
            .iter()
            .filter_map(|gloss| search_words(dictionary, gloss, true, false, language).into_iter().next())
            .map(|long| Reading::Literal(adopt(&reading.word, long)))
            .collect();
        if !expansions.is_empty() {
            crate::trace!("[abbreviation] {} -> {} reading(s)", surface, expansions.len());
            return expansions;
        }
    }

    let unique_name = canonicalize_elision(&reading.word.unique_name);
    if let Some(&(frame, names)) = IRREGULAR_CONTRACTIONS.get(unique_name.as_str()) {
        return vec![Reading::Generated(GeneratedReading {
            name: reading.word.name.clone(),
            equivalents: vec![GeneratedEquivalent::new(Category::Contraction, Some(frame), Some(names))],
            not_show_as_generated: false,
        })];
    }

    vec![Reading::Literal(reading)]
}

/// The long form's reading, renamed after the contraction.
fn adopt(contraction: &Word, long: LiteralReading) -> LiteralReading {
    LiteralReading {
        word: Word {
            unique_name: contraction.unique_name.clone(),
            name: contraction.name.clone(),
            date: long.word.date,
            parts: long.word.parts,
        },
        category: long.category,
        inflection_tags: long.inflection_tags,
    }
}
