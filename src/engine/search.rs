//! Per-token search orchestration.
//!
//! A token is read, in order, as:
//!
//! 1. a proper noun when it starts with `ʻ` (nothing else is tried),
//! 2. dictionary entries, directly or through inflection suggestions, with
//!    contractions expanded,
//! 3. synthesized numerals,
//! 4. a literal digit string.

use crate::dictionary::Dictionary;
use crate::engine::abbreviation::replace_abbreviations;
use crate::engine::inflection::{expected_category, parse_inflection};
use crate::lexicon::{LexicalResource, Query, Suggestion, Word};
use crate::normalize::{NormalizeFlags, PROPER_NOUN_MARK};
use crate::rules::numeral::{self, helpers::literal_number_text, predicates::is_literal_number};
use crate::{
    ARGUMENT_FRAME, Category, GeneratedEquivalent, GeneratedReading, LiteralReading, Options, Reading, Token,
};

/// Look `name` up by exact (case-insensitive) name.
///
/// With `with_inflections`, every hit gets a category and tags, and every
/// non-revision suggestion is followed to its base entry, provided the base
/// entry's sort matches the suggestion kind.
pub fn search_words<R: LexicalResource>(
    dictionary: &Dictionary<R>,
    name: &str,
    with_inflections: bool,
    ignore_diacritic: bool,
    language: &str,
) -> Vec<LiteralReading> {
    let mut flags = NormalizeFlags::CASE;
    if ignore_diacritic {
        flags |= NormalizeFlags::DIACRITIC;
    }
    let result = dictionary.search(&Query::exact_name(name, language, flags));

    if !with_inflections {
        return result.words.into_iter().map(LiteralReading::plain).collect();
    }

    let mut readings: Vec<LiteralReading> =
        result.words.into_iter().map(|word| inflected(dictionary, word, None, language)).collect();

    for suggestion in result.suggestions.iter().filter(|s| !s.is_revision()) {
        let (Some(base), Some(expected)) = (suggestion.names.first(), expected_category(&suggestion.kind)) else {
            continue;
        };
        let base_result = dictionary.search(&Query::exact_name(base.as_str(), language, NormalizeFlags::empty()));
        for word in base_result.words {
            let sort = dictionary.lookup_sort(&word, language);
            if !sort.as_deref().is_some_and(|sort| sort.starts_with(expected.abbreviation())) {
                continue;
            }
            readings.push(inflected(dictionary, word, Some(suggestion), language));
        }
    }

    readings
}

fn inflected<R: LexicalResource>(
    dictionary: &Dictionary<R>,
    word: Word,
    suggestion: Option<&Suggestion>,
    language: &str,
) -> LiteralReading {
    let sort = dictionary.lookup_sort(&word, language);
    let inflection = parse_inflection(suggestion, sort.as_deref(), &word.unique_name);
    LiteralReading { word, category: inflection.category, inflection_tags: inflection.tags }
}

/// All readings of one token.
pub fn search_and_generate<R: LexicalResource>(
    dictionary: &Dictionary<R>,
    token: &Token,
    options: &Options,
) -> Vec<Reading> {
    if let Some(stem) = token.name.strip_prefix(PROPER_NOUN_MARK) {
        return search_proper_noun(dictionary, stem, options);
    }

    let with_inflections = !token.after_fek;
    let words = search_words(dictionary, &token.name, with_inflections, options.ignore_diacritic, &options.language);
    let mut readings = replace_abbreviations(words, dictionary, &options.language);

    readings.extend(
        numeral::generate(dictionary.digits(), &token.name, with_inflections, options.ignore_diacritic)
            .into_iter()
            .map(Reading::Generated),
    );

    if !token.name.is_empty() && is_literal_number(&token.name) {
        let number = literal_number_text(&token.name);
        readings.push(Reading::Generated(GeneratedReading {
            name: token.name.clone(),
            equivalents: vec![
                GeneratedEquivalent::new(Category::Adjective, None, Some(&number)),
                GeneratedEquivalent::new(Category::Noun, Some(ARGUMENT_FRAME), Some(&number)),
            ],
            not_show_as_generated: false,
        }));
    }

    crate::trace!("[search] {:?} after_fek={} -> {} reading(s)", token.name, token.after_fek, readings.len());
    readings
}

/// Noun-class entries named `stem`, read as proper nouns, or a placeholder
/// reading when there are none.
fn search_proper_noun<R: LexicalResource>(dictionary: &Dictionary<R>, stem: &str, options: &Options) -> Vec<Reading> {
    if stem.is_empty() {
        return Vec::new();
    }

    let mut readings: Vec<Reading> = search_words(dictionary, stem, false, options.ignore_diacritic, &options.language)
        .into_iter()
        .filter(|reading| {
            dictionary
                .lookup_sort(&reading.word, &options.language)
                .is_some_and(|sort| sort.starts_with(Category::Noun.abbreviation()))
        })
        .map(|mut reading| {
            reading.category = Some(Category::ProperNoun);
            Reading::Literal(reading)
        })
        .collect();

    if readings.is_empty() {
        readings.push(Reading::Generated(GeneratedReading {
            name: stem.to_lowercase(),
            equivalents: vec![GeneratedEquivalent::new(Category::ProperNoun, None, None)],
            not_show_as_generated: false,
        }));
    }

    readings
}
