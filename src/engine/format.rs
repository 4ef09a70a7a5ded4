//! Display form of a reading.
//!
//! A literal reading lists the entry's gloss groups in the display language.
//! When the reading has a category, groups of any other category are marked
//! weak; if none matches, a generated gloss for that category is appended
//! (derived from the entry's class, `?` when there is none).

use crate::{Category, GeneratedReading, LiteralReading, Reading};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Stand-in gloss for readings with nothing to show.
const UNKNOWN_GLOSS: &str = "?";

// Maps
static VERBAL_GENERATED_GLOSSES: Lazy<HashMap<Category, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (Category::Verb, "――になる, ――にする"),
        (Category::Adjective, "――している, ――された, ――な"),
        (Category::Adverb, "――に, ――して, ――しながら"),
        (Category::Noun, "――すること"),
    ])
});

static NOMINAL_GENERATED_GLOSSES: Lazy<HashMap<Category, &'static str>> =
    Lazy::new(|| HashMap::from([(Category::Adjective, "――を想起させるような")]));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedEquivalent {
    pub category: Option<String>,
    pub frame: Option<String>,
    /// Glosses joined with `, `.
    pub names: String,
    /// Belongs to a category other than the one the token is read as.
    pub weak: bool,
    /// Synthesized rather than taken from the dictionary.
    pub generated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedWord {
    pub name: String,
    pub inflection_tags: Vec<String>,
    pub equivalents: Vec<FormattedEquivalent>,
}

impl FormattedWord {
    /// Short enough to print on a single line: a name of at most two
    /// characters, no tags and exactly one dictionary gloss.
    pub fn is_compact(&self) -> bool {
        self.name.chars().count() <= 2
            && self.inflection_tags.is_empty()
            && self.equivalents.len() == 1
            && !self.equivalents[0].generated
    }
}

/// Format `reading` for `language`. `None` when a literal reading has no
/// content in that language.
pub fn format_reading(reading: &Reading, language: &str) -> Option<FormattedWord> {
    match reading {
        Reading::Literal(literal) => format_literal(literal, language),
        Reading::Generated(generated) => Some(format_generated(generated)),
    }
}

fn format_literal(literal: &LiteralReading, language: &str) -> Option<FormattedWord> {
    let part = literal.word.part(language)?;
    let expected = literal.category;

    let mut matched = false;
    let mut equivalents: Vec<FormattedEquivalent> = part
        .equivalents
        .iter()
        .map(|equivalent| {
            let matches = expected.is_none_or(|expected| {
                equivalent.category.as_deref().is_some_and(|category| category.starts_with(expected.abbreviation()))
            });
            matched |= matches;
            FormattedEquivalent {
                category: equivalent.category.clone(),
                frame: equivalent.frame.clone(),
                names: equivalent.names.join(", "),
                weak: !matches,
                generated: false,
            }
        })
        .collect();

    if let (false, Some(expected)) = (matched, expected) {
        let sort = part.sort.as_deref().unwrap_or_default();
        let glosses = if sort.starts_with(Category::Verb.abbreviation()) {
            VERBAL_GENERATED_GLOSSES.get(&expected)
        } else if sort.starts_with(Category::Noun.abbreviation()) {
            NOMINAL_GENERATED_GLOSSES.get(&expected)
        } else {
            None
        };
        equivalents.push(FormattedEquivalent {
            category: Some(expected.abbreviation().to_string()),
            frame: None,
            names: glosses.copied().unwrap_or(UNKNOWN_GLOSS).to_string(),
            weak: false,
            generated: true,
        });
    }

    Some(FormattedWord {
        name: literal.word.name.clone(),
        inflection_tags: literal.inflection_tags.iter().map(ToString::to_string).collect(),
        equivalents,
    })
}

fn format_generated(generated: &GeneratedReading) -> FormattedWord {
    FormattedWord {
        name: generated.name.clone(),
        inflection_tags: Vec::new(),
        equivalents: generated
            .equivalents
            .iter()
            .map(|equivalent| FormattedEquivalent {
                category: Some(equivalent.category.abbreviation().to_string()),
                frame: equivalent.frame.clone(),
                names: equivalent.names.clone().unwrap_or_else(|| UNKNOWN_GLOSS.to_string()),
                weak: false,
                generated: !generated.not_show_as_generated,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::search::search_words;
    use crate::{GeneratedEquivalent, InflectionTag, fixtures};

    fn literal(unique_name: &str, category: Option<Category>) -> Reading {
        let dictionary = fixtures::dictionary();
        let word = dictionary.resource().get(unique_name).cloned().unwrap();
        Reading::Literal(LiteralReading { word, category, inflection_tags: Vec::new() })
    }

    #[test]
    fn other_categories_are_weak() {
        let formatted = format_reading(&literal("lakis", Some(Category::Verb)), "ja").unwrap();
        assert_eq!(formatted.equivalents.len(), 2);
        assert!(!formatted.equivalents[0].weak);
        assert_eq!(formatted.equivalents[0].names, "歩く");
        assert!(formatted.equivalents[1].weak);
    }

    #[test]
    fn no_category_means_nothing_is_weak() {
        let formatted = format_reading(&literal("lakis", None), "ja").unwrap();
        assert!(formatted.equivalents.iter().all(|e| !e.weak && !e.generated));
    }

    #[test]
    fn unmatched_category_gets_generated_gloss() {
        let dictionary = fixtures::dictionary();
        let readings = search_words(&dictionary, "alakis", true, false, "ja");
        let formatted = format_reading(&Reading::Literal(readings[0].clone()), "ja").unwrap();

        assert_eq!(formatted.inflection_tags, vec!["現在", "経過"]);
        assert!(formatted.equivalents[..2].iter().all(|e| e.weak));
        let last = formatted.equivalents.last().unwrap();
        assert!(last.generated);
        assert_eq!(last.category.as_deref(), Some("形"));
        assert_eq!(last.names, "――している, ――された, ――な");
    }

    #[test]
    fn nominal_and_unknown_generated_glosses() {
        let formatted = format_reading(&literal("dus", Some(Category::Adjective)), "ja").unwrap();
        assert_eq!(formatted.equivalents.last().unwrap().names, "――を想起させるような");

        let formatted = format_reading(&literal("dus", Some(Category::Adverb)), "ja").unwrap();
        assert_eq!(formatted.equivalents.last().unwrap().names, "?");

        let formatted = format_reading(&literal("cal", Some(Category::Verb)), "ja").unwrap();
        assert_eq!(formatted.equivalents.last().unwrap().names, "?");
    }

    #[test]
    fn missing_language_formats_to_nothing() {
        assert_eq!(format_reading(&literal("lakis", None), "en"), None);
    }

    #[test]
    fn generated_readings() {
        let reading = Reading::Generated(GeneratedReading {
            name: "sakil".to_string(),
            equivalents: vec![GeneratedEquivalent::new(Category::ProperNoun, None, None)],
            not_show_as_generated: false,
        });
        let formatted = format_reading(&reading, "ja").unwrap();
        assert_eq!(formatted.equivalents[0].category.as_deref(), Some("名固"));
        assert_eq!(formatted.equivalents[0].names, "?");
        assert!(formatted.equivalents[0].generated);

        let digit = Reading::Generated(GeneratedReading {
            name: "tis".to_string(),
            equivalents: vec![GeneratedEquivalent::new(Category::Adjective, Some("/†/"), Some("1"))],
            not_show_as_generated: true,
        });
        assert!(!format_reading(&digit, "ja").unwrap().equivalents[0].generated);
    }

    #[test]
    fn compact_words() {
        let formatted = format_reading(&literal("i", None), "ja").unwrap();
        assert!(formatted.is_compact());

        let mut tagged = formatted.clone();
        tagged.inflection_tags.push(InflectionTag::NonverbModifying.to_string());
        assert!(!tagged.is_compact());

        assert!(!format_reading(&literal("dus", None), "ja").unwrap().is_compact());

        let generated = Reading::Generated(GeneratedReading {
            name: "d".to_string(),
            equivalents: vec![GeneratedEquivalent::new(Category::Noun, None, Some("x"))],
            not_show_as_generated: false,
        });
        assert!(!format_reading(&generated, "ja").unwrap().is_compact());
    }
}
