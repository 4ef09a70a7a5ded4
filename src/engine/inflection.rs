//! Inflection resolver: turns a suggestion's grammatical descriptions (and the
//! target entry's sort) into a category plus display tags.

use crate::Category;
use crate::lexicon::Suggestion;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    Present,
    Past,
    Future,
    Diachronic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aspect {
    Inceptive,
    Progressive,
    Perfect,
    Continuous,
    Indefinite,
}

/// A display tag attached to an inflected reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InflectionTag {
    /// Used as a modifier of something other than a verb.
    NonverbModifying,
    Negative,
    Tense(Tense),
    Aspect(Aspect),
    Adjutative,
}

impl InflectionTag {
    pub fn label(self) -> &'static str {
        match self {
            InflectionTag::NonverbModifying => "非動詞修飾",
            InflectionTag::Negative => "否定",
            InflectionTag::Tense(Tense::Present) => "現在",
            InflectionTag::Tense(Tense::Past) => "過去",
            InflectionTag::Tense(Tense::Future) => "未来",
            InflectionTag::Tense(Tense::Diachronic) => "通時",
            InflectionTag::Aspect(Aspect::Inceptive) => "開始",
            InflectionTag::Aspect(Aspect::Progressive) => "経過",
            InflectionTag::Aspect(Aspect::Perfect) => "完了",
            InflectionTag::Aspect(Aspect::Continuous) => "継続",
            InflectionTag::Aspect(Aspect::Indefinite) => "無相",
            InflectionTag::Adjutative => "補助",
        }
    }
}

impl fmt::Display for InflectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category and tags of one reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inflection {
    pub category: Option<Category>,
    pub tags: Vec<InflectionTag>,
}

// Maps
static CATEGORIES: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    HashMap::from([
        ("verb", Category::Verb),
        ("adjective", Category::Adjective),
        ("adverb", Category::Adverb),
        ("noun", Category::Noun),
        ("adpredicative", Category::Adpredicative),
        ("special", Category::Special),
    ])
});

static TENSES: Lazy<HashMap<&'static str, Tense>> = Lazy::new(|| {
    HashMap::from([
        ("present", Tense::Present),
        ("past", Tense::Past),
        ("future", Tense::Future),
        ("diachronic", Tense::Diachronic),
    ])
});

static ASPECTS: Lazy<HashMap<&'static str, Aspect>> = Lazy::new(|| {
    HashMap::from([
        ("inceptive", Aspect::Inceptive),
        ("progressive", Aspect::Progressive),
        ("perfect", Aspect::Perfect),
        ("continuous", Aspect::Continuous),
        ("indefinite", Aspect::Indefinite),
    ])
});

/// Suggestion kind -> category whose abbreviation the base entry's sort must
/// start with.
static SUGGESTION_KINDS: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    HashMap::from([
        ("verbalInflection", Category::Verb),
        ("nominalInflection", Category::Noun),
        ("adpredicativeInflection", Category::Adpredicative),
        ("specialInflection", Category::Special),
        ("particleInflection", Category::Particle),
    ])
});

/// The first-person pronoun is always read as a non-verb modifier.
const PRONOUN_I: &str = "i";

/// Category a suggestion of `kind` expects its base entry to have.
pub fn expected_category(kind: &str) -> Option<Category> {
    SUGGESTION_KINDS.get(kind).copied()
}

fn describe<'a>(suggestion: Option<&'a Suggestion>, kind: &str) -> Option<&'a str> {
    suggestion.and_then(|s| s.description(kind))
}

/// Resolve the category and tags of a reading.
///
/// Without a `category` description, verb- and noun-class entries read as
/// nouns. Tags are pushed in a fixed order: non-verb modifier, polarity,
/// tense, aspect, voice. Unknown description values add nothing.
pub fn parse_inflection(suggestion: Option<&Suggestion>, sort: Option<&str>, unique_name: &str) -> Inflection {
    let mut tags = Vec::new();

    let category_name = match describe(suggestion, "category") {
        Some("nonverbAdverb") => {
            tags.push(InflectionTag::NonverbModifying);
            Some("adverb")
        }
        Some("nonverbAdpredicative") => {
            tags.push(InflectionTag::NonverbModifying);
            Some("adpredicative")
        }
        Some(name) => Some(name),
        None => sort
            .filter(|sort| {
                sort.starts_with(Category::Verb.abbreviation()) || sort.starts_with(Category::Noun.abbreviation())
            })
            .map(|_| "noun"),
    };
    let category = category_name.and_then(|name| CATEGORIES.get(name).copied());

    if describe(suggestion, "form") == Some("nonverb") || unique_name == PRONOUN_I {
        tags.push(InflectionTag::NonverbModifying);
    }
    if describe(suggestion, "polarity") == Some("negative") {
        tags.push(InflectionTag::Negative);
    }
    if let Some(&tense) = describe(suggestion, "tense").and_then(|value| TENSES.get(value)) {
        tags.push(InflectionTag::Tense(tense));
    }
    if let Some(&aspect) = describe(suggestion, "aspect").and_then(|value| ASPECTS.get(value)) {
        tags.push(InflectionTag::Aspect(aspect));
    }
    if describe(suggestion, "voice") == Some("adjutative") {
        tags.push(InflectionTag::Adjutative);
    }

    Inflection { category, tags }
}
