//! Sample lexicon shared by unit tests.

use crate::Dictionary;
use crate::lexicon::{Description, Equivalent, MemoryLexicon, Part, Suggestion, SuggestionEntry, Word};
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;

pub(crate) fn word(unique_name: &str, sort: &str, equivalents: &[(Option<&str>, &[&str])]) -> Word {
    let part = Part {
        sort: Some(sort.to_string()),
        equivalents: equivalents
            .iter()
            .map(|(category, names)| Equivalent {
                category: category.map(str::to_string),
                frame: None,
                names: names.iter().map(|n| n.to_string()).collect(),
            })
            .collect(),
    };
    Word {
        unique_name: unique_name.to_string(),
        name: unique_name.to_string(),
        date: 0,
        parts: BTreeMap::from([("ja".to_string(), part)]),
    }
}

fn digit(name: &str, sort: &str, gloss: &str) -> Word {
    word(name, sort, &[(Some(sort), &[gloss])])
}

fn suggestion(form: &str, kind: &str, names: &[&str], descriptions: &[(&str, &str)]) -> SuggestionEntry {
    SuggestionEntry {
        form: form.to_string(),
        suggestion: Suggestion {
            kind: kind.to_string(),
            names: names.iter().map(|n| n.to_string()).collect(),
            descriptions: descriptions
                .iter()
                .map(|(kind, value)| Description { kind: kind.to_string(), value: value.to_string() })
                .collect(),
        },
    }
}

pub(crate) fn lexicon() -> MemoryLexicon {
    let mut words = Vec::new();

    for (name, gloss) in [
        ("nof", "0"),
        ("tis", "1"),
        ("qec", "2"),
        ("yus", "3"),
        ("xal", "4"),
        ("sod", "5"),
        ("ric", "6"),
        ("zil", "7"),
        ("kav", "8"),
        ("pen", "9"),
        ("vin", ".1"),
        ("dum", ".2"),
        ("gop", ".3"),
    ] {
        words.push(digit(name, "動", gloss));
    }
    words.push(digit("tas", "名", "1"));
    words.push(digit("qac", "名", "2"));
    words.push(digit("ton", "名", ".1"));
    words.push(digit("van", "名", "3"));
    words.push(digit("kin", "副", "5"));

    words.push(word("lakis", "動", &[(Some("動"), &["歩く"]), (Some("名"), &["歩行"])]));
    words.push(word("sakil", "動", &[(Some("動"), &["話す"])]));
    words.push(Word { date: 1500, ..word("lanos", "名", &[(Some("名"), &["月"])]) });
    words.push(word("dus", "名", &[(Some("名"), &["家"])]));
    words.push(word("dat", "名", &[(Some("名"), &["本"])]));
    words.push(word("i", "名", &[(Some("名"), &["私"])]));
    words.push(word("zisvalt", "名", &[(Some("名"), &["シャレイア語"])]));
    words.push(word("cal", "副", &[(Some("副"), &["とても"])]));
    // homonym of the digit word `van`; also decodes as a numeral
    words.push(Word { unique_name: "van1".to_string(), ..word("van", "名", &[(Some("名"), &["船"])]) });

    words.push(word("al'", "縮", &[(Some("縮"), &["〜個の", "〜人の"])]));
    words.push(word("s'", "縮", &[(Some("縮"), &["sa e"])]));
    words.push(word("l'an", "縮", &[(Some("縮"), &["lanos"])]));
    words.push(word("d'", "縮", &[(Some("縮"), &["dus", "dat"])]));
    words.push(word("v'", "縮", &[(Some("縮"), &["vol"])]));

    let suggestions = vec![
        suggestion(
            "alakis",
            "verbalInflection",
            &["lakis"],
            &[("category", "adjective"), ("tense", "present"), ("aspect", "progressive")],
        ),
        suggestion("alakis", "nominalInflection", &["lakis"], &[("category", "noun")]),
        suggestion("alakis", "revision", &["lakis"], &[]),
        suggestion(
            "dulakis",
            "verbalInflection",
            &["lakis"],
            &[
                ("category", "verb"),
                ("polarity", "negative"),
                ("tense", "past"),
                ("aspect", "perfect"),
                ("voice", "adjutative"),
            ],
        ),
        suggestion("olakis", "verbalInflection", &["lakis"], &[("category", "nonverbAdverb")]),
    ];

    MemoryLexicon::new(words, suggestions)
}

pub(crate) fn updated_at() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-11-01T00:00:00+09:00").unwrap()
}

pub(crate) fn dictionary() -> Dictionary<MemoryLexicon> {
    Dictionary::new(lexicon(), updated_at()).unwrap()
}
