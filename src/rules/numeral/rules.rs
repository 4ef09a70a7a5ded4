use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::normalize::{NormalizeFlags, fold};
use crate::{ARGUMENT_FRAME, Category, GeneratedEquivalent, GeneratedReading};

use crate::rules::numeral::{
    DigitClass, DigitTables, NumeralMode,
    helpers::{assemble_digits, split_chars},
    predicates::is_alphabetic_stem,
};

// Maps
/// Position markers following a digit morpheme, mapped to their slot.
static DIGIT_POSITIONS: Lazy<HashMap<&'static str, usize>> =
    Lazy::new(|| HashMap::from([("et", 1), ("il", 2), ("as", 3)]));

/// Magnitude suffixes of integer readings (successive powers of 10^4).
static INTEGER_SUFFIXES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("", ""), ("otik", "万"), ("oqek", "億"), ("oyok", "兆"), ("opik", "京"), ("oxak", "垓")])
});

/// Magnitude suffixes of decimal readings (the same shifts below the point).
static DECIMAL_SUFFIXES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("", "."),
        ("otik", ".0000"),
        ("oqek", ".00000000"),
        ("oyok", ".000000000000"),
        ("opik", ".0000000000000000"),
        ("oxak", ".00000000000000000000"),
    ])
});

/// Noun-class vowel -> verb-class vowel.
static ABLAUT: Lazy<HashMap<char, char>> = Lazy::new(|| {
    HashMap::from([
        ('e', 'a'),
        ('i', 'e'),
        ('a', 'i'),
        ('u', 'o'),
        ('o', 'u'),
        ('ê', 'â'),
        ('î', 'ê'),
        ('â', 'î'),
        ('û', 'ô'),
        ('ô', 'û'),
        ('é', 'á'),
        ('í', 'é'),
        ('á', 'í'),
        ('è', 'à'),
        ('ì', 'è'),
        ('à', 'ì'),
        ('ù', 'ò'),
        ('ò', 'ù'),
    ])
});

/// Leading vowel of an inflected verb-class word (`atis` = "being one").
const VERBAL_PREFIX: char = 'a';

/// Length of a single digit morpheme; a stem this short is a plain dictionary
/// digit rather than a synthesized numeral.
const MORPHEME_LEN: usize = 3;

const POSITION_LEN: usize = 2;

fn suffixes(mode: NumeralMode) -> &'static HashMap<&'static str, &'static str> {
    match mode {
        NumeralMode::Integer => &INTEGER_SUFFIXES,
        NumeralMode::Decimal => &DECIMAL_SUFFIXES,
    }
}

/// Decode `stem` into a numeral string using the `class`/`mode` digit table.
///
/// Returns `None` when no digit morpheme is found, when two morphemes claim
/// the same position, or when the remainder is not a magnitude suffix.
pub fn parse_numeral(tables: &DigitTables, stem: &str, class: DigitClass, mode: NumeralMode) -> Option<String> {
    let table = tables.table(class, mode);
    let mut rest = stem;
    let mut digits: [Option<char>; 4] = [None; 4];

    loop {
        let (morpheme, after) = split_chars(rest, MORPHEME_LEN);
        if morpheme.is_empty() {
            break;
        }
        let Some(&digit) = table.get(morpheme) else {
            break;
        };
        rest = after;

        let (marker, after_marker) = split_chars(rest, POSITION_LEN);
        let position = match DIGIT_POSITIONS.get(marker) {
            Some(&position) => {
                rest = after_marker;
                position
            }
            None => 0,
        };

        if digits[position].is_some() {
            return None;
        }
        digits[position] = Some(digit);
    }

    if digits.iter().all(Option::is_none) {
        return None;
    }

    let suffix = suffixes(mode).get(rest)?;
    Some(assemble_digits(&digits, suffix, mode))
}

/// Derive the verb-class form of a noun-class stem by shifting its last
/// ablaut vowel. `None` when the stem has no such vowel.
///
/// The table is not an involution: `u`/`o` swap, but `e -> a -> i -> e` cycles.
pub fn verbalize(nominal: &str) -> Option<String> {
    let (index, original, shifted) =
        nominal.char_indices().rev().find_map(|(i, c)| ABLAUT.get(&c).map(|&shifted| (i, c, shifted)))?;

    let mut verbal = String::with_capacity(nominal.len() + 1);
    verbal.push_str(&nominal[..index]);
    verbal.push(shifted);
    verbal.push_str(&nominal[index + original.len_utf8()..]);
    Some(verbal)
}

/// Decode a noun-class stem: first with the nominal tables, then via its
/// ablaut-derived verbal form. Returns the stem that decoded with the number.
fn parse_nominal(tables: &DigitTables, stem: &str, mode: NumeralMode) -> Option<(String, String)> {
    if let Some(number) = parse_numeral(tables, stem, DigitClass::Nominal, mode) {
        return Some((stem.to_string(), number));
    }
    let verbal = verbalize(stem)?;
    let number = parse_numeral(tables, &verbal, DigitClass::Verbal, mode)?;
    Some((verbal, number))
}

fn numeral_reading(stem: &str, category: Category, frame: Option<&str>, number: String) -> GeneratedReading {
    GeneratedReading {
        name: stem.to_string(),
        equivalents: vec![GeneratedEquivalent {
            category,
            frame: frame.map(str::to_string),
            names: Some(number),
        }],
        not_show_as_generated: stem.chars().count() == MORPHEME_LEN,
    }
}

/// Generate numeral readings for a token name.
///
/// With inflection expansion on, a leading `a` marks the verb-class reading
/// (stripped before decoding) and its absence the noun-class one; with it
/// off (after a hyphen) both readings are tried on the bare name. Each
/// successful integer or decimal decode yields one reading, in the order
/// verbal integer, verbal decimal, nominal integer, nominal decimal.
///
/// A noun-class decode uses the nominal tables when they decode the stem and
/// falls back to the ablaut-derived verbal form otherwise, so each mode emits
/// at most one of the two.
pub fn generate(
    tables: &DigitTables,
    name: &str,
    with_inflections: bool,
    ignore_diacritic: bool,
) -> Vec<GeneratedReading> {
    let mut flags = NormalizeFlags::CASE;
    if ignore_diacritic {
        flags |= NormalizeFlags::DIACRITIC;
    }
    let normalized = fold(name, flags);
    if !is_alphabetic_stem(&normalized) {
        return Vec::new();
    }

    let mut numerals = Vec::new();
    let verbal_prefixed = normalized.starts_with(VERBAL_PREFIX);

    if !with_inflections || verbal_prefixed {
        let stem = if with_inflections { &normalized[VERBAL_PREFIX.len_utf8()..] } else { normalized.as_str() };
        for mode in NumeralMode::ALL {
            if let Some(number) = parse_numeral(tables, stem, DigitClass::Verbal, mode) {
                numerals.push(numeral_reading(stem, Category::Adjective, Some(ARGUMENT_FRAME), number));
            }
        }
    }

    if !with_inflections || !verbal_prefixed {
        for mode in NumeralMode::ALL {
            if let Some((stem, number)) = parse_nominal(tables, &normalized, mode) {
                numerals.push(numeral_reading(&stem, Category::Noun, None, number));
            }
        }
    }

    numerals
}
