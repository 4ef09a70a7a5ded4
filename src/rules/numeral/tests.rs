use crate::rules::numeral::{DigitClass, NumeralMode, generate, parse_numeral, verbalize};
use crate::{Category, fixtures};

#[test]
fn numeral_cases_matching() {
    // Array of (mode, expected, stem)
    let cases: Vec<(NumeralMode, &str, &str)> = vec![
        (NumeralMode::Integer, "0", "nof"),
        (NumeralMode::Integer, "1", "tis"),
        (NumeralMode::Integer, "11", "tisettis"),
        (NumeralMode::Integer, "23", "qecetyus"),
        (NumeralMode::Integer, "2001", "qecastis"),
        (NumeralMode::Integer, "9999", "penaspenilpenetpen"),
        (NumeralMode::Integer, "450", "xalilsodet"),
        (NumeralMode::Integer, "1万", "tisotik"),
        (NumeralMode::Integer, "23億", "qecetyusoqek"),
        (NumeralMode::Integer, "7垓", "ziloxak"),
        (NumeralMode::Decimal, ".1", "vin"),
        (NumeralMode::Decimal, ".21", "vinetdum"),
        (NumeralMode::Decimal, ".1003", "gopasvin"),
        (NumeralMode::Decimal, ".00001", "vinotik"),
    ];

    let dictionary = fixtures::dictionary();

    for (mode, expected, stem) in cases {
        let parsed = parse_numeral(dictionary.digits(), stem, DigitClass::Verbal, mode);
        assert_eq!(parsed.as_deref(), Some(expected), "stem '{}' ({:?})", stem, mode);
    }
}

#[test]
fn numeral_cases_rejected() {
    let cases: Vec<(NumeralMode, &str)> = vec![
        // three units in a row: the second one finds slot 0 taken
        (NumeralMode::Integer, "tististis"),
        (NumeralMode::Integer, "tisetqecet"),
        (NumeralMode::Integer, "tisotak"),
        (NumeralMode::Integer, "tisa"),
        (NumeralMode::Integer, "lakis"),
        (NumeralMode::Integer, "otik"),
        (NumeralMode::Integer, ""),
        (NumeralMode::Integer, "vin"),
        (NumeralMode::Decimal, "tis"),
    ];

    let dictionary = fixtures::dictionary();

    for (mode, stem) in cases {
        let parsed = parse_numeral(dictionary.digits(), stem, DigitClass::Verbal, mode);
        assert_eq!(parsed, None, "stem '{}' ({:?}) should not decode", stem, mode);
    }
}

#[test]
fn nominal_tables_are_separate() {
    let dictionary = fixtures::dictionary();
    let digits = dictionary.digits();

    assert_eq!(parse_numeral(digits, "tasetqac", DigitClass::Nominal, NumeralMode::Integer).as_deref(), Some("12"));
    assert_eq!(parse_numeral(digits, "ton", DigitClass::Nominal, NumeralMode::Decimal).as_deref(), Some(".1"));
    assert_eq!(parse_numeral(digits, "tis", DigitClass::Nominal, NumeralMode::Integer), None);
    assert_eq!(parse_numeral(digits, "tas", DigitClass::Verbal, NumeralMode::Integer), None);
}

#[test]
fn parse_is_repeatable() {
    let dictionary = fixtures::dictionary();
    for stem in ["qecastis", "tististis", "vinotik"] {
        for mode in NumeralMode::ALL {
            let first = parse_numeral(dictionary.digits(), stem, DigitClass::Verbal, mode);
            let second = parse_numeral(dictionary.digits(), stem, DigitClass::Verbal, mode);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn integers_from_nonzero_digits_have_no_leading_zero() {
    let dictionary = fixtures::dictionary();
    for stem in ["tis", "qecastis", "xalilsodet", "tisotik", "penaspenilpenetpen"] {
        let number = parse_numeral(dictionary.digits(), stem, DigitClass::Verbal, NumeralMode::Integer).unwrap();
        assert!(!number.starts_with('0'), "{} -> {}", stem, number);
    }
}

#[test]
fn verbalize_shifts_last_vowel() {
    assert_eq!(verbalize("qecetyos").as_deref(), Some("qecetyus"));
    assert_eq!(verbalize("tes").as_deref(), Some("tas"));
    assert_eq!(verbalize("sâl").as_deref(), Some("sîl"));
    assert_eq!(verbalize("lùt").as_deref(), Some("lòt"));
    assert_eq!(verbalize("xyz"), None);
    assert_eq!(verbalize(""), None);
}

#[test]
fn verbalize_is_not_an_involution() {
    // e -> a -> i -> e cycles with period three
    let once = verbalize("tes").unwrap();
    let twice = verbalize(&once).unwrap();
    assert_eq!(twice, "tis");
    assert_ne!(twice, "tes");
    assert_eq!(verbalize(&twice).as_deref(), Some("tes"));

    // u <-> o swaps back
    let once = verbalize("tus").unwrap();
    assert_eq!(verbalize(&once).as_deref(), Some("tus"));

    // acute u/o have no entry, so only the earlier vowel shifts
    assert_eq!(verbalize("kaú").as_deref(), Some("kiú"));
}

#[test]
fn generate_verbal_reading() {
    let dictionary = fixtures::dictionary();
    let readings = generate(dictionary.digits(), "aqecetyus", true, false);

    assert_eq!(readings.len(), 1);
    let reading = &readings[0];
    assert_eq!(reading.name, "qecetyus");
    assert!(!reading.not_show_as_generated);
    assert_eq!(reading.equivalents[0].category, Category::Adjective);
    assert_eq!(reading.equivalents[0].frame.as_deref(), Some("/†/"));
    assert_eq!(reading.equivalents[0].names.as_deref(), Some("23"));
}

#[test]
fn generate_single_morpheme_is_not_flagged() {
    let dictionary = fixtures::dictionary();
    let readings = generate(dictionary.digits(), "Atis", true, false);

    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].name, "tis");
    assert!(readings[0].not_show_as_generated);
}

#[test]
fn generate_nominal_reading_via_ablaut() {
    let dictionary = fixtures::dictionary();
    let readings = generate(dictionary.digits(), "qecetyos", true, false);

    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].name, "qecetyus");
    assert_eq!(readings[0].equivalents[0].category, Category::Noun);
    assert_eq!(readings[0].equivalents[0].frame, None);
    assert_eq!(readings[0].equivalents[0].names.as_deref(), Some("23"));
}

#[test]
fn generate_nominal_reading_from_nominal_table() {
    let dictionary = fixtures::dictionary();
    let readings = generate(dictionary.digits(), "tas", true, false);

    // the ablaut form `tis` decodes too; only the nominal table's reading is kept
    assert_eq!(verbalize("tas").as_deref(), Some("tis"));
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].name, "tas");
    assert_eq!(readings[0].equivalents[0].names.as_deref(), Some("1"));
    assert!(readings[0].not_show_as_generated);
}

#[test]
fn generate_decimal_reading() {
    let dictionary = fixtures::dictionary();
    let readings = generate(dictionary.digits(), "avinetdum", true, false);

    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].equivalents[0].names.as_deref(), Some(".21"));
}

#[test]
fn generate_without_inflections_tries_bare_name() {
    let dictionary = fixtures::dictionary();

    let readings = generate(dictionary.digits(), "tis", false, false);
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].name, "tis");
    assert_eq!(readings[0].equivalents[0].category, Category::Adjective);

    // the verbal branch would strip the leading vowel with inflections on
    assert!(generate(dictionary.digits(), "tis", true, false).is_empty());
}

#[test]
fn generate_respects_diacritic_flag() {
    let dictionary = fixtures::dictionary();
    assert!(generate(dictionary.digits(), "atîs", true, false).is_empty());

    let readings = generate(dictionary.digits(), "atîs", true, true);
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].equivalents[0].names.as_deref(), Some("1"));
}

#[test]
fn generate_ignores_non_letters() {
    let dictionary = fixtures::dictionary();
    assert!(generate(dictionary.digits(), "al’", true, false).is_empty());
    assert!(generate(dictionary.digits(), "3", true, false).is_empty());
    assert!(generate(dictionary.digits(), "a", true, false).is_empty());
}
