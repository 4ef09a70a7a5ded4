//! Numeral morphology.
//!
//! Shaleian numerals are built from three-letter digit morphemes. Each
//! morpheme may be followed by a two-letter position marker (`et` tens, `il`
//! hundreds, `as` thousands; no marker means units) and the whole group of up
//! to four digits may end in a magnitude suffix (`otik` = 10^4, `oqek` = 10^8,
//! ...). Verb-class and noun-class words use separate digit morphemes, and the
//! decimal readings (`.1`, `.2`, ...) have morphemes of their own, so the
//! dictionary yields four [`DigitTables`].
//!
//! ```text
//! qec + as + tis            -> slots [1, _, _, 2]   -> "2001"
//! tis + otik                -> slots [1, _, _, _]   -> "1万"
//! vin + et + dum (decimal)  -> slots [2, 1, _, _]   -> ".21"
//! ```
//!
//! A noun-class numeral that is not in the nominal tables is verbalized by
//! ablaut (the last vowel shifts, `qecetyos` -> `qecetyus`) and decoded with
//! the verbal tables.

pub mod helpers;
pub mod predicates;
pub mod rules;

#[cfg(test)]
mod tests;

pub use rules::{generate, parse_numeral, verbalize};

use std::collections::HashMap;

/// Which family of digit morphemes to decode with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitClass {
    Verbal,
    Nominal,
}

/// Integer or decimal reading of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralMode {
    Integer,
    Decimal,
}

impl NumeralMode {
    pub const ALL: [NumeralMode; 2] = [NumeralMode::Integer, NumeralMode::Decimal];
}

/// Digit morpheme -> digit character, one map per class and mode.
///
/// Built once from the dictionary (see `Dictionary::new`) and immutable
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitTables {
    verbal: HashMap<String, char>,
    verbal_decimal: HashMap<String, char>,
    nominal: HashMap<String, char>,
    nominal_decimal: HashMap<String, char>,
}

impl DigitTables {
    pub fn table(&self, class: DigitClass, mode: NumeralMode) -> &HashMap<String, char> {
        match (class, mode) {
            (DigitClass::Verbal, NumeralMode::Integer) => &self.verbal,
            (DigitClass::Verbal, NumeralMode::Decimal) => &self.verbal_decimal,
            (DigitClass::Nominal, NumeralMode::Integer) => &self.nominal,
            (DigitClass::Nominal, NumeralMode::Decimal) => &self.nominal_decimal,
        }
    }

    pub fn insert(&mut self, class: DigitClass, mode: NumeralMode, morpheme: impl Into<String>, digit: char) {
        let table = match (class, mode) {
            (DigitClass::Verbal, NumeralMode::Integer) => &mut self.verbal,
            (DigitClass::Verbal, NumeralMode::Decimal) => &mut self.verbal_decimal,
            (DigitClass::Nominal, NumeralMode::Integer) => &mut self.nominal,
            (DigitClass::Nominal, NumeralMode::Decimal) => &mut self.nominal_decimal,
        };
        table.insert(morpheme.into(), digit);
    }

    /// Total number of morphemes across the four tables.
    pub fn len(&self) -> usize {
        self.verbal.len() + self.verbal_decimal.len() + self.nominal.len() + self.nominal_decimal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
