//! String normalization shared by the tokenizer, the numeral generator and the
//! in-memory lexicon.
//!
//! Two kinds of normalization happen here:
//!
//! - **Canonicalization**: input sentences are composed to NFC and every ASCII
//!   apostrophe is rewritten to the typographic elision mark `’`. Abbreviation
//!   surface forms go through the same rewrite, so the tokenizer and the
//!   contraction resolver only ever see one mark.
//! - **Folding**: comparisons that ignore some differences (diacritics, case,
//!   whitespace, wave dashes) according to a [`NormalizeFlags`] set.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical elision mark used by contractions such as `al’`.
pub const ELISION_MARK: char = '’';

/// Mark prefixed to proper nouns (`ʻzisvalt`).
pub const PROPER_NOUN_MARK: char = 'ʻ';

/// The hyphen ("fek") joining words; the word after it is not inflected.
pub const FEK: &str = "-";

bitflags::bitflags! {
    /// Differences ignored when comparing a query against the lexicon.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NormalizeFlags: u8 {
        const DIACRITIC = 1 << 0;
        const CASE      = 1 << 1;
        const SPACE     = 1 << 2;
        const WAVE      = 1 << 3;
    }
}

/// Rewrite ASCII apostrophes to the canonical elision mark.
pub fn canonicalize_elision(text: &str) -> String {
    text.replace('\'', "’")
}

/// Compose `text` to NFC and canonicalize its elision marks.
pub fn normalize_sentence(text: &str) -> String {
    let composed: String = text.nfc().collect();
    canonicalize_elision(&composed)
}

/// Fold `text` so that differences named in `flags` compare equal.
pub fn fold(text: &str, flags: NormalizeFlags) -> String {
    let mut folded: String = text.nfc().collect();
    if flags.contains(NormalizeFlags::DIACRITIC) {
        folded = folded.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect();
    }
    if flags.contains(NormalizeFlags::CASE) {
        folded = folded.to_lowercase();
    }
    if flags.contains(NormalizeFlags::SPACE) {
        folded.retain(|c| !c.is_whitespace());
    }
    if flags.contains(NormalizeFlags::WAVE) {
        folded.retain(|c| c != '~' && c != '〜');
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_normalization_composes_and_rewrites_apostrophes() {
        let decomposed = "a\u{0302}l'";
        assert_eq!(normalize_sentence(decomposed), "âl’");
    }

    #[test]
    fn fold_respects_each_flag() {
        assert_eq!(fold("Câves", NormalizeFlags::empty()), "Câves");
        assert_eq!(fold("Câves", NormalizeFlags::DIACRITIC), "Caves");
        assert_eq!(fold("Câves", NormalizeFlags::CASE), "câves");
        assert_eq!(fold("Câves", NormalizeFlags::DIACRITIC | NormalizeFlags::CASE), "caves");
        assert_eq!(fold("a b~c", NormalizeFlags::SPACE | NormalizeFlags::WAVE), "abc");
    }
}
