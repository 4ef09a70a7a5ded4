use super::NumeralMode;

/// Split `s` after its first `n` characters (or at its end when shorter).
pub fn split_chars(s: &str, n: usize) -> (&str, &str) {
    let at = s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len());
    s.split_at(at)
}

/// Render decoded digit slots (index 0 = units) followed by `suffix`.
///
/// Empty slots above the most significant filled one are dropped; empty
/// slots below it become `0`. Decimal readings are reversed unit by unit (the
/// suffix counts as one unit) so that they read away from the decimal point.
pub fn assemble_digits(digits: &[Option<char>; 4], suffix: &str, mode: NumeralMode) -> String {
    let mut units: Vec<String> =
        digits.iter().rev().skip_while(|d| d.is_none()).map(|d| d.unwrap_or('0').to_string()).collect();
    units.push(suffix.to_string());
    if mode == NumeralMode::Decimal {
        units.reverse();
    }
    units.concat()
}

/// Normalize a literal digit token: drop whitespace and use `.` as the decimal
/// separator (`1 000·5` -> `1000.5`).
pub fn literal_number_text(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).map(|c| if c == '·' { '.' } else { c }).collect()
}
