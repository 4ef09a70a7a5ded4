/// Returns true when `stem` consists of ASCII letters only, the only shape a
/// numeral stem can take.
pub fn is_alphabetic_stem(stem: &str) -> bool {
    regex!(r"^[a-zA-Z]+$").is_match(stem)
}

/// Returns true when `text` is a literal digit string, optionally with one
/// decimal separator (`·` or `.`) and spacing between digit groups.
pub fn is_literal_number(text: &str) -> bool {
    regex!(r"^[0-9\s]*([·.]\s*[0-9][0-9\s]*)?$").is_match(text)
}
