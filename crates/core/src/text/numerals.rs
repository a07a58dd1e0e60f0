//! Digit handling for the three numeral systems found in Persian text.

/// ASCII, Arabic-Indic (U+0660..U+0669) or Extended Arabic-Indic
/// (U+06F0..U+06F9) digit.
pub fn is_numeral(c: char) -> bool {
    matches!(c, '0'..='9' | '\u{0660}'..='\u{0669}' | '\u{06F0}'..='\u{06F9}')
}

/// Removes every digit of the three numeral systems.
pub fn strip_numerals(text: &str) -> String {
    text.chars().filter(|&c| !is_numeral(c)).collect()
}

/// Maps an ASCII or Arabic-Indic digit to its Persian (Extended Arabic-Indic)
/// form. Other characters are returned unchanged.
pub fn to_persian_digit(c: char) -> char {
    let offset = match c {
        '0'..='9' => c as u32 - '0' as u32,
        '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
        _ => return c,
    };
    char::from_u32(0x06F0 + offset).unwrap_or(c)
}
