//! Characters the shaper cannot lay out.
//!
//! Emoji, pictographs, regional indicator flags and explicit bidi controls
//! break contextual shaping and visual reordering, so they are removed before
//! the text reaches either stage. ZWNJ (U+200C) is deliberately absent from
//! this list; Persian spelling depends on it.

/// Returns true for a codepoint in the unhandled block list.
pub fn is_unhandled(c: char) -> bool {
    matches!(
        c,
        '\u{1F300}'..='\u{1F5FF}'       // Misc Symbols and Pictographs
        | '\u{1F600}'..='\u{1F64F}'     // Emoticons
        | '\u{1F680}'..='\u{1F6FF}'     // Transport and Map Symbols
        | '\u{1F700}'..='\u{1F77F}'     // Alchemical Symbols
        | '\u{1F780}'..='\u{1F7FF}'     // Geometric Shapes Extended
        | '\u{1F800}'..='\u{1F8FF}'     // Supplemental Arrows-C
        | '\u{1F900}'..='\u{1F9FF}'     // Supplemental Symbols and Pictographs
        | '\u{1FA00}'..='\u{1FAFF}'     // Chess Symbols, Symbols and Pictographs Extended-A
        | '\u{1F1E6}'..='\u{1F1FF}'     // Regional Indicators (flags)
        | '\u{2600}'..='\u{26FF}'       // Misc Symbols
        | '\u{2700}'..='\u{27BF}'       // Dingbats
        | '\u{2B00}'..='\u{2BFF}'       // Misc Symbols and Arrows
        | '\u{231A}'..='\u{231B}'       // Watch, hourglass
        | '\u{23E9}'..='\u{23FA}'       // Media controls
        | '\u{3030}'                    // Wavy dash
        | '\u{FE0E}'..='\u{FE0F}'       // Variation selectors 15 and 16
        | '\u{200D}'                    // Zero width joiner
        | '\u{200E}'..='\u{200F}'       // LRM, RLM
        | '\u{202A}'..='\u{202E}'       // LRE, RLE, PDF, LRO, RLO
        | '\u{2066}'..='\u{2069}'       // LRI, RLI, FSI, PDI
        | '\u{E0020}'..='\u{E007F}' // Tag characters (subdivision flags)
    )
}

/// Removes every unhandled character from `text`.
pub fn strip_unhandled(text: &str) -> String {
    text.chars().filter(|&c| !is_unhandled(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_emoji_and_flags() {
        assert_eq!(strip_unhandled("سلام 😀 دنیا"), "سلام  دنیا");
        assert_eq!(strip_unhandled("\u{1F1EE}\u{1F1F7}ایران"), "ایران");
        assert_eq!(strip_unhandled("ok\u{2764}\u{FE0F}"), "ok");
    }

    #[test]
    fn strips_bidi_controls() {
        assert_eq!(strip_unhandled("\u{202B}متن\u{202C}"), "متن");
        assert_eq!(strip_unhandled("a\u{200F}b"), "ab");
    }

    #[test]
    fn keeps_zwnj_and_newlines() {
        let text = "می\u{200C}روم\nhello";
        assert_eq!(strip_unhandled(text), text);
    }
}
