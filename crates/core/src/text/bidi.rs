//! Visual reordering of mixed-direction text.
//!
//! Renderers that draw glyphs left to right need right-to-left runs reversed
//! ahead of time. Each line is an independent UAX#9 paragraph so the line
//! separator used by the batch word operations stays a hard boundary.
//! Paired brackets inside right-to-left runs are mirrored (UAX#9 rule L4).

use unicode_bidi::BidiInfo;

/// Converts logical order to display order, one line (split on `\n`) at a
/// time. Line breaks are kept in place.
pub fn display_order(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        if !line.is_empty() {
            out.push_str(&display_line(line));
        }
    }
    out
}

fn display_line(line: &str) -> String {
    let info = BidiInfo::new(line, None);
    if !info.has_rtl() {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len());
    for para in &info.paragraphs {
        let (levels, runs) = info.visual_runs(para, para.range.clone());
        for run in runs {
            let text = &line[run.clone()];
            if levels[run.start].is_rtl() {
                out.extend(text.chars().rev().map(mirror));
            } else {
                out.push_str(text);
            }
        }
    }
    out
}

/// Mirrored glyph for paired punctuation, the character itself otherwise.
fn mirror(c: char) -> char {
    match c {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '\u{00AB}' => '\u{00BB}',
        '\u{00BB}' => '\u{00AB}',
        '\u{2039}' => '\u{203A}',
        '\u{203A}' => '\u{2039}',
        _ => c,
    }
}
