//! Arabic-script reshaping.
//!
//! Renderers without a shaping engine draw each code point with its
//! standalone glyph. Reshaping substitutes the contextual presentation forms
//! (isolated, initial, medial, final) and lam-alef ligatures, then reorders
//! right-to-left runs for display.

use crate::error::Result;

use super::bidi::display_order;

/// Turns logical-order text into display-ready text. Implementations must
/// keep every `\n` in place.
pub trait Reshaper: Send + Sync {
    fn reshape(&self, text: &str) -> Result<String>;
}

const LAM: char = '\u{0644}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Joining {
    /// Joins on both sides.
    Dual,
    /// Joins only to the preceding letter.
    Right,
    /// Never joins.
    Isolated,
}

#[derive(Debug, Clone, Copy)]
struct Forms {
    joining: Joining,
    isolated: char,
    fin: char,
    initial: char,
    medial: char,
}

const fn dual(base: u32) -> Forms {
    dual_split(base, base + 2)
}

const fn dual_split(base: u32, initial: u32) -> Forms {
    Forms {
        joining: Joining::Dual,
        isolated: to_char(base),
        fin: to_char(base + 1),
        initial: to_char(initial),
        medial: to_char(initial + 1),
    }
}

const fn right(base: u32) -> Forms {
    Forms {
        joining: Joining::Right,
        isolated: to_char(base),
        fin: to_char(base + 1),
        initial: to_char(base),
        medial: to_char(base + 1),
    }
}

const fn isolated(base: u32) -> Forms {
    Forms {
        joining: Joining::Isolated,
        isolated: to_char(base),
        fin: to_char(base),
        initial: to_char(base),
        medial: to_char(base),
    }
}

const fn to_char(code: u32) -> char {
    match char::from_u32(code) {
        Some(c) => c,
        None => '\u{FFFD}',
    }
}

fn letter_forms(c: char) -> Option<Forms> {
    let forms = match c {
        '\u{0621}' => isolated(0xFE80),
        '\u{0622}' => right(0xFE81),
        '\u{0623}' => right(0xFE83),
        '\u{0624}' => right(0xFE85),
        '\u{0625}' => right(0xFE87),
        '\u{0626}' => dual(0xFE89),
        '\u{0627}' => right(0xFE8D),
        '\u{0628}' => dual(0xFE8F),
        '\u{0629}' => right(0xFE93),
        '\u{062A}' => dual(0xFE95),
        '\u{062B}' => dual(0xFE99),
        '\u{062C}' => dual(0xFE9D),
        '\u{062D}' => dual(0xFEA1),
        '\u{062E}' => dual(0xFEA5),
        '\u{062F}' => right(0xFEA9),
        '\u{0630}' => right(0xFEAB),
        '\u{0631}' => right(0xFEAD),
        '\u{0632}' => right(0xFEAF),
        '\u{0633}' => dual(0xFEB1),
        '\u{0634}' => dual(0xFEB5),
        '\u{0635}' => dual(0xFEB9),
        '\u{0636}' => dual(0xFEBD),
        '\u{0637}' => dual(0xFEC1),
        '\u{0638}' => dual(0xFEC5),
        '\u{0639}' => dual(0xFEC9),
        '\u{063A}' => dual(0xFECD),
        '\u{0641}' => dual(0xFED1),
        '\u{0642}' => dual(0xFED5),
        '\u{0643}' => dual(0xFED9),
        '\u{0644}' => dual(0xFEDD),
        '\u{0645}' => dual(0xFEE1),
        '\u{0646}' => dual(0xFEE5),
        '\u{0647}' => dual(0xFEE9),
        '\u{0648}' => right(0xFEED),
        '\u{0649}' => dual_split(0xFEEF, 0xFBE8),
        '\u{064A}' => dual(0xFEF1),
        '\u{0671}' => right(0xFB50),
        '\u{067E}' => dual(0xFB56),
        '\u{0686}' => dual(0xFB7A),
        '\u{0698}' => right(0xFB8A),
        '\u{06A9}' => dual(0xFB8E),
        '\u{06AF}' => dual(0xFB92),
        '\u{06C0}' => right(0xFBA4),
        '\u{06CC}' => dual(0xFBFC),
        _ => return None,
    };
    Some(forms)
}

/// Lam-alef ligature (isolated, final) for the alef following a lam.
fn lam_alef(alef: char) -> Option<(char, char)> {
    match alef {
        '\u{0622}' => Some(('\u{FEF5}', '\u{FEF6}')),
        '\u{0623}' => Some(('\u{FEF7}', '\u{FEF8}')),
        '\u{0625}' => Some(('\u{FEF9}', '\u{FEFA}')),
        '\u{0627}' => Some(('\u{FEFB}', '\u{FEFC}')),
        _ => None,
    }
}

/// Combining marks that do not affect joining.
fn is_harakat(c: char) -> bool {
    matches!(
        c,
        '\u{0610}'..='\u{061A}'
            | '\u{064B}'..='\u{065F}'
            | '\u{0670}'
            | '\u{06D6}'..='\u{06DC}'
            | '\u{06DF}'..='\u{06E4}'
            | '\u{06E7}'..='\u{06E8}'
            | '\u{06EA}'..='\u{06ED}'
    )
}

/// Tatweel and ZWJ connect to both neighbours without changing shape.
fn is_join_causing(c: char) -> bool {
    matches!(c, '\u{0640}' | '\u{200D}')
}

fn joins_forward(c: char) -> bool {
    is_join_causing(c) || letter_forms(c).is_some_and(|f| f.joining == Joining::Dual)
}

fn joins_backward(c: char) -> bool {
    is_join_causing(c) || letter_forms(c).is_some_and(|f| f.joining != Joining::Isolated)
}

fn previous_base(chars: &[char], idx: usize) -> Option<char> {
    chars[..idx].iter().rev().copied().find(|&c| !is_harakat(c))
}

fn next_base(chars: &[char], idx: usize) -> Option<(usize, char)> {
    chars
        .iter()
        .enumerate()
        .skip(idx + 1)
        .find(|&(_, &c)| !is_harakat(c))
        .map(|(j, &c)| (j, c))
}

/// Contextual shaper for Arabic and Persian letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArabicReshaper {
    /// Drop combining marks before shaping.
    pub delete_harakat: bool,
    /// Substitute lam-alef ligatures.
    pub support_ligatures: bool,
    /// Reorder the shaped text for display.
    pub reorder: bool,
}

impl Default for ArabicReshaper {
    fn default() -> Self {
        Self {
            delete_harakat: true,
            support_ligatures: true,
            reorder: true,
        }
    }
}

impl ArabicReshaper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitutes presentation forms without reordering.
    pub fn shape(&self, text: &str) -> String {
        let chars: Vec<char> = text
            .chars()
            .filter(|&c| !(self.delete_harakat && is_harakat(c)))
            .collect();

        let mut out = String::with_capacity(text.len());
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let Some(forms) = letter_forms(c) else {
                out.push(c);
                i += 1;
                continue;
            };

            let joined_before = forms.joining != Joining::Isolated
                && previous_base(&chars, i).is_some_and(joins_forward);
            let next = next_base(&chars, i);

            if self.support_ligatures && c == LAM {
                if let Some((j, (iso, fin))) =
                    next.and_then(|(j, alef)| lam_alef(alef).map(|lig| (j, lig)))
                {
                    out.push(if joined_before { fin } else { iso });
                    out.extend(&chars[i + 1..j]);
                    i = j + 1;
                    continue;
                }
            }

            let joined_after =
                forms.joining == Joining::Dual && next.is_some_and(|(_, n)| joins_backward(n));
            out.push(match (joined_before, joined_after) {
                (true, true) => forms.medial,
                (true, false) => forms.fin,
                (false, true) => forms.initial,
                (false, false) => forms.isolated,
            });
            i += 1;
        }
        out
    }
}

impl Reshaper for ArabicReshaper {
    fn reshape(&self, text: &str) -> Result<String> {
        let shaped = self.shape(text);
        if self.reorder {
            Ok(display_order(&shaped))
        } else {
            Ok(shaped)
        }
    }
}
