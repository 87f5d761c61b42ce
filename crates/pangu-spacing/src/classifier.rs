//! Character categories.
//!
//! CJK covers these blocks:
//! - U+2E80..U+2EFF CJK Radicals Supplement
//! - U+2F00..U+2FDF Kangxi Radicals
//! - U+3040..U+309F Hiragana
//! - U+30A0..U+30FF Katakana
//! - U+3100..U+312F Bopomofo
//! - U+3200..U+32FF Enclosed CJK Letters and Months
//! - U+3400..U+4DBF CJK Unified Ideographs Extension A
//! - U+4E00..U+9FFF CJK Unified Ideographs
//! - U+F900..U+FAFF CJK Compatibility Ideographs

use std::fmt::Write;

/// A set of characters given as inclusive ranges plus single members.
#[derive(Debug, Clone, Copy)]
pub struct CharSet {
    ranges: &'static [(char, char)],
    chars: &'static [char],
}

impl CharSet {
    pub const fn new(ranges: &'static [(char, char)], chars: &'static [char]) -> Self {
        Self { ranges, chars }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.ranges.iter().any(|&(lo, hi)| lo <= ch && ch <= hi) || self.chars.contains(&ch)
    }

    /// Body of a regex bracket expression matching this set.
    ///
    /// Every member is written as a `\x{..}` escape so no character can be
    /// read as class syntax.
    pub fn class_body(&self) -> String {
        let mut body = String::new();
        for &(lo, hi) in self.ranges {
            let _ = write!(body, r"\x{{{:X}}}-\x{{{:X}}}", lo as u32, hi as u32);
        }
        for &ch in self.chars {
            let _ = write!(body, r"\x{{{:X}}}", ch as u32);
        }
        body
    }
}

/// Regex character class matching the union of `sets`.
pub fn class_of(sets: &[&CharSet]) -> String {
    let body: String = sets.iter().map(|s| s.class_body()).collect();
    format!("[{}]", body)
}

pub const CJK: CharSet = CharSet::new(
    &[
        ('\u{2e80}', '\u{2eff}'),
        ('\u{2f00}', '\u{2fdf}'),
        ('\u{3040}', '\u{309f}'),
        ('\u{30a0}', '\u{30ff}'),
        ('\u{3100}', '\u{312f}'),
        ('\u{3200}', '\u{32ff}'),
        ('\u{3400}', '\u{4dbf}'),
        ('\u{4e00}', '\u{9fff}'),
        ('\u{f900}', '\u{faff}'),
    ],
    &[],
);

/// Alphabet, number and symbol characters spaced against CJK.
pub const ANS: CharSet = CharSet::new(
    &[
        ('A', 'Z'),
        ('a', 'z'),
        ('0', '9'),
        ('\u{a1}', '\u{ff}'),
        ('\u{2150}', '\u{218f}'),
    ],
    &['`', '$', '%', '^', '&', '*', '-', '=', '+', '\\', '|', '/', '@', '\u{2022}', '\u{2027}'],
);

pub const LETTER: CharSet = CharSet::new(&[('A', 'Z'), ('a', 'z')], &[]);

pub const ALNUM: CharSet = CharSet::new(&[('A', 'Z'), ('a', 'z'), ('0', '9')], &[]);

pub const QUOTE: CharSet = CharSet::new(&[], &['"', '\'']);

pub const HASH: CharSet = CharSet::new(&[], &['#']);

pub const OPERATOR: CharSet = CharSet::new(&[], &['+', '-', '*', '/', '=', '&', '|', '<', '>']);

pub const OPEN_BRACKET: CharSet = CharSet::new(&[], &['(', '[', '{', '<', '\u{201c}']);

pub const CLOSE_BRACKET: CharSet = CharSet::new(&[], &[')', ']', '}', '>', '\u{201d}']);

/// Punctuation that takes a space after it, never before.
pub const PUNCTUATION: CharSet = CharSet::new(&[], &['~', '!', ';', ':', ',', '.', '?', '\u{2026}']);

/// Characters that get a space when they directly follow CJK.
pub const BRACKET_AFTER_CJK: CharSet = CharSet::new(&[], &['(', '[', '{', '<', '\u{201c}', '>']);

/// Characters that get a space when CJK directly follows them.
pub const BRACKET_BEFORE_CJK: CharSet = CharSet::new(&[], &[')', ']', '}', '>', '\u{201d}', '<']);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cjk,
    /// Alphabet / number / symbol.
    Ans,
    Quote,
    Bracket,
    Hash,
    Operator,
    PunctuationSymbol,
    Other,
}

/// Classify `ch`, most specific category first.
///
/// `<` and `>` are brackets, and `+ - * / = & |` are operators, even though
/// they also belong to the ANS set.
pub fn classify(ch: char) -> Category {
    if CJK.contains(ch) {
        Category::Cjk
    } else if QUOTE.contains(ch) {
        Category::Quote
    } else if HASH.contains(ch) {
        Category::Hash
    } else if OPEN_BRACKET.contains(ch) || CLOSE_BRACKET.contains(ch) {
        Category::Bracket
    } else if OPERATOR.contains(ch) {
        Category::Operator
    } else if PUNCTUATION.contains(ch) {
        Category::PunctuationSymbol
    } else if ANS.contains(ch) {
        Category::Ans
    } else {
        Category::Other
    }
}
