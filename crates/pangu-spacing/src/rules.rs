//! The ordered spacing rule table.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::classifier::{
    class_of, ALNUM, ANS, BRACKET_AFTER_CJK, BRACKET_BEFORE_CJK, CJK, CLOSE_BRACKET, LETTER,
    OPEN_BRACKET, OPERATOR, PUNCTUATION, QUOTE,
};

/// What a rule does to the text around its match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    InsertSpaceBetween,
    RemoveWhitespaceBetween,
    InsertSpaceAroundOperator,
}

/// A named find-and-replace pass over the whole text.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub action: Action,
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, action: Action, pattern: &str, replacement: &'static str) -> Self {
        let pattern = Regex::new(pattern).expect("spacing rule pattern is valid");
        Self { name, action, pattern, replacement }
    }

    /// Replace every non-overlapping match, leftmost first.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement)
    }
}

/// One position in the rule order.
#[derive(Debug)]
pub enum Step {
    Single(Rule),
    /// `fallback` runs only if `primary` left the text unchanged.
    Guarded { primary: Rule, fallback: Vec<Rule> },
}

impl Step {
    pub fn rules(&self) -> Vec<&Rule> {
        match self {
            Step::Single(rule) => vec![rule],
            Step::Guarded { primary, fallback } => {
                std::iter::once(primary).chain(fallback.iter()).collect()
            }
        }
    }
}

pub static SPACING_STEPS: LazyLock<Vec<Step>> = LazyLock::new(build_steps);

fn build_steps() -> Vec<Step> {
    use Action::*;

    let cjk = class_of(&[&CJK]);
    let quote = class_of(&[&QUOTE]);
    let letter = class_of(&[&LETTER]);
    let alnum = class_of(&[&ALNUM]);
    let hash_content = class_of(&[&ALNUM, &CJK]);
    let operator = class_of(&[&OPERATOR]);
    let open = class_of(&[&OPEN_BRACKET]);
    let close = class_of(&[&CLOSE_BRACKET]);
    let after_cjk = class_of(&[&BRACKET_AFTER_CJK]);
    let before_cjk = class_of(&[&BRACKET_BEFORE_CJK]);
    let punct = class_of(&[&PUNCTUATION]);
    let ans = class_of(&[&ANS]);
    let ans_or_punct = class_of(&[&ANS, &PUNCTUATION]);

    vec![
        // Quotes
        Step::Single(Rule::new("cjk_quote", InsertSpaceBetween, &format!("({cjk})({quote})"), "$1 $2")),
        Step::Single(Rule::new("quote_cjk", InsertSpaceBetween, &format!("({quote})({cjk})"), "$1 $2")),
        Step::Single(Rule::new(
            "fix_quote",
            RemoveWhitespaceBetween,
            &format!(r"({quote}+)(\s*)(.+?)(\s*)({quote}+)"),
            "$1$3$5",
        )),
        Step::Single(Rule::new(
            "fix_single_quote",
            RemoveWhitespaceBetween,
            &format!("({cjk}) (')({letter})"),
            "$1$2$3",
        )),
        // Hashes
        Step::Single(Rule::new(
            "hash_ans_cjk_hash",
            InsertSpaceBetween,
            &format!("({cjk})(#)({hash_content}+)(#)({cjk})"),
            "$1 $2$3$4 $5",
        )),
        Step::Single(Rule::new("cjk_hash", InsertSpaceBetween, &format!("({cjk})(#[^ ])"), "$1 $2")),
        Step::Single(Rule::new("hash_cjk", InsertSpaceBetween, &format!("([^ ]#)({cjk})"), "$1 $2")),
        // Operators
        Step::Single(Rule::new(
            "cjk_operator_ans",
            InsertSpaceAroundOperator,
            &format!("({cjk})({operator})({alnum})"),
            "$1 $2 $3",
        )),
        Step::Single(Rule::new(
            "ans_operator_cjk",
            InsertSpaceAroundOperator,
            &format!("({alnum})({operator})({cjk})"),
            "$1 $2 $3",
        )),
        // Brackets
        Step::Guarded {
            primary: Rule::new(
                "cjk_bracket_cjk",
                InsertSpaceBetween,
                &format!("({cjk})({open}+(.*?){close}+)({cjk})"),
                "$1 $2 $4",
            ),
            fallback: vec![
                Rule::new("cjk_bracket", InsertSpaceBetween, &format!("({cjk})({after_cjk})"), "$1 $2"),
                Rule::new("bracket_cjk", InsertSpaceBetween, &format!("({before_cjk})({cjk})"), "$1 $2"),
            ],
        },
        Step::Single(Rule::new(
            "fix_bracket",
            RemoveWhitespaceBetween,
            &format!(r"({open}+)(\s*)(.+?)(\s*)({close}+)"),
            "$1$3$5",
        )),
        // Punctuation
        Step::Single(Rule::new(
            "fix_symbol",
            InsertSpaceBetween,
            &format!("({cjk})({punct})({alnum})"),
            "$1$2 $3",
        )),
        // Catch-all
        Step::Single(Rule::new("cjk_ans", InsertSpaceBetween, &format!("({cjk})({ans})"), "$1 $2")),
        Step::Single(Rule::new("ans_cjk", InsertSpaceBetween, &format!("({ans_or_punct})({cjk})"), "$1 $2")),
    ]
}

/// Rule names in application order.
pub fn rule_names() -> Vec<&'static str> {
    SPACING_STEPS.iter().flat_map(|s| s.rules()).map(|r| r.name).collect()
}
