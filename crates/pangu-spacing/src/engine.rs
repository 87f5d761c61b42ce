//! Spacing engine: runs the rule table over a string.

use std::borrow::Cow;

use pangu_core::{BracketFallback, PanguConfig};
use tracing::debug;

use crate::classifier::{classify, Category};
use crate::rules::{Rule, Step, SPACING_STEPS};

/// Spacing result with the rules that changed the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingReport {
    pub output: String,
    pub original_chars: usize,
    pub spaced_chars: usize,
    pub rules_applied: Vec<&'static str>,
}

impl SpacingReport {
    pub fn changed(&self) -> bool {
        !self.rules_applied.is_empty()
    }

    /// Net number of characters inserted (negative when whitespace was squeezed out).
    pub fn net_inserted(&self) -> isize {
        self.spaced_chars as isize - self.original_chars as isize
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SpacingEngine {
    pub bracket_fallback: BracketFallback,
}

impl SpacingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &PanguConfig) -> Self {
        Self { bracket_fallback: config.bracket_fallback }
    }

    pub fn spacing_text(&self, text: &str) -> String {
        self.spacing_with_report(text).output
    }

    pub fn spacing_with_report(&self, text: &str) -> SpacingReport {
        let original_chars = text.chars().count();
        let mut applied = Vec::new();

        // Every rule needs a CJK character, except the quote and bracket squeezes.
        let relevant = text
            .chars()
            .any(|c| matches!(classify(c), Category::Cjk | Category::Quote | Category::Bracket));
        if !relevant {
            return SpacingReport {
                output: text.to_string(),
                original_chars,
                spaced_chars: original_chars,
                rules_applied: applied,
            };
        }

        let mut result = text.to_string();
        for step in SPACING_STEPS.iter() {
            match step {
                Step::Single(rule) => {
                    result = run_rule(rule, result, &mut applied).0;
                }
                Step::Guarded { primary, fallback } => {
                    let (next, changed) = run_rule(primary, result, &mut applied);
                    result = next;
                    if !changed || self.bracket_fallback == BracketFallback::Always {
                        for rule in fallback {
                            result = run_rule(rule, result, &mut applied).0;
                        }
                    }
                }
            }
        }

        SpacingReport {
            spaced_chars: result.chars().count(),
            output: result,
            original_chars,
            rules_applied: applied,
        }
    }
}

/// Apply one rule; returns the new text and whether it differs from the old.
fn run_rule(rule: &Rule, text: String, applied: &mut Vec<&'static str>) -> (String, bool) {
    let replaced = match rule.apply(&text) {
        Cow::Borrowed(_) => None,
        Cow::Owned(s) => Some(s),
    };
    match replaced {
        Some(next) if next != text => {
            debug!(rule = rule.name, "spacing rule rewrote text");
            applied.push(rule.name);
            (next, true)
        }
        _ => (text, false),
    }
}
