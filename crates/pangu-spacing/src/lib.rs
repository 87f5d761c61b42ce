//! Pangu spacing: insert whitespace between CJK and half-width characters.
//!
//! Rules run in a fixed order, each over the whole text:
//! 1. Quotes (space outside, squeeze inside, apostrophe fix)
//! 2. Hash-delimited spans and hash adjacency
//! 3. Operators between CJK and letters/digits
//! 4. Brackets (paired, unpaired fallback, squeeze inside)
//! 5. Punctuation followed by letters/digits
//! 6. Catch-all CJK / ANS adjacency

pub mod classifier;
pub mod engine;
pub mod rules;

pub use classifier::{classify, Category, CharSet};
pub use engine::{SpacingEngine, SpacingReport};
pub use rules::{Action, Rule, Step};

/// Space `text` with the default configuration.
pub fn spacing_text(text: &str) -> String {
    SpacingEngine::new().spacing_text(text)
}
