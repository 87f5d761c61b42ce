pub mod config;
pub mod error;
pub mod types;

pub use config::{BracketFallback, PanguConfig, Utf16BomCheck};
pub use error::{PanguError, Result};
pub use types::EncodingTag;

#[cfg(test)]
mod tests;
