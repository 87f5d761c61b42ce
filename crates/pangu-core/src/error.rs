use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanguError {
    #[error("Not a text file: byte stream contains a NUL byte")]
    NotTextFile,
    #[error("Malformed encoding: UTF-8 sequence starting at byte {offset} is truncated")]
    MalformedEncoding { offset: usize },
    #[error("Decode error: input is not valid {encoding}")]
    Decode { encoding: String },
    #[error("Encode error: {ch:?} cannot be represented in {encoding}")]
    Unmappable { encoding: String, ch: char },
    #[error("Invalid fallback encoding: {0}")]
    InvalidFallback(String),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PanguError>;
