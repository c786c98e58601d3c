use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkflowError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid separator pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ChunkflowError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ChunkflowError>;
