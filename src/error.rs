//! Error types for quotary

use thiserror::Error;

/// Main error type for the quotary application
#[derive(Debug, Error)]
pub enum QuotaryError {
    #[error("A quote manager already exists for this process")]
    ManagerExists,

    #[error("No quote set")]
    NoQuoteSet,

    #[error("No quote at position {0}")]
    NoSuchQuote(usize),

    #[error("Malformed quotes document: {0}")]
    MalformedDocument(String),

    #[error("Could not resolve the user documents directory")]
    DocumentsDirUnavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl QuotaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuotaryError::ManagerExists => 2,
            QuotaryError::NoQuoteSet => 3,
            QuotaryError::NoSuchQuote(_) => 4,
            _ => 1,
        }
    }
}

/// Result type using QuotaryError
pub type Result<T> = std::result::Result<T, QuotaryError>;
