//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod speech;
pub mod store;

pub use config::Config;
pub use speech::{ProcessSpeech, SpeechSynthesizer};
pub use store::{default_quotes, QuoteStore, XmlFileStore, QUOTES_FILE_NAME};
