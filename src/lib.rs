//! quotary - Personal quote collection with narration
//!
//! Keeps a collection of (author, text) quotes in a single XML file under
//! the user's documents directory, exposes it in-process as an observable
//! list owned by a single manager, and reads quotes aloud through a
//! pluggable speech capability.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuotaryError;
