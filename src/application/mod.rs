//! Application layer - Use cases and orchestration

pub mod manager;
pub mod narration;

pub use manager::{ManagerHost, QuoteManager};
pub use narration::{utterance, NarrationDispatcher};
