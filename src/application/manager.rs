//! Quote manager and its single-ownership host

use crate::application::narration::NarrationDispatcher;
use crate::domain::{Quote, QuoteList};
use crate::error::{QuotaryError, Result};
use crate::infrastructure::{QuoteStore, SpeechSynthesizer};
use log::debug;

/// Authoritative holder of the quote collection.
///
/// The collection is loaded exactly once, at construction, through the
/// injected store; `save` flushes the current state back through it.
pub struct QuoteManager {
    store: Box<dyn QuoteStore>,
    narration: Option<NarrationDispatcher>,
    quotes: QuoteList,
}

impl QuoteManager {
    /// Create a manager without narration, loading the collection from
    /// `store`
    pub fn new(store: Box<dyn QuoteStore>) -> Self {
        Self::build(store, None)
    }

    /// Create a manager wired with a narration capability
    pub fn with_narration(
        store: Box<dyn QuoteStore>,
        speech: Box<dyn SpeechSynthesizer>,
    ) -> Self {
        Self::build(store, Some(NarrationDispatcher::new(speech)))
    }

    fn build(store: Box<dyn QuoteStore>, narration: Option<NarrationDispatcher>) -> Self {
        let mut quotes = QuoteList::from_quotes(store.load());
        quotes.subscribe(|change| debug!("quote collection changed: {:?}", change));
        QuoteManager {
            store,
            narration,
            quotes,
        }
    }

    /// The canonical collection; mutations are visible to every observer
    pub fn quotes(&self) -> &QuoteList {
        &self.quotes
    }

    /// Mutable access to the canonical collection
    pub fn quotes_mut(&mut self) -> &mut QuoteList {
        &mut self.quotes
    }

    /// Persist the current collection through the store
    pub fn save(&self) -> Result<()> {
        self.store.save(self.quotes.as_slice())
    }

    /// Read a quote aloud through the narration capability.
    ///
    /// Passing `None` is an error and never reaches the capability. A
    /// manager constructed without narration ignores the call.
    pub fn say_quote(&self, quote: Option<&Quote>) -> Result<()> {
        let quote = quote.ok_or(QuotaryError::NoQuoteSet)?;

        if let Some(narration) = &self.narration {
            narration.narrate(quote);
        }

        Ok(())
    }
}

/// Owns the single [`QuoteManager`] of a process.
///
/// Lives in the composition root. `get_or_init` is the lazy accessor;
/// `install` is the explicit, narration-wired construction path and is
/// rejected once any manager exists. There is no teardown: once ready, the
/// host stays ready for the process lifetime.
#[derive(Default)]
pub struct ManagerHost {
    manager: Option<QuoteManager>,
}

impl ManagerHost {
    pub fn new() -> Self {
        ManagerHost { manager: None }
    }

    /// True once a manager has been constructed
    pub fn is_ready(&self) -> bool {
        self.manager.is_some()
    }

    /// Lazily construct the manager on first access; later calls return the
    /// same instance and ignore `init`.
    pub fn get_or_init(&mut self, init: impl FnOnce() -> QuoteManager) -> &mut QuoteManager {
        self.manager.get_or_insert_with(init)
    }

    /// Explicitly construct the manager with a narration capability.
    ///
    /// Fails fast when a manager already exists; the existing instance
    /// stays in place.
    pub fn install(
        &mut self,
        store: Box<dyn QuoteStore>,
        speech: Box<dyn SpeechSynthesizer>,
    ) -> Result<&mut QuoteManager> {
        if self.manager.is_some() {
            return Err(QuotaryError::ManagerExists);
        }
        Ok(self
            .manager
            .insert(QuoteManager::with_narration(store, speech)))
    }
}
