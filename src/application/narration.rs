//! Narration text composition and dispatch

use crate::domain::Quote;
use crate::infrastructure::SpeechSynthesizer;

/// Compose the spoken form of a quote: the text alone, or
/// `"<text> by <author>"` when an author is present.
pub fn utterance(quote: &Quote) -> String {
    if quote.has_author() {
        format!("{} by {}", quote.text, quote.author)
    } else {
        quote.text.clone()
    }
}

/// Forwards composed utterances to the injected speech capability
pub struct NarrationDispatcher {
    speech: Box<dyn SpeechSynthesizer>,
}

impl NarrationDispatcher {
    pub fn new(speech: Box<dyn SpeechSynthesizer>) -> Self {
        NarrationDispatcher { speech }
    }

    /// Speak the quote through the capability
    pub fn narrate(&self, quote: &Quote) {
        self.speech.speak(&utterance(quote));
    }
}
