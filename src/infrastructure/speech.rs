//! Speech output through an external OS program

use log::warn;
use std::process::Command;

/// Capability boundary to the narration engine
pub trait SpeechSynthesizer {
    /// Speak `text` aloud. Fire-and-forget; implementations report nothing
    /// back to the caller.
    fn speak(&self, text: &str);
}

/// Speaks through the platform's speech command (`say`, `espeak`, ...)
#[derive(Debug, Clone)]
pub struct ProcessSpeech {
    program: String,
}

impl ProcessSpeech {
    pub fn new(program: impl Into<String>) -> Self {
        ProcessSpeech {
            program: program.into(),
        }
    }
}

impl SpeechSynthesizer for ProcessSpeech {
    fn speak(&self, text: &str) {
        // Spawn without waiting; narration must never block the caller.
        if let Err(e) = Command::new(&self.program).arg(text).spawn() {
            warn!("could not run speech program {}: {}", self.program, e);
        }
    }
}
