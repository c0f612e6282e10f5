//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quotary")]
#[command(about = "Keep and read aloud a personal collection of quotes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Quotes file to use (default: quotes.xml in your documents directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the stored quotes
    List,

    /// Add a quote and save the collection
    Add {
        /// Who said it
        author: String,

        /// The quote text
        text: String,
    },

    /// Remove the quote at the given position and save the collection
    Remove {
        /// 1-based position as shown by `list`
        index: usize,
    },

    /// Read the quote at the given position aloud
    Say {
        /// 1-based position as shown by `list`
        index: usize,
    },
}
