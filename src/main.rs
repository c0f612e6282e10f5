use clap::Parser;
use quotary::application::{ManagerHost, QuoteManager};
use quotary::cli::{format_quote_list, Cli, Commands};
use quotary::domain::Quote;
use quotary::error::QuotaryError;
use quotary::infrastructure::{Config, ProcessSpeech, XmlFileStore};
use std::path::Path;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), QuotaryError> {
    let config = Config::load()?;
    let store = resolve_store(cli.file.as_deref(), &config)?;

    // The process composition root: the host owns the one manager.
    let mut host = ManagerHost::new();

    match cli.command {
        Some(Commands::Add { author, text }) => {
            let manager = host.get_or_init(|| QuoteManager::new(Box::new(store)));
            manager.quotes_mut().push(Quote::new(author, text));
            manager.save()?;
            println!("Added quote #{}", manager.quotes().len());
            Ok(())
        }
        Some(Commands::Remove { index }) => {
            let manager = host.get_or_init(|| QuoteManager::new(Box::new(store)));
            let position = index
                .checked_sub(1)
                .ok_or(QuotaryError::NoSuchQuote(index))?;
            manager
                .quotes_mut()
                .remove(position)
                .ok_or(QuotaryError::NoSuchQuote(index))?;
            manager.save()?;
            println!("Removed quote #{}", index);
            Ok(())
        }
        Some(Commands::Say { index }) => {
            let speech = ProcessSpeech::new(config.speech_program.clone());
            let manager = host.install(Box::new(store), Box::new(speech))?;
            let position = index
                .checked_sub(1)
                .ok_or(QuotaryError::NoSuchQuote(index))?;
            let quote = manager.quotes().get(position);
            if quote.is_none() {
                return Err(QuotaryError::NoSuchQuote(index));
            }
            manager.say_quote(quote)?;
            Ok(())
        }
        Some(Commands::List) | None => {
            let manager = host.get_or_init(|| QuoteManager::new(Box::new(store)));
            print!("{}", format_quote_list(manager.quotes()));
            Ok(())
        }
    }
}

/// Pick the quotes file: the --file flag wins, then the config override,
/// then quotes.xml in the user's documents directory.
fn resolve_store(file: Option<&Path>, config: &Config) -> Result<XmlFileStore, QuotaryError> {
    if let Some(path) = file {
        return Ok(XmlFileStore::new(path.to_path_buf()));
    }
    if let Some(path) = &config.quotes_file {
        return Ok(XmlFileStore::new(path.clone()));
    }
    XmlFileStore::in_documents_dir()
}
