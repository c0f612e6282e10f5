//! XML quote store

use crate::domain::Quote;
use crate::error::{QuotaryError, Result};
use log::{debug, warn};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the persisted quotes file
pub const QUOTES_FILE_NAME: &str = "quotes.xml";

const ROOT_TAG: &[u8] = b"quotes";
const QUOTE_TAG: &[u8] = b"quote";
const AUTHOR_ATTR: &[u8] = b"author";

/// Abstract store translating between the persisted file and an in-memory
/// sequence of quotes
pub trait QuoteStore {
    /// Load the persisted collection. An absent or unreadable file yields
    /// the built-in default quotes; this never fails.
    fn load(&self) -> Vec<Quote>;

    /// Replace the persisted collection with `quotes`. May be empty.
    fn save(&self, quotes: &[Quote]) -> Result<()>;
}

/// File-backed XML implementation of [`QuoteStore`]
#[derive(Debug, Clone)]
pub struct XmlFileStore {
    path: PathBuf,
}

impl XmlFileStore {
    /// Create a store persisting to the given file path
    pub fn new(path: PathBuf) -> Self {
        XmlFileStore { path }
    }

    /// Create a store persisting to `quotes.xml` inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(QUOTES_FILE_NAME))
    }

    /// Create a store persisting to `quotes.xml` in the user's documents
    /// directory
    pub fn in_documents_dir() -> Result<Self> {
        let documents = dirs::document_dir().ok_or(QuotaryError::DocumentsDirUnavailable)?;
        Ok(Self::in_dir(&documents))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<Vec<Quote>> {
        let contents = fs::read_to_string(&self.path)?;
        parse_quotes(&contents)
    }
}

impl QuoteStore for XmlFileStore {
    fn load(&self) -> Vec<Quote> {
        if !self.path.exists() {
            debug!(
                "no quotes file at {}, using built-in quotes",
                self.path.display()
            );
            return default_quotes();
        }

        match self.try_load() {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!(
                    "could not read {}: {}; using built-in quotes",
                    self.path.display(),
                    e
                );
                default_quotes()
            }
        }
    }

    fn save(&self, quotes: &[Quote]) -> Result<()> {
        let document = render_quotes(quotes)?;

        // Full replace: drop the old file first, then write the new one.
        // An interrupted save may leave no file; the next load recovers
        // through the default fallback.
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        fs::write(&self.path, document)?;
        Ok(())
    }
}

/// The built-in dataset used whenever no valid quotes file exists
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "Eleanor Roosevelt",
            "Great minds discuss ideas; average minds discuss events; small minds discuss people.",
        ),
        Quote::new(
            "William Shakespeare",
            "Some are born great, some achieve greatness, and some have greatness thrust upon them.",
        ),
        Quote::new(
            "Winston Churchill",
            "All the great things are simple, and many can be expressed in a single word: freedom, justice, honor, duty, mercy, hope.",
        ),
        Quote::new(
            "Ralph Waldo Emerson",
            "Our greatest glory is not in never failing, but in rising up every time we fail.",
        ),
        Quote::new(
            "William Arthur Ward",
            "The mediocre teacher tells. The good teacher explains. The superior teacher demonstrates. The great teacher inspires.",
        ),
    ]
}

fn malformed(detail: impl Into<String>) -> QuotaryError {
    QuotaryError::MalformedDocument(detail.into())
}

/// Parse a whole quotes document.
///
/// Strict: any defect, including a single `quote` element without an
/// `author` attribute, fails the document as a whole. There is no
/// per-record recovery. A well-formed document with zero `quote` elements
/// parses to an empty collection.
fn parse_quotes(xml: &str) -> Result<Vec<Quote>> {
    let mut reader = Reader::from_str(xml);
    let mut quotes = Vec::new();

    // Prolog, then the <quotes> root.
    let root_is_empty = loop {
        match reader.read_event()? {
            Event::Decl(_) | Event::Comment(_) | Event::DocType(_) | Event::PI(_) => {}
            Event::Text(t) => {
                if !t.unescape()?.trim().is_empty() {
                    return Err(malformed("text outside the <quotes> root"));
                }
            }
            Event::Start(e) if e.name().as_ref() == ROOT_TAG => break false,
            Event::Empty(e) if e.name().as_ref() == ROOT_TAG => break true,
            _ => return Err(malformed("expected a <quotes> root element")),
        }
    };

    if !root_is_empty {
        loop {
            match reader.read_event()? {
                Event::Start(e) if e.name().as_ref() == QUOTE_TAG => {
                    let author = required_author(&e)?;
                    let text = read_quote_text(&mut reader)?;
                    quotes.push(Quote::new(author, text));
                }
                Event::Empty(e) if e.name().as_ref() == QUOTE_TAG => {
                    quotes.push(Quote::new(required_author(&e)?, ""));
                }
                // Foreign elements under the root are skipped wholesale.
                Event::Start(e) => {
                    reader.read_to_end(e.name())?;
                }
                Event::Empty(_) | Event::Comment(_) => {}
                Event::Text(t) => {
                    if !t.unescape()?.trim().is_empty() {
                        return Err(malformed("loose text inside <quotes>"));
                    }
                }
                Event::End(e) if e.name().as_ref() == ROOT_TAG => break,
                _ => return Err(malformed("unexpected content inside <quotes>")),
            }
        }
    }

    // Nothing but trivia may follow the root.
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Comment(_) => {}
            Event::Text(t) => {
                if !t.unescape()?.trim().is_empty() {
                    return Err(malformed("content after the </quotes> root"));
                }
            }
            _ => return Err(malformed("content after the </quotes> root")),
        }
    }

    Ok(quotes)
}

/// Collect the body text of a `<quote>` element up to its end tag.
/// Child markup is a document error; the schema allows text content only.
fn read_quote_text(reader: &mut Reader<&[u8]>) -> Result<String> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => {
                let bytes = c.into_inner();
                text.push_str(&reader.decoder().decode(&bytes)?);
            }
            Event::End(e) if e.name().as_ref() == QUOTE_TAG => break,
            _ => return Err(malformed("markup inside a <quote> element")),
        }
    }
    Ok(text)
}

fn required_author(element: &BytesStart) -> Result<String> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == AUTHOR_ATTR {
            return Ok(attr.unescape_value()?.into_owned());
        }
    }
    Err(malformed("quote element without an author attribute"))
}

/// Serialize the full collection to the on-disk document
fn render_quotes(quotes: &[Quote]) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("quotes")))?;
    for quote in quotes {
        let mut element = BytesStart::new("quote");
        element.push_attribute(("author", quote.author.as_str()));
        writer.write_event(Event::Start(element))?;
        writer.write_event(Event::Text(BytesText::new(&quote.text)))?;
        writer.write_event(Event::End(BytesEnd::new("quote")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("quotes")))?;

    let mut document = writer.into_inner();
    document.push(b'\n');
    Ok(document)
}
