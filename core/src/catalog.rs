//! Book catalog: tab-separated `id<TAB>title<TAB>author` records.

use crate::document::{Document, FilteredTerms, Indexable};
use crate::engine::{EngineBuilder, EngineConfig, SearchEngine};
use crate::error::{Error, Result};
use crate::stop_words::StopWords;
use crate::timing::Timer;
use crate::tokenizer::preprocess;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const ID_FIELD: usize = 0;
const TITLE_FIELD: usize = 1;
const AUTHOR_FIELD: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    document: Document,
    pub title: String,
    pub author: String,
}

impl Book {
    /// `metadata` is the indexed text; usually title and author.
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>, metadata: &str) -> Result<Self> {
        Ok(Self { document: Document::from_text(id, metadata)?, title: title.into(), author: author.into() })
    }

    pub fn document(&self) -> &Document { &self.document }

    /// Parse one raw catalog line. `line` is 1-based and only used for errors.
    pub fn parse(raw: &str, line: usize) -> Result<Self> {
        let fields = preprocess(raw);
        if fields.len() <= AUTHOR_FIELD {
            return Err(Error::MalformedRecord {
                line,
                reason: format!("expected id, title and author, found {} field(s)", fields.len()),
            });
        }
        let id = fields[ID_FIELD].trim();
        let metadata = fields[TITLE_FIELD..].join(" ");
        Book::new(id, fields[TITLE_FIELD].trim(), fields[AUTHOR_FIELD].trim(), &metadata).map_err(|e| {
            Error::MalformedRecord { line, reason: e.to_string() }
        })
    }
}

impl Indexable for Book {
    fn id(&self) -> &str { self.document.id() }

    fn term_frequency(&self, term: &str) -> u32 { self.document.term_frequency(term) }

    fn filtered_terms<'a>(&'a self, stop_words: &'a StopWords) -> FilteredTerms<'a> {
        self.document.filtered_terms(stop_words)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id: {}, title: {}, author: {}", self.id(), self.title, self.author)
    }
}

pub fn read_catalog<R: BufRead>(reader: R) -> Result<Vec<Book>> {
    let mut books = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        books.push(Book::parse(&line, n + 1)?);
    }
    Ok(books)
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Book>> {
    tracing::info!(path = %path.as_ref().display(), "loading books from file");
    let f = File::open(path)?;
    read_catalog(BufReader::new(f))
}

/// Load a catalog and build a search engine over it. Books whose id was
/// already seen are skipped with a warning.
pub fn index_catalog<P: AsRef<Path>>(path: P, stop_words: StopWords, config: EngineConfig) -> Result<SearchEngine<Book>> {
    let timer = Timer::start("load_books");
    let mut builder = EngineBuilder::new(stop_words).with_config(config);
    for book in load_catalog(path)? {
        match builder.add_document(book) {
            Ok(()) => {}
            Err(Error::DuplicateIdentifier(id)) => tracing::warn!(%id, "skipping duplicate book id"),
            Err(e) => return Err(e),
        }
    }
    let engine = builder.build();
    timer.stop();
    Ok(engine)
}
