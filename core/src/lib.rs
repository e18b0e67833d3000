pub mod catalog;
pub mod document;
pub mod engine;
pub mod error;
pub mod index;
pub mod sparse;
pub mod stop_words;
pub mod tfidf;
pub mod timing;
pub mod tokenizer;
pub mod vocabulary;

pub use catalog::{index_catalog, load_catalog, read_catalog, Book};
pub use document::{Document, FilteredTerms, Indexable};
pub use engine::{EngineBuilder, EngineConfig, SearchEngine, SearchPage, SearchResult, DEFAULT_MAX_RESULTS};
pub use error::{Error, Result};
pub use index::InvertedIndex;
pub use stop_words::StopWords;
pub use tfidf::TfidfModel;

/// Position of a document in ingestion order; rows of the tf-idf matrix and
/// entries of posting lists use it.
pub type DocPosition = usize;
/// Dense column of a term in the vocabulary.
pub type TermId = usize;
