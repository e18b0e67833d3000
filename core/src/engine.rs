use crate::document::Indexable;
use crate::error::{Error, Result};
use crate::index::InvertedIndex;
use crate::stop_words::StopWords;
use crate::tfidf::{TfidfModel, DEFAULT_SMOOTHING};
use crate::timing::Timer;
use crate::DocPosition;
use std::collections::HashMap;

pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Scores closer than this compare equal.
const SCORE_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Added to both document frequency and document count when computing idf.
    pub smoothing: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { smoothing: DEFAULT_SMOOTHING }
    }
}

/// Collects documents until [`EngineBuilder::build`] freezes them into a
/// [`SearchEngine`].
#[derive(Debug)]
pub struct EngineBuilder<D> {
    config: EngineConfig,
    stop_words: StopWords,
    documents: Vec<D>,
    positions: HashMap<String, DocPosition>,
}

impl<D: Indexable> EngineBuilder<D> {
    pub fn new(stop_words: StopWords) -> Self {
        Self { config: EngineConfig::default(), stop_words, documents: Vec::new(), positions: HashMap::new() }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Queue a document for indexing. A second document with an identifier
    /// that was already added is rejected and the collection is unchanged.
    pub fn add_document(&mut self, document: D) -> Result<()> {
        let id = document.id();
        if self.positions.contains_key(id) {
            return Err(Error::DuplicateIdentifier(id.to_string()));
        }
        self.positions.insert(id.to_string(), self.documents.len());
        self.documents.push(document);
        Ok(())
    }

    pub fn count(&self) -> usize { self.documents.len() }

    /// Build the inverted index and the tf-idf model over the collected documents.
    pub fn build(self) -> SearchEngine<D> {
        tracing::info!(num_docs = self.documents.len(), "starting search engine (indexing | ranking)");
        let timer = Timer::start("build");
        let index = InvertedIndex::build(&self.documents, &self.stop_words);
        let model = TfidfModel::build(&self.documents, &self.stop_words, self.config.smoothing);
        timer.stop();

        SearchEngine {
            stop_words: self.stop_words,
            documents: self.documents,
            positions: self.positions,
            index,
            model,
        }
    }
}

/// Read-only search over a built corpus. Safe to share between threads.
#[derive(Debug)]
pub struct SearchEngine<D> {
    stop_words: StopWords,
    documents: Vec<D>,
    positions: HashMap<String, DocPosition>,
    index: InvertedIndex,
    model: TfidfModel,
}

#[derive(Debug)]
pub struct SearchResult<'a, D> {
    pub score: f32,
    pub document: &'a D,
}

impl<D> Clone for SearchResult<'_, D> {
    fn clone(&self) -> Self { *self }
}

impl<D> Copy for SearchResult<'_, D> {}

impl<D: PartialEq> PartialEq for SearchResult<'_, D> {
    fn eq(&self, other: &Self) -> bool {
        (self.score - other.score).abs() < SCORE_EPSILON && self.document == other.document
    }
}

#[derive(Debug)]
pub struct SearchPage<'a, D> {
    /// Matches before truncation.
    pub total_hits: usize,
    pub results: Vec<SearchResult<'a, D>>,
}

impl<D: Indexable> SearchEngine<D> {
    /// Documents containing every query term, best score first.
    pub fn search(&self, query: &str, max_results: usize) -> Vec<SearchResult<'_, D>> {
        self.search_page(query, max_results).results
    }

    /// Like [`SearchEngine::search`], also reporting how many documents matched.
    ///
    /// Equal scores keep ingestion order.
    pub fn search_page(&self, query: &str, max_results: usize) -> SearchPage<'_, D> {
        let timer = Timer::start("search");
        let terms: Vec<String> = query.to_lowercase().split_whitespace().map(str::to_string).collect();
        if terms.is_empty() {
            return SearchPage { total_hits: 0, results: Vec::new() };
        }

        let mut scored: Vec<(DocPosition, f32)> = self
            .index
            .search_terms(&terms)
            .into_iter()
            .map(|position| (position, self.model.compute_score(position, &terms)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let total_hits = scored.len();
        let results = scored
            .into_iter()
            .take(max_results)
            .map(|(position, score)| SearchResult { score, document: &self.documents[position] })
            .collect();
        tracing::debug!(query, total_hits, "search evaluated");
        timer.stop();
        SearchPage { total_hits, results }
    }

    pub fn get(&self, id: &str) -> Option<&D> {
        self.positions.get(id).map(|&position| &self.documents[position])
    }

    pub fn count(&self) -> usize { self.documents.len() }

    /// Documents in ingestion order.
    pub fn documents(&self) -> &[D] { &self.documents }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn model(&self) -> &TfidfModel { &self.model }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }
}
