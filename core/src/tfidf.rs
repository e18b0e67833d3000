//! Smoothed tf-idf weighting with L2-normalized document rows.
//!
//! For a corpus of `n` documents and a smoothing constant `s`:
//!
//! ```text
//! df(t)    = documents containing t + s
//! idf(t)   = ln((n + s) / df(t)) + 1
//! w(d, t)  = tf(d, t) * idf(t) / ||tf(d) * idf||
//! ```
//!
//! The `+ 1` keeps the weight of terms present in every document above zero.

use crate::document::Indexable;
use crate::sparse::CsrMatrix;
use crate::stop_words::StopWords;
use crate::vocabulary::Vocabulary;
use crate::DocPosition;

pub const DEFAULT_SMOOTHING: u32 = 1;

#[derive(Debug, Clone)]
pub struct TfidfModel {
    smoothing: u32,
    vocabulary: Vocabulary,
    tf: CsrMatrix,
    idf: Vec<f32>,
    tfidf: CsrMatrix,
}

impl TfidfModel {
    pub fn build<D: Indexable>(documents: &[D], stop_words: &StopWords, smoothing: u32) -> Self {
        let vocabulary = Vocabulary::build(documents, stop_words);
        let n_terms = vocabulary.len();
        let n_docs = documents.len();
        tracing::info!(num_terms = n_terms, "vocabulary assembled");

        tracing::debug!("computing term frequencies");
        let mut tf = CsrMatrix::with_capacity(n_docs, n_terms, n_terms);
        for doc in documents {
            tf.push_row(doc.filtered_terms(stop_words).filter_map(|term| {
                vocabulary
                    .term_id(term)
                    .map(|col| (col, doc.term_frequency(term) as f32))
            }));
        }

        tracing::debug!("computing tf-idf");
        let smooth = smoothing as f32;
        let n_docs_smooth = n_docs as f32 + smooth;
        let idf: Vec<f32> = tf
            .column_counts()
            .into_iter()
            .map(|df| (n_docs_smooth / (df as f32 + smooth)).ln() + 1.0)
            .collect();

        let mut tfidf = tf.clone();
        tfidf.scale_columns(&idf);
        tfidf.normalize_rows_l2();

        Self { smoothing, vocabulary, tf, idf, tfidf }
    }

    /// Sum of the normalized weights of `terms` in one document. Terms outside
    /// the vocabulary contribute nothing.
    pub fn compute_score<S: AsRef<str>>(&self, position: DocPosition, terms: &[S]) -> f32 {
        terms.iter().map(|term| self.weight(position, term.as_ref())).sum()
    }

    pub fn weight(&self, position: DocPosition, term: &str) -> f32 {
        self.vocabulary
            .term_id(term)
            .map_or(0.0, |col| self.tfidf.get(position, col))
    }

    pub fn smoothing(&self) -> u32 { self.smoothing }

    pub fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }

    /// Raw term counts, one row per document.
    pub fn term_frequencies(&self) -> &CsrMatrix { &self.tf }

    /// One value per vocabulary column.
    pub fn idf(&self) -> &[f32] { &self.idf }

    pub fn tfidf(&self) -> &CsrMatrix { &self.tfidf }
}
