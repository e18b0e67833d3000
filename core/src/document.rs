use crate::error::{Error, Result};
use crate::stop_words::StopWords;
use std::collections::HashMap;

/// Stop words longer than this are kept as regular terms.
pub const MAX_STOP_WORD_LEN: usize = 5;

/// What the index and the ranking model need from an ingested record.
pub trait Indexable {
    fn id(&self) -> &str;

    /// Number of occurrences of `term`, 0 when the record never mentions it.
    fn term_frequency(&self, term: &str) -> u32;

    /// Unique terms that survive stop-word filtering, in first-occurrence order.
    fn filtered_terms<'a>(&'a self, stop_words: &'a StopWords) -> FilteredTerms<'a>;
}

/// A bag of words keyed by an opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: String,
    // (term, count) in first-occurrence order
    terms: Vec<(String, u32)>,
    lookup: HashMap<String, usize>,
}

impl Document {
    /// Build a document from already normalized words.
    pub fn new<I, S>(id: impl Into<String>, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::EmptyIdentifier);
        }
        let mut terms: Vec<(String, u32)> = Vec::new();
        let mut lookup: HashMap<String, usize> = HashMap::new();
        for word in words {
            let word = word.as_ref();
            match lookup.get(word) {
                Some(&slot) => terms[slot].1 += 1,
                None => {
                    lookup.insert(word.to_string(), terms.len());
                    terms.push((word.to_string(), 1));
                }
            }
        }
        Ok(Self { id, terms, lookup })
    }

    /// Build a document from whitespace-delimited text.
    pub fn from_text(id: impl Into<String>, text: &str) -> Result<Self> {
        Self::new(id, text.split_whitespace())
    }

    /// Number of distinct words, stop words included.
    pub fn unique_words(&self) -> usize {
        self.terms.len()
    }
}

impl Indexable for Document {
    fn id(&self) -> &str {
        &self.id
    }

    fn term_frequency(&self, term: &str) -> u32 {
        self.lookup.get(term).map_or(0, |&slot| self.terms[slot].1)
    }

    fn filtered_terms<'a>(&'a self, stop_words: &'a StopWords) -> FilteredTerms<'a> {
        FilteredTerms { terms: self.terms.iter(), stop_words }
    }
}

/// Iterator returned by [`Indexable::filtered_terms`].
#[derive(Clone)]
pub struct FilteredTerms<'a> {
    terms: std::slice::Iter<'a, (String, u32)>,
    stop_words: &'a StopWords,
}

impl<'a> Iterator for FilteredTerms<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let stop_words = self.stop_words;
        self.terms
            .by_ref()
            .map(|(term, _)| term.as_str())
            .find(|term| is_indexed(term, stop_words))
    }
}

fn is_indexed(term: &str, stop_words: &StopWords) -> bool {
    !stop_words.contains(term) || term.chars().count() > MAX_STOP_WORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_words() -> StopWords {
        ["a", "the", "this", "is", "another"].into_iter().collect()
    }

    #[test]
    fn counts_occurrences() {
        let doc = Document::from_text("1", "rust rust systems rust").unwrap();
        assert_eq!(doc.term_frequency("rust"), 3);
        assert_eq!(doc.term_frequency("systems"), 1);
        assert_eq!(doc.term_frequency("missing"), 0);
        assert_eq!(doc.unique_words(), 2);
    }

    #[test]
    fn rejects_empty_identifier() {
        assert!(matches!(Document::from_text("  ", "some words"), Err(Error::EmptyIdentifier)));
    }

    #[test]
    fn filters_short_stop_words_only() {
        let doc = Document::from_text("1", "this is another indexable metadata this").unwrap();
        let stop_words = stop_words();
        let terms: Vec<&str> = doc.filtered_terms(&stop_words).collect();
        // "another" is a stop word but longer than five characters
        assert_eq!(terms, vec!["another", "indexable", "metadata"]);
    }

    #[test]
    fn filtered_terms_can_be_iterated_twice() {
        let doc = Document::from_text("1", "the sky is blue").unwrap();
        let stop_words = stop_words();
        let terms = doc.filtered_terms(&stop_words);
        assert_eq!(terms.clone().count(), 2);
        assert_eq!(terms.collect::<Vec<_>>(), vec!["sky", "blue"]);
    }
}
