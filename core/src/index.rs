use crate::document::Indexable;
use crate::stop_words::StopWords;
use crate::DocPosition;
use std::collections::HashMap;

/// Term -> positions of the documents containing it.
///
/// Posting lists are appended in document order, so every list is strictly
/// increasing. A new index has to be built to reflect a different corpus.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<DocPosition>>,
}

impl InvertedIndex {
    pub fn build<D: Indexable>(documents: &[D], stop_words: &StopWords) -> Self {
        let mut postings: HashMap<String, Vec<DocPosition>> = HashMap::new();
        for (position, doc) in documents.iter().enumerate() {
            for term in doc.filtered_terms(stop_words) {
                postings.entry(term.to_string()).or_default().push(position);
            }
        }
        tracing::debug!(num_docs = documents.len(), num_terms = postings.len(), "inverted index built");
        Self { postings }
    }

    pub fn postings(&self, term: &str) -> Option<&[DocPosition]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    /// Number of distinct indexed terms.
    pub fn len(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }

    /// Positions of the documents containing every term (boolean AND).
    ///
    /// No terms matches nothing. A term missing from the index empties the
    /// result without looking at the remaining terms. The positions come back
    /// in ascending order.
    pub fn search_terms<S: AsRef<str>>(&self, terms: &[S]) -> Vec<DocPosition> {
        let mut matched: Option<Vec<DocPosition>> = None;
        for term in terms {
            let Some(list) = self.postings.get(term.as_ref()) else {
                return Vec::new();
            };
            matched = Some(match matched {
                None => list.clone(),
                Some(acc) => intersect(&acc, list),
            });
        }
        matched.unwrap_or_default()
    }
}

// Both inputs are sorted and duplicate free.
fn intersect(a: &[DocPosition], b: &[DocPosition]) -> Vec<DocPosition> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    fn stop_words() -> StopWords {
        ["a", "the", "this", "is"].into_iter().collect()
    }

    fn index(texts: &[&str]) -> InvertedIndex {
        let docs: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| Document::from_text((i + 1).to_string(), text).unwrap())
            .collect();
        InvertedIndex::build(&docs, &stop_words())
    }

    fn sample() -> InvertedIndex {
        index(&[
            "this is an indexable simple metadata",
            "this is an indexable super metadata",
            "this is another indexable super metadata",
        ])
    }

    #[test]
    fn posting_lists_are_increasing() {
        let idx = sample();
        assert_eq!(idx.postings("indexable"), Some(&[0, 1, 2][..]));
        assert_eq!(idx.postings("super"), Some(&[1, 2][..]));
        assert_eq!(idx.postings("this"), None);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let terms: [&str; 0] = [];
        assert!(sample().search_terms(&terms).is_empty());
    }

    #[test]
    fn unknown_term_matches_nothing() {
        let idx = sample();
        assert!(idx.search_terms(&["not_valid_term"]).is_empty());
        assert!(idx.search_terms(&["not_valid_term", "super"]).is_empty());
        assert!(idx.search_terms(&["super", "not_valid_term"]).is_empty());
    }

    #[test]
    fn stop_words_are_not_indexed() {
        assert!(sample().search_terms(&["this"]).is_empty());
    }

    #[test]
    fn intersects_all_terms() {
        let idx = sample();
        assert_eq!(idx.search_terms(&["super"]), vec![1, 2]);
        assert_eq!(idx.search_terms(&["indexable", "super"]), vec![1, 2]);
        assert_eq!(idx.search_terms(&["simple", "super"]), Vec::<usize>::new());
        assert_eq!(idx.search_terms(&["super", "super"]), vec![1, 2]);
    }

    #[test]
    fn two_term_result_is_intersection_of_single_terms() {
        let idx = sample();
        let a = idx.search_terms(&["an"]);
        let b = idx.search_terms(&["metadata"]);
        let both = idx.search_terms(&["an", "metadata"]);
        let expected: Vec<usize> = a.into_iter().filter(|p| b.contains(p)).collect();
        assert_eq!(both, expected);
    }
}
