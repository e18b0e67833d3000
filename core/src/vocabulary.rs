use crate::document::Indexable;
use crate::stop_words::StopWords;
use crate::TermId;
use std::collections::HashMap;

/// Dense, contiguous term ids assigned in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    ids: HashMap<String, TermId>,
}

impl Vocabulary {
    pub fn build<D: Indexable>(documents: &[D], stop_words: &StopWords) -> Self {
        let mut ids: HashMap<String, TermId> = HashMap::new();
        for doc in documents {
            for term in doc.filtered_terms(stop_words) {
                if !ids.contains_key(term) {
                    let id = ids.len();
                    ids.insert(term.to_string(), id);
                }
            }
        }
        Self { ids }
    }

    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.ids.get(term).copied()
    }

    pub fn len(&self) -> usize { self.ids.len() }

    pub fn is_empty(&self) -> bool { self.ids.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TermId)> + '_ {
        self.ids.iter().map(|(term, id)| (term.as_str(), *id))
    }
}
