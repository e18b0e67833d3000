use search_core::{Document, EngineBuilder, Indexable, SearchEngine, SearchResult, StopWords, DEFAULT_MAX_RESULTS};

fn samples() -> Vec<Document> {
    vec![
        Document::from_text("1", "this is an indexable metadata").unwrap(),
        Document::from_text("2", "this is an indexable super metadata").unwrap(),
        Document::from_text("3", "this is another indexable metadata").unwrap(),
    ]
}

fn build(docs: Vec<Document>) -> SearchEngine<Document> {
    let mut builder = EngineBuilder::new(StopWords::english());
    for doc in docs {
        builder.add_document(doc).unwrap();
    }
    builder.build()
}

#[test]
fn counts_indexed_documents() {
    let mut builder = EngineBuilder::new(StopWords::english());
    assert_eq!(builder.count(), 0);
    for doc in samples() {
        builder.add_document(doc).unwrap();
    }
    assert_eq!(builder.count(), 3);
    assert_eq!(builder.build().count(), 3);
}

#[test]
fn ranks_existing_terms() {
    let docs = samples();
    let engine = build(docs.clone());

    let expected = vec![
        SearchResult { score: 1.414214, document: &docs[0] },
        SearchResult { score: 0.906589, document: &docs[1] },
        SearchResult { score: 0.906589, document: &docs[2] },
    ];
    assert_eq!(engine.search("indexable metadata", DEFAULT_MAX_RESULTS), expected);
}

#[test]
fn unknown_term_returns_nothing() {
    let engine = build(samples());
    assert!(engine.search("asdasdasdas", DEFAULT_MAX_RESULTS).is_empty());
    assert!(engine.search("indexable asdasdasdas", DEFAULT_MAX_RESULTS).is_empty());
}

#[test]
fn empty_query_returns_nothing() {
    let engine = build(samples());
    assert!(engine.search("", DEFAULT_MAX_RESULTS).is_empty());
    assert!(engine.search("   \t ", DEFAULT_MAX_RESULTS).is_empty());
}

#[test]
fn limits_results() {
    let docs = samples();
    let engine = build(docs.clone());
    let results = engine.search("indexable metadata", 1);
    assert_eq!(results, vec![SearchResult { score: 1.414214, document: &docs[0] }]);
}

#[test]
fn scores_never_increase() {
    let texts = [
        "rust systems programming",
        "rust rust rust",
        "learning rust with systems books",
        "systems design",
        "rust",
    ];
    let docs: Vec<Document> = texts
        .iter()
        .enumerate()
        .map(|(i, t)| Document::from_text(format!("doc{i}"), t).unwrap())
        .collect();
    let engine = build(docs);
    for n in 0..6 {
        let results = engine.search("rust", n);
        assert!(results.len() <= n);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }
    assert_eq!(engine.search("rust systems", 10).len(), 2);
}

#[test]
fn vocabulary_counts_distinct_indexed_terms() {
    let stop_words: StopWords = ["a", "the", "this", "is", "because"].into_iter().collect();
    let docs = vec![
        Document::from_text("a", "the cat is here because").unwrap(),
        Document::from_text("b", "a cat and a dog").unwrap(),
    ];
    let mut builder = EngineBuilder::new(stop_words);
    for doc in docs {
        builder.add_document(doc).unwrap();
    }
    let engine = builder.build();
    // cat, here, because (long stop word), and, dog
    assert_eq!(engine.model().vocabulary().len(), 5);
    assert_eq!(engine.index().len(), 5);
}

#[test]
fn rows_are_unit_length_or_zero() {
    let engine = build(vec![
        Document::from_text("1", "the sky is blue").unwrap(),
        Document::from_text("2", "it is what it is").unwrap(),
        Document::from_text("3", "blue whales and blue skies").unwrap(),
    ]);
    let tfidf = engine.model().tfidf();
    for row in 0..tfidf.rows() {
        let norm = tfidf.row_norm(row);
        assert!(norm == 0.0 || (norm - 1.0).abs() < 1e-4, "row {row} has norm {norm}");
    }
    assert_eq!(tfidf.row_norm(1), 0.0);
    assert_eq!(engine.documents()[1].id(), "2");
}

#[test]
fn built_engine_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SearchEngine<Document>>();

    let engine = std::sync::Arc::new(build(samples()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.search("indexable", 10).len())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 3);
    }
}
