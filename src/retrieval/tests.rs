use std::io::Write;
use std::sync::Arc;

use super::*;

fn tfidf_corpus() -> Corpus {
    Corpus::new([
        "TF-IDF is a term weighting scheme.",
        "Neural networks are a type of machine learning model.",
    ])
}

fn lecture_corpus() -> Corpus {
    Corpus::new([
        "Week 3: TF-IDF (Term Frequency-Inverse Document Frequency) is used to measure how \
         important a word is in a document relative to the entire corpus. It helps identify \
         keywords that are distinctive to a particular document.",
        "Week 5: Explainable AI (XAI) aims to provide transparency and human-understandable \
         reasons for model outputs. It helps users understand why an AI system made a particular \
         decision or prediction.",
        "Week 7: Text mining involves extracting useful information from unstructured text data. \
         Common techniques include tokenization, stemming, and vectorization methods like TF-IDF.",
    ])
}

fn assert_ranked(results: &[PassageScore]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.passage_id < b.passage_id),
            "results out of order: {:?} before {:?}",
            a,
            b
        );
    }
}

#[test]
fn test_empty_corpus_is_rejected() {
    let err = Retriever::new(Corpus::new(Vec::<String>::new())).unwrap_err();
    assert!(matches!(err, RetrievalError::InvalidCorpus { .. }));
}

#[test]
fn test_whitespace_corpus_is_rejected() {
    let err = Retriever::new(Corpus::new(["", "   ", "\n\t"])).unwrap_err();
    assert!(matches!(err, RetrievalError::InvalidCorpus { .. }));
    assert!(err.to_string().contains("whitespace"));
}

#[test]
fn test_corpus_without_indexable_terms_is_rejected() {
    let err = Retriever::new(Corpus::new(["a b c", "what is the ?"])).unwrap_err();
    assert!(matches!(err, RetrievalError::InvalidCorpus { .. }));
}

#[test]
fn test_corpus_with_some_blank_passages_is_accepted() {
    let retriever = Retriever::new(Corpus::new(["", "gradient descent"])).unwrap();
    assert_eq!(retriever.len(), 2);

    let results = retriever.retrieve("gradient", 5);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].passage_id, 1);
}

#[test]
fn test_tfidf_question_retrieves_tfidf_passage() {
    let retriever = Retriever::new(tfidf_corpus()).unwrap();

    let results = retriever.retrieve("What is TF-IDF?", 1);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].passage_id, 0);
    assert!(results[0].score > 0.0);

    let all = retriever.retrieve("What is TF-IDF?", 10);
    assert_eq!(all.len(), 1, "passage 1 shares no terms and must be excluded");
}

#[test]
fn test_no_vocabulary_overlap_returns_empty() {
    let retriever = Retriever::new(tfidf_corpus()).unwrap();
    assert!(retriever.retrieve("photosynthesis chlorophyll", 3).is_empty());
}

#[test]
fn test_empty_and_stop_word_queries_return_empty() {
    let retriever = Retriever::new(tfidf_corpus()).unwrap();
    assert!(retriever.retrieve("", 3).is_empty());
    assert!(retriever.retrieve("   ", 3).is_empty());
    assert!(retriever.retrieve("what is the", 3).is_empty());
    assert!(retriever.retrieve("?!", 3).is_empty());
}

#[test]
fn test_zero_k_returns_empty() {
    let retriever = Retriever::new(tfidf_corpus()).unwrap();
    assert!(retriever.retrieve("TF-IDF", 0).is_empty());
}

#[test]
fn test_large_k_returns_all_nonzero_sorted() {
    let retriever = Retriever::new(lecture_corpus()).unwrap();

    let results = retriever.retrieve("What is the main purpose of TF-IDF in text mining?", 100);
    let mut ids: Vec<usize> = results.iter().map(|r| r.passage_id).collect();
    ids.sort_unstable();

    assert_eq!(ids, vec![0, 2]);
    assert_ranked(&results);
    assert!(results.len() <= retriever.len());
}

#[test]
fn test_result_length_bounded_by_k() {
    let retriever = Retriever::new(lecture_corpus()).unwrap();
    for k in 1..=4 {
        let results = retriever.retrieve("TF-IDF document text model", k);
        assert!(results.len() <= k.min(retriever.len()));
        assert_ranked(&results);
    }
}

#[test]
fn test_ties_broken_by_ascending_passage_id() {
    let retriever = Retriever::new(Corpus::new([
        "python interpreter",
        "rust borrow checker",
        "rust borrow checker",
        "rust borrow checker",
    ]))
    .unwrap();

    let results = retriever.retrieve("borrow checker", 10);
    let ids: Vec<usize> = results.iter().map(|r| r.passage_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[1].score, results[2].score);

    let top_two = retriever.retrieve("borrow checker", 2);
    assert_eq!(
        top_two.iter().map(|r| r.passage_id).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[test]
fn test_identical_text_scores_near_one() {
    let corpus = lecture_corpus();
    let retriever = Retriever::new(corpus.clone()).unwrap();

    let results = retriever.retrieve(&corpus[1], 1);
    assert_eq!(results[0].passage_id, 1);
    assert!((results[0].score - 1.0).abs() < 1e-4);
}

#[test]
fn test_scores_within_unit_interval() {
    let retriever = Retriever::new(lecture_corpus()).unwrap();
    for hit in retriever.retrieve("document text model AI corpus", 10) {
        assert!(hit.score > 0.0 && hit.score <= 1.0);
    }
}

#[test]
fn test_retrieve_is_idempotent() {
    let retriever = Retriever::new(lecture_corpus()).unwrap();
    let query = "How does TF-IDF help text mining?";

    let first = retriever.retrieve(query, 3);
    let second = retriever.retrieve(query, 3);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.passage_id, b.passage_id);
        assert_eq!(a.score.to_bits(), b.score.to_bits());
    }
}

#[test]
fn test_retrieve_passages_attaches_text() {
    let retriever = Retriever::new(tfidf_corpus()).unwrap();
    let passages = retriever.retrieve_passages("term weighting", 2);

    assert_eq!(passages.len(), 1);
    assert_eq!(passages[0].passage_id, 0);
    assert_eq!(passages[0].text, "TF-IDF is a term weighting scheme.");
}

#[test]
fn test_model_statistics() {
    let retriever = Retriever::new(lecture_corpus()).unwrap();
    let model = retriever.model();

    assert_eq!(model.num_passages(), 3);
    assert_eq!(model.document_frequency("tf"), Some(2));
    assert_eq!(model.document_frequency("xai"), Some(1));
    assert!(!model.contains_term("the"));

    let common = model.idf("tf").unwrap();
    let rare = model.idf("xai").unwrap();
    assert!(rare > common);
}

#[test]
fn test_shared_retriever_across_threads() {
    let retriever = Arc::new(Retriever::new(lecture_corpus()).unwrap());
    let expected = retriever.retrieve("explainable AI transparency", 2);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let retriever = Arc::clone(&retriever);
            std::thread::spawn(move || retriever.retrieve("explainable AI transparency", 2))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_handle_swap_replaces_corpus() {
    let handle = RetrieverHandle::from_corpus(tfidf_corpus()).unwrap();
    let before = handle.load();
    assert!(handle.load().retrieve("photosynthesis", 1).is_empty());

    handle
        .rebuild(Corpus::new(["Photosynthesis converts light into chemical energy."]))
        .unwrap();

    assert_eq!(handle.load().retrieve("photosynthesis", 1).len(), 1);
    assert_eq!(before.len(), 2, "earlier snapshot is unaffected by the swap");
}

#[test]
fn test_handle_rebuild_failure_keeps_current() {
    let handle = RetrieverHandle::from_corpus(tfidf_corpus()).unwrap();

    let err = handle.rebuild(Corpus::new(Vec::<String>::new())).unwrap_err();
    assert!(matches!(err, RetrievalError::InvalidCorpus { .. }));
    assert_eq!(handle.load().len(), 2);
}

#[test]
fn test_corpus_from_text_splits_paragraphs() {
    let corpus = Corpus::from_text("First paragraph.\n\n\n  Second\nparagraph.  \r\n\r\nThird.\n\n   \n");
    assert_eq!(corpus.len(), 3);
    assert_eq!(&corpus[0], "First paragraph.");
    assert_eq!(&corpus[1], "Second\nparagraph.");
    assert_eq!(corpus.get(2), Some("Third."));
    assert_eq!(corpus.get(3), None);
}

#[test]
fn test_corpus_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "Lecture one.\n\nLecture two.").unwrap();

    let corpus = Corpus::from_file(file.path()).unwrap();
    assert_eq!(corpus.as_slice(), &["Lecture one.".to_string(), "Lecture two.".to_string()]);
}

#[test]
fn test_corpus_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Corpus::from_file(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, RetrievalError::CorpusRead { .. }));
}

#[test]
fn test_sample_lectures_answer_the_demo_question() {
    let retriever = Retriever::new(Corpus::sample_lectures()).unwrap();
    assert_eq!(retriever.len(), 3);

    let top = retriever.retrieve("What is the main purpose of TF-IDF in text mining?", 1);
    assert_eq!(top.len(), 1);
    assert!(retriever.corpus()[top[0].passage_id].contains("TF-IDF"));
}
