// Unit tests for TF-IDF vectorization over the built-in demo corpus.
//
// The expected numbers come from scikit-learn's TfidfVectorizer with default
// settings on the same four sentences: smoothed IDF, raw term counts, and
// L2-normalized rows.

use textsim::corpus::demo_corpus;
use textsim::tfidf::vectorizer::TfidfVectorizer;

// ============================================================
// Shape and vocabulary
// ============================================================

#[test]
fn demo_matrix_shape_is_4_by_11() {
    let matrix = TfidfVectorizer::default()
        .fit_transform(&demo_corpus())
        .unwrap();
    assert_eq!(matrix.shape(), (4, 11));
}

#[test]
fn demo_vocabulary_matches_sklearn_feature_names() {
    let matrix = TfidfVectorizer::default()
        .fit_transform(&demo_corpus())
        .unwrap();
    assert_eq!(
        matrix.vocabulary,
        vec![
            "blue", "bright", "can", "in", "is", "see", "shining", "sky", "sun", "the", "we"
        ]
    );
}

#[test]
fn row_count_equals_document_count() {
    for n in 1..=4 {
        let docs: Vec<String> = demo_corpus().into_iter().take(n).collect();
        let matrix = TfidfVectorizer::default().fit_transform(&docs).unwrap();
        assert_eq!(matrix.shape().0, n);
    }
}

// ============================================================
// Weighting invariants
// ============================================================

#[test]
fn every_row_is_unit_length() {
    let matrix = TfidfVectorizer::default()
        .fit_transform(&demo_corpus())
        .unwrap();
    for row in &matrix.rows {
        let norm: f64 = row.iter().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
    }
}

#[test]
fn all_weights_are_non_negative() {
    let matrix = TfidfVectorizer::default()
        .fit_transform(&demo_corpus())
        .unwrap();
    for row in &matrix.rows {
        assert!(row.iter().all(|&w| w >= 0.0));
    }
}

#[test]
fn rare_term_outweighs_common_term_in_same_document() {
    // In document 0 ("The sky is blue"), "blue" appears nowhere else while
    // "the" appears everywhere — IDF must rank "blue" higher.
    let matrix = TfidfVectorizer::default()
        .fit_transform(&demo_corpus())
        .unwrap();
    let row = matrix.row(0).unwrap();
    let col = |term: &str| matrix.vocabulary.iter().position(|t| t == term).unwrap();
    assert!(
        row[col("blue")] > row[col("the")],
        "Corpus-unique 'blue' should outweigh ubiquitous 'the'"
    );
}

#[test]
fn repeated_term_gets_higher_weight() {
    // "sun" appears twice in document 3, "bright" once; same IDF class
    // doesn't apply (df differs), but tf=2 with df=3 still beats tf=1 df=3.
    let matrix = TfidfVectorizer::default()
        .fit_transform(&demo_corpus())
        .unwrap();
    let row = matrix.row(3).unwrap();
    let col = |term: &str| matrix.vocabulary.iter().position(|t| t == term).unwrap();
    assert!(row[col("sun")] > row[col("bright")]);
}

// ============================================================
// Stop words and error paths
// ============================================================

#[test]
fn stop_word_removal_drops_function_words() {
    let matrix = TfidfVectorizer {
        remove_stop_words: true,
    }
    .fit_transform(&demo_corpus())
    .unwrap();
    for term in ["the", "is", "in", "we", "can"] {
        assert!(
            !matrix.vocabulary.iter().any(|t| t == term),
            "Stop word '{term}' should not be in the vocabulary"
        );
    }
    // Content words survive
    for term in ["sky", "sun", "blue", "bright"] {
        assert!(
            matrix.vocabulary.iter().any(|t| t == term),
            "Content word '{term}' should remain"
        );
    }
}

#[test]
fn empty_corpus_is_an_error() {
    let result = TfidfVectorizer::default().fit_transform(&[]);
    assert!(result.is_err());
}

#[test]
fn corpus_with_no_tokens_is_an_error() {
    let docs = vec!["...".to_string(), "a b c".to_string()];
    // Single-letter tokens are dropped by the token pattern
    let result = TfidfVectorizer::default().fit_transform(&docs);
    assert!(result.is_err());
}
