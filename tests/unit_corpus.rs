// Unit tests for corpus construction through the public API.
//
// Covers the tokenizer's output contract, the row-sum invariant linking
// the tokenizer to the matrix, and vocabulary determinism.

use tealeaf::corpus::document::Document;
use tealeaf::corpus::matrix::DocTermMatrix;
use tealeaf::corpus::tokenize::{tokens, StopWords};
use tealeaf::error::AnalysisError;

// ============================================================
// Tokenizer output contract
// ============================================================

#[test]
fn tokenizer_output_is_lowercase_digitless_and_unstopped() {
    let stop = StopWords::english();
    let text = "The Committee DECIDED to raise the target range by 75bps in 2022, \
                citing CPI2021 revisions and q3-2024 projections!";
    for tok in tokens(text, &stop) {
        assert!(!tok.is_empty());
        assert_eq!(tok, tok.to_lowercase(), "token not lowercase: {tok}");
        assert!(
            tok.chars().all(|c| !c.is_numeric()),
            "token contains digits: {tok}"
        );
        assert!(
            tok.chars().all(char::is_alphanumeric),
            "token contains punctuation: {tok}"
        );
        assert!(!stop.contains(&tok), "stop word leaked through: {tok}");
    }
}

#[test]
fn mixed_alphanumeric_tokens_keep_their_letters() {
    let stop = StopWords::default();
    let toks: Vec<_> = tokens("cpi2021 g7 2024outlook", &stop).collect();
    assert_eq!(toks, vec!["cpi", "g", "outlook"]);
}

// ============================================================
// Matrix row sums and determinism
// ============================================================

#[test]
fn row_sums_equal_surviving_token_counts() {
    let stop = StopWords::new(["the", "of", "and"]);
    let docs = vec![
        Document::new("s1", "The pace of inflation and the pace of hiring diverged."),
        Document::new("s2", "Growth of output slowed; the committee held rates steady."),
    ];
    let dtm = DocTermMatrix::build(&docs, &stop).unwrap();

    for (d, doc) in docs.iter().enumerate() {
        let survivors = tokens(&doc.text, &stop).count() as u64;
        assert_eq!(dtm.row_total(d), survivors, "row {d} sum mismatch");
    }
}

#[test]
fn vocabulary_indices_are_first_seen_order() {
    let docs = vec![
        Document::new("a", "delta alpha delta"),
        Document::new("b", "alpha omega"),
    ];
    let dtm = DocTermMatrix::build(&docs, &StopWords::default()).unwrap();
    assert_eq!(dtm.vocab.get("delta"), Some(0));
    assert_eq!(dtm.vocab.get("alpha"), Some(1));
    assert_eq!(dtm.vocab.get("omega"), Some(2));
    assert_eq!(dtm.vocab.terms(), &["delta", "alpha", "omega"]);
}

#[test]
fn empty_corpus_is_a_typed_error() {
    assert_eq!(
        DocTermMatrix::build(&[], &StopWords::default()).unwrap_err(),
        AnalysisError::EmptyCorpus
    );

    let all_stop = StopWords::new(["only", "stop", "words"]);
    let docs = vec![Document::new("a", "only stop words")];
    assert_eq!(
        DocTermMatrix::build(&docs, &all_stop).unwrap_err(),
        AnalysisError::EmptyCorpus
    );
}

#[test]
fn dropped_documents_are_counted_and_rows_stay_aligned() {
    let docs = vec![
        Document::new("real", "tightening cycle continues"),
        Document::new("blank", "2024 2025 2026"),
        Document::new("also-real", "easing begins"),
    ];
    let dtm = DocTermMatrix::build(&docs, &StopWords::default()).unwrap();
    assert_eq!(dtm.dropped, 1);
    assert_eq!(dtm.num_docs(), 2);
    assert_eq!(
        dtm.doc_ids(),
        &["real".to_string(), "also-real".to_string()]
    );
}
