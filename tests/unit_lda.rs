// Unit tests for the LDA estimator through the public API.
//
// Covers the error taxonomy at the fit boundary, distribution propriety,
// seed determinism, and top-term ranking stability.

use tealeaf::config::LdaConfig;
use tealeaf::corpus::document::Document;
use tealeaf::corpus::matrix::DocTermMatrix;
use tealeaf::corpus::tokenize::StopWords;
use tealeaf::error::AnalysisError;
use tealeaf::lda;

fn statements() -> DocTermMatrix {
    let docs = vec![
        Document::new("2023-03", "inflation remains elevated and the committee raised rates"),
        Document::new("2023-06", "inflation moderated while hiring stayed strong"),
        Document::new("2023-09", "rates held steady as growth cooled"),
        Document::new("2023-12", "the committee signaled cuts as inflation eased"),
    ];
    DocTermMatrix::build(&docs, &StopWords::new(["and", "the", "as", "while"])).unwrap()
}

fn config(topics: usize, sweeps: usize, seed: u64) -> LdaConfig {
    LdaConfig {
        topics,
        alpha: 0.1,
        beta: 0.1,
        sweeps,
        seed,
    }
}

// ============================================================
// Error taxonomy at the fit boundary
// ============================================================

#[test]
fn k_of_one_fails_with_invalid_topic_count() {
    let err = lda::fit(&statements(), &config(1, 10, 0)).unwrap_err();
    assert_eq!(err, AnalysisError::InvalidTopicCount(1));
}

#[test]
fn non_positive_hyperparameters_fail_fast() {
    let dtm = statements();

    let zero_beta = LdaConfig {
        beta: 0.0,
        ..config(2, 10, 0)
    };
    assert!(matches!(
        lda::fit(&dtm, &zero_beta),
        Err(AnalysisError::InvalidHyperparameter { name: "beta", .. })
    ));

    let negative_alpha = LdaConfig {
        alpha: -1.0,
        ..config(2, 10, 0)
    };
    assert!(matches!(
        lda::fit(&dtm, &negative_alpha),
        Err(AnalysisError::InvalidHyperparameter { name: "alpha", .. })
    ));
}

// ============================================================
// Distribution propriety
// ============================================================

#[test]
fn beta_and_gamma_rows_sum_to_one() {
    let dtm = statements();
    let model = lda::fit(&dtm, &config(4, 100, 3)).unwrap();

    assert_eq!(model.num_topics(), 4);
    assert_eq!(model.beta().len(), 4);
    assert_eq!(model.gamma().len(), dtm.num_docs());

    for (t, row) in model.beta().iter().enumerate() {
        assert_eq!(row.len(), dtm.num_terms());
        let sum: f64 = row.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6, "beta row {t} sums to {sum}");
    }
    for (d, row) in model.gamma().iter().enumerate() {
        let sum: f64 = row.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6, "gamma row {d} sums to {sum}");
    }
}

// ============================================================
// Determinism
// ============================================================

#[test]
fn identical_seeds_reproduce_the_model_bit_for_bit() {
    let dtm = statements();
    let a = lda::fit(&dtm, &config(3, 60, 1234)).unwrap();
    let b = lda::fit(&dtm, &config(3, 60, 1234)).unwrap();
    assert_eq!(a.beta(), b.beta());
    assert_eq!(a.gamma(), b.gamma());
    assert_eq!(a.doc_ids(), b.doc_ids());
}

// ============================================================
// Top terms
// ============================================================

#[test]
fn top_terms_are_descending_and_capped() {
    let dtm = statements();
    let model = lda::fit(&dtm, &config(2, 60, 9)).unwrap();

    for t in 0..model.num_topics() {
        let top = model.top_terms(t, 5);
        assert!(top.len() <= 5);
        for pair in top.windows(2) {
            assert!(pair[0].1 >= pair[1].1, "top terms not descending");
        }
    }
}

#[test]
fn gamma_rows_map_back_to_document_ids() {
    let dtm = statements();
    let model = lda::fit(&dtm, &config(2, 30, 9)).unwrap();
    assert_eq!(model.doc_ids()[0], "2023-03");
    assert_eq!(model.doc_ids().len(), model.gamma().len());
}
