// Failure taxonomy for the analysis pipeline.
//
// Every invalid input is reported as a typed error, never coerced into a
// "close enough" run: a topic count of 1 is an error, not a silent 2.

use thiserror::Error;

/// Errors produced by corpus construction and the LDA estimator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    /// Every document in the corpus was empty after tokenization,
    /// or the corpus contained no documents at all.
    #[error("corpus yielded no tokens, nothing to analyze")]
    EmptyCorpus,

    /// The document-term matrix has zero columns.
    #[error("vocabulary is empty, the matrix has no term columns")]
    EmptyVocabulary,

    /// LDA needs at least two topics to be meaningful.
    #[error("topic count must be at least 2, got {0}")]
    InvalidTopicCount(usize),

    /// A Dirichlet smoothing hyperparameter was zero, negative, or non-finite.
    #[error("hyperparameter {name} must be a finite positive number, got {value}")]
    InvalidHyperparameter { name: &'static str, value: f64 },

    /// The matrix references term indices outside the vocabulary, or its
    /// row count disagrees with the document id list.
    #[error("matrix dimensions disagree: {detail}")]
    MismatchedDimensions { detail: String },
}
