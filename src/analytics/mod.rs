// Read-only lexical analytics over the document-term matrix.
//
// These consume the same counts the LDA branch does, but never mutate
// anything; each function is a pure aggregation.

pub mod frequency;
pub mod sentiment;
pub mod trends;

pub use frequency::{corpus_frequencies, document_frequencies, TermCount};
pub use sentiment::{score_documents, DocumentSentiment, Lexicon, Polarity};
pub use trends::{watch_term_series, TrendPoint};
