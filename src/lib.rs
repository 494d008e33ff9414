// Tealeaf: topic and sentiment analytics for document corpora
//
// This is the library root. Each module corresponds to one stage of the
// document-to-topic pipeline: corpus construction, LDA estimation, and
// the read-only lexical analytics that branch off the same token counts.

pub mod analytics;
pub mod config;
pub mod corpus;
pub mod error;
pub mod lda;
pub mod output;
