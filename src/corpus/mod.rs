// Corpus construction: documents in, frozen vocabulary and sparse counts out.

pub mod document;
pub mod matrix;
pub mod tokenize;

pub use document::Document;
pub use matrix::{DocTermMatrix, Vocabulary};
