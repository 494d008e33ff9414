// Vocabulary and the sparse document-term matrix.
//
// The vocabulary assigns dense indices in first-seen order, so a corpus
// processed twice in the same document order produces identical indices;
// nothing here depends on hash-map iteration order. Rows keep their term
// entries in first-occurrence order for the same reason.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::corpus::document::Document;
use crate::corpus::tokenize::{tokens, StopWords};
use crate::error::AnalysisError;

/// Bijective term <-> dense index map, frozen once the matrix is built.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Vocabulary {
    terms: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Look up a term's index, or assign the next free one.
    fn intern(&mut self, term: &str) -> usize {
        if let Some(&id) = self.index.get(term) {
            return id;
        }
        let id = self.terms.len();
        self.terms.push(term.to_string());
        self.index.insert(term.to_string(), id);
        id
    }

    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// The term at a dense index. Panics on out-of-range, which only happens
    /// if a matrix from a different vocabulary is mixed in.
    pub fn term(&self, id: usize) -> &str {
        &self.terms[id]
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in insertion (index) order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// One document's sparse counts: (term index, count) in first-occurrence order.
pub type Row = Vec<(usize, u32)>;

/// Sparse document-term matrix plus the frozen vocabulary behind it.
///
/// Rows correspond 1:1 to the surviving documents, in ingestion order;
/// documents that tokenized to nothing are dropped and tallied in `dropped`.
#[derive(Debug, Clone, Serialize)]
pub struct DocTermMatrix {
    pub vocab: Vocabulary,
    rows: Vec<Row>,
    doc_ids: Vec<String>,
    /// Documents excluded because they yielded zero tokens.
    pub dropped: usize,
}

impl DocTermMatrix {
    /// Tokenize every document and accumulate counts.
    ///
    /// Fails with [`AnalysisError::EmptyCorpus`] if no document survives.
    pub fn build(docs: &[Document], stop: &StopWords) -> Result<Self, AnalysisError> {
        let mut vocab = Vocabulary::default();
        let mut rows: Vec<Row> = Vec::new();
        let mut doc_ids = Vec::new();
        let mut dropped = 0usize;

        for doc in docs {
            let mut row: Row = Vec::new();
            // Position of each term within this row, so repeat occurrences
            // bump the existing entry instead of appending.
            let mut slot: HashMap<usize, usize> = HashMap::new();
            for term in tokens(&doc.text, stop) {
                let id = vocab.intern(&term);
                match slot.get(&id) {
                    Some(&i) => row[i].1 += 1,
                    None => {
                        slot.insert(id, row.len());
                        row.push((id, 1));
                    }
                }
            }
            if row.is_empty() {
                debug!(doc = %doc.id, "Document yielded no tokens, dropping");
                dropped += 1;
                continue;
            }
            rows.push(row);
            doc_ids.push(doc.id.clone());
        }

        if rows.is_empty() {
            return Err(AnalysisError::EmptyCorpus);
        }

        info!(
            documents = rows.len(),
            dropped,
            terms = vocab.len(),
            "Built document-term matrix"
        );

        Ok(Self {
            vocab,
            rows,
            doc_ids,
            dropped,
        })
    }

    /// Number of surviving documents (matrix rows).
    pub fn num_docs(&self) -> usize {
        self.rows.len()
    }

    /// Vocabulary size (matrix columns).
    pub fn num_terms(&self) -> usize {
        self.vocab.len()
    }

    /// Sparse counts for one document row.
    pub fn row(&self, doc: usize) -> &Row {
        &self.rows[doc]
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Ids of the surviving documents, row-aligned.
    pub fn doc_ids(&self) -> &[String] {
        &self.doc_ids
    }

    /// Total token occurrences in one row.
    pub fn row_total(&self, doc: usize) -> u64 {
        self.rows[doc].iter().map(|&(_, c)| u64::from(c)).sum()
    }

    /// Verify internal consistency before handing the matrix to an estimator:
    /// every term index must fall inside the vocabulary, and rows must stay
    /// aligned with the id list.
    pub fn check_dimensions(&self) -> Result<(), AnalysisError> {
        if self.rows.len() != self.doc_ids.len() {
            return Err(AnalysisError::MismatchedDimensions {
                detail: format!(
                    "{} rows but {} document ids",
                    self.rows.len(),
                    self.doc_ids.len()
                ),
            });
        }
        let v = self.vocab.len();
        for (d, row) in self.rows.iter().enumerate() {
            if let Some(&(t, _)) = row.iter().find(|&&(t, _)| t >= v) {
                return Err(AnalysisError::MismatchedDimensions {
                    detail: format!("row {d} references term {t} but vocabulary has {v} entries"),
                });
            }
        }
        Ok(())
    }
}
