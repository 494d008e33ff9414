// Lexicon-based sentiment aggregation.
//
// The lexicon is supplied by the caller (Loughran-McDonald, Bing Liu, or any
// term -> polarity list); the core only joins counts against it by exact
// term match. Terms absent from the lexicon simply contribute nothing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corpus::matrix::DocTermMatrix;

/// Polarity label for a lexicon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

/// Read-only term -> polarity mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon(HashMap<String, Polarity>);

impl Lexicon {
    /// Build from (term, polarity) pairs. Terms are lowercased to match the
    /// normalized token stream.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Polarity)>,
        S: AsRef<str>,
    {
        Self(
            entries
                .into_iter()
                .map(|(t, p)| (t.as_ref().to_lowercase(), p))
                .collect(),
        )
    }

    pub fn get(&self, term: &str) -> Option<Polarity> {
        self.0.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Signed sentiment for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSentiment {
    pub doc_id: String,
    /// Token occurrences matching a positive lexicon entry.
    pub positive: u64,
    /// Token occurrences matching a negative lexicon entry.
    pub negative: u64,
    /// positive − negative.
    pub score: i64,
}

/// Per-document signed sentiment across the whole matrix, in row order.
pub fn score_documents(dtm: &DocTermMatrix, lexicon: &Lexicon) -> Vec<DocumentSentiment> {
    let scores: Vec<DocumentSentiment> = dtm
        .doc_ids()
        .iter()
        .enumerate()
        .map(|(d, id)| {
            let mut positive = 0u64;
            let mut negative = 0u64;
            for &(term, count) in dtm.row(d) {
                match lexicon.get(dtm.vocab.term(term)) {
                    Some(Polarity::Positive) => positive += u64::from(count),
                    Some(Polarity::Negative) => negative += u64::from(count),
                    None => {}
                }
            }
            DocumentSentiment {
                doc_id: id.clone(),
                positive,
                negative,
                score: positive as i64 - negative as i64,
            }
        })
        .collect();

    debug!(
        documents = scores.len(),
        lexicon_terms = lexicon.len(),
        "Scored document sentiment"
    );
    scores
}
