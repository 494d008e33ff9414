// Term frequency ranking.

use serde::Serialize;

use crate::corpus::matrix::DocTermMatrix;

/// One ranked term with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: u64,
}

/// Corpus-wide term counts, descending. Equal counts rank in vocabulary
/// insertion order, so the ranking is stable across runs.
pub fn corpus_frequencies(dtm: &DocTermMatrix) -> Vec<TermCount> {
    let mut totals = vec![0u64; dtm.num_terms()];
    for row in dtm.rows() {
        for &(term, count) in row {
            totals[term] += u64::from(count);
        }
    }
    rank(dtm, totals)
}

/// Term counts for a single document row, descending with the same
/// tie-break as [`corpus_frequencies`].
pub fn document_frequencies(dtm: &DocTermMatrix, doc: usize) -> Vec<TermCount> {
    let mut totals = vec![0u64; dtm.num_terms()];
    for &(term, count) in dtm.row(doc) {
        totals[term] += u64::from(count);
    }
    rank(dtm, totals)
}

fn rank(dtm: &DocTermMatrix, totals: Vec<u64>) -> Vec<TermCount> {
    let mut ranked: Vec<(usize, u64)> = totals
        .into_iter()
        .enumerate()
        .filter(|&(_, c)| c > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .map(|(term, count)| TermCount {
            term: dtm.vocab.term(term).to_string(),
            count,
        })
        .collect()
}
