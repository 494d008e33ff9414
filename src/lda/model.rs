// The fitted topic model: normalized, read-only distributions.

use serde::Serialize;

use crate::corpus::matrix::Vocabulary;

/// Output of one LDA run: per-topic term distributions ("beta") and
/// per-document topic distributions ("gamma"), plus the frozen vocabulary
/// and row-aligned document ids they index into.
#[derive(Debug, Clone, Serialize)]
pub struct TopicModel {
    beta: Vec<Vec<f64>>,
    gamma: Vec<Vec<f64>>,
    vocab: Vocabulary,
    doc_ids: Vec<String>,
    sweeps_completed: usize,
}

/// One topic rendered for display or serialization: its top terms and its
/// share of the corpus-wide gamma mass.
#[derive(Debug, Clone, Serialize)]
pub struct TopicSummary {
    pub topic: usize,
    /// (term, beta) pairs, descending by beta.
    pub terms: Vec<(String, f64)>,
    /// Mean gamma across documents, i.e. how much of the corpus this topic covers.
    pub weight: f64,
}

impl TopicModel {
    pub(crate) fn new(
        beta: Vec<Vec<f64>>,
        gamma: Vec<Vec<f64>>,
        vocab: Vocabulary,
        doc_ids: Vec<String>,
        sweeps_completed: usize,
    ) -> Self {
        Self {
            beta,
            gamma,
            vocab,
            doc_ids,
            sweeps_completed,
        }
    }

    /// Number of topics (k).
    pub fn num_topics(&self) -> usize {
        self.beta.len()
    }

    /// Per-topic term distributions; row t sums to 1.
    pub fn beta(&self) -> &[Vec<f64>] {
        &self.beta
    }

    /// Per-document topic distributions; row d sums to 1 and is aligned
    /// with [`TopicModel::doc_ids`].
    pub fn gamma(&self) -> &[Vec<f64>] {
        &self.gamma
    }

    pub fn doc_ids(&self) -> &[String] {
        &self.doc_ids
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Sweeps actually run (may be fewer than configured if stopped early).
    pub fn sweeps_completed(&self) -> usize {
        self.sweeps_completed
    }

    /// The `n` highest-beta terms of one topic, descending. Ties break by
    /// vocabulary insertion order so the ranking is reproducible.
    pub fn top_terms(&self, topic: usize, n: usize) -> Vec<(String, f64)> {
        let mut ranked: Vec<(usize, f64)> = self.beta[topic].iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
            .into_iter()
            .map(|(w, p)| (self.vocab.term(w).to_string(), p))
            .collect()
    }

    /// ln(beta_a / beta_b) for one term across two topics.
    ///
    /// Follows IEEE float rules rather than erroring: a zero beta in the
    /// denominator topic gives +inf (or NaN for 0/0). With β > 0 smoothing
    /// every beta is strictly positive, so the sentinels are unreachable for
    /// a fitted model; they only arise for hand-built distributions.
    ///
    /// Returns None when the term is not in the vocabulary.
    pub fn log_ratio(&self, topic_a: usize, topic_b: usize, term: &str) -> Option<f64> {
        let w = self.vocab.get(term)?;
        Some((self.beta[topic_a][w] / self.beta[topic_b][w]).ln())
    }

    /// Render every topic as a [`TopicSummary`] with its top `n` terms,
    /// sorted by corpus weight descending.
    pub fn summaries(&self, n: usize) -> Vec<TopicSummary> {
        let docs = self.gamma.len().max(1) as f64;
        let mut out: Vec<TopicSummary> = (0..self.num_topics())
            .map(|t| {
                let weight = self.gamma.iter().map(|row| row[t]).sum::<f64>() / docs;
                TopicSummary {
                    topic: t,
                    terms: self.top_terms(t, n),
                    weight,
                }
            })
            .collect();
        out.sort_by(|a, b| b.weight.total_cmp(&a.weight).then(a.topic.cmp(&b.topic)));
        out
    }
}
