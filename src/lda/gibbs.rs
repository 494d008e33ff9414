// Collapsed Gibbs sampler for LDA.
//
// Token occurrences are expanded from the sparse matrix in row order and
// each gets a latent topic assignment. One sweep visits every occurrence:
// remove its contribution from the count tables, compute the conditional
//
//   p(t) ∝ (n_dk[d][t] + α) · (n_kw[t][w] + β) / (n_k[t] + β·V)
//
// sample a new topic from it, and add the counts back. The three tables are
// private to the run; callers only ever see the normalized distributions of
// the finished TopicModel.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::LdaConfig;
use crate::corpus::matrix::DocTermMatrix;
use crate::error::AnalysisError;
use crate::lda::model::TopicModel;

/// Mutable sampler state, scoped to a single LDA run.
pub struct GibbsSampler<'a> {
    dtm: &'a DocTermMatrix,
    cfg: LdaConfig,
    /// Token occurrences per document, as term indices in row order.
    docs: Vec<Vec<usize>>,
    /// Current topic assignment per occurrence, same shape as `docs`.
    assignments: Vec<Vec<usize>>,
    /// n_dk: tokens in document d assigned to topic k.
    doc_topic: Vec<Vec<u32>>,
    /// n_kw: occurrences of term w assigned to topic k.
    topic_term: Vec<Vec<u32>>,
    /// n_k: total tokens assigned to topic k.
    topic_total: Vec<u64>,
    rng: StdRng,
    sweeps_done: usize,
}

impl<'a> GibbsSampler<'a> {
    /// Validate inputs and assign every occurrence a uniform random topic.
    pub fn new(dtm: &'a DocTermMatrix, cfg: &LdaConfig) -> Result<Self, AnalysisError> {
        cfg.validate()?;
        dtm.check_dimensions()?;
        // DocTermMatrix::build never yields zero columns (a surviving
        // document has at least one term), so this only trips on a matrix
        // from some other constructor. The conditional divides by
        // (n_k + beta * V), which needs V > 0.
        if dtm.num_terms() == 0 {
            return Err(AnalysisError::EmptyVocabulary);
        }
        if dtm.num_docs() == 0 {
            return Err(AnalysisError::EmptyCorpus);
        }

        let k = cfg.topics;
        let n_docs = dtm.num_docs();
        let n_terms = dtm.num_terms();

        // Expand sparse rows back into occurrence sequences. Row order is
        // first-occurrence order, so this is deterministic.
        let docs: Vec<Vec<usize>> = dtm
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .flat_map(|&(term, count)| std::iter::repeat(term).take(count as usize))
                    .collect()
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let mut doc_topic = vec![vec![0u32; k]; n_docs];
        let mut topic_term = vec![vec![0u32; n_terms]; k];
        let mut topic_total = vec![0u64; k];

        let mut assignments: Vec<Vec<usize>> = Vec::with_capacity(n_docs);
        for (d, terms) in docs.iter().enumerate() {
            let mut z = Vec::with_capacity(terms.len());
            for &w in terms {
                let t = rng.random_range(0..k);
                doc_topic[d][t] += 1;
                topic_term[t][w] += 1;
                topic_total[t] += 1;
                z.push(t);
            }
            assignments.push(z);
        }

        let total_tokens: usize = docs.iter().map(Vec::len).sum();
        debug!(
            documents = n_docs,
            terms = n_terms,
            tokens = total_tokens,
            topics = k,
            seed = cfg.seed,
            "Initialized Gibbs sampler"
        );

        Ok(Self {
            dtm,
            cfg: cfg.clone(),
            docs,
            assignments,
            doc_topic,
            topic_term,
            topic_total,
            rng,
            sweeps_done: 0,
        })
    }

    /// One full sweep over every token occurrence.
    fn sweep(&mut self) {
        let k = self.cfg.topics;
        let vb = self.cfg.beta * self.dtm.num_terms() as f64;
        let mut weights = vec![0.0f64; k];

        for d in 0..self.docs.len() {
            for pos in 0..self.docs[d].len() {
                let w = self.docs[d][pos];
                let old = self.assignments[d][pos];

                self.doc_topic[d][old] -= 1;
                self.topic_term[old][w] -= 1;
                self.topic_total[old] -= 1;

                let mut total = 0.0;
                for (t, weight) in weights.iter_mut().enumerate() {
                    let left = f64::from(self.doc_topic[d][t]) + self.cfg.alpha;
                    let num = f64::from(self.topic_term[t][w]) + self.cfg.beta;
                    let den = self.topic_total[t] as f64 + vb;
                    *weight = left * num / den;
                    total += *weight;
                }
                // α, β > 0 guarantee strictly positive weights.
                debug_assert!(total.is_finite() && total > 0.0);

                // Inverse-CDF draw from the unnormalized conditional.
                let mut u = self.rng.random::<f64>() * total;
                let mut new = k - 1;
                for (t, &weight) in weights.iter().enumerate() {
                    if u < weight {
                        new = t;
                        break;
                    }
                    u -= weight;
                }

                self.assignments[d][pos] = new;
                self.doc_topic[d][new] += 1;
                self.topic_term[new][w] += 1;
                self.topic_total[new] += 1;
            }
        }

        self.sweeps_done += 1;
    }

    /// Run the configured number of sweeps and normalize the counts into a
    /// [`TopicModel`].
    ///
    /// `stop` is a cooperative cancellation flag checked between sweeps:
    /// once set, the current sweep finishes and the model is finalized from
    /// whatever has been sampled so far.
    pub fn run(mut self, stop: Option<&AtomicBool>) -> TopicModel {
        for sweep in 0..self.cfg.sweeps {
            if let Some(flag) = stop {
                if flag.load(Ordering::Relaxed) {
                    info!(
                        completed = sweep,
                        requested = self.cfg.sweeps,
                        "Stop requested, finalizing early"
                    );
                    break;
                }
            }
            self.sweep();
            if (sweep + 1) % 50 == 0 {
                debug!(sweep = sweep + 1, total = self.cfg.sweeps, "Gibbs sweep");
            }
        }
        self.finalize()
    }

    /// Normalize the count tables into proper distributions:
    /// φ[t][w] = (n_kw + β) / (n_k + β·V) and
    /// γ[d][t] = (n_dk + α) / (N_d + α·k).
    fn finalize(self) -> TopicModel {
        let k = self.cfg.topics;
        let v = self.dtm.num_terms();
        let vb = self.cfg.beta * v as f64;

        let beta: Vec<Vec<f64>> = (0..k)
            .map(|t| {
                let den = self.topic_total[t] as f64 + vb;
                (0..v)
                    .map(|w| (f64::from(self.topic_term[t][w]) + self.cfg.beta) / den)
                    .collect()
            })
            .collect();

        let gamma: Vec<Vec<f64>> = (0..self.docs.len())
            .map(|d| {
                let den = self.docs[d].len() as f64 + self.cfg.alpha * k as f64;
                (0..k)
                    .map(|t| (f64::from(self.doc_topic[d][t]) + self.cfg.alpha) / den)
                    .collect()
            })
            .collect();

        info!(
            sweeps = self.sweeps_done,
            topics = k,
            "LDA estimation finished"
        );

        TopicModel::new(
            beta,
            gamma,
            self.dtm.vocab.clone(),
            self.dtm.doc_ids().to_vec(),
            self.sweeps_done,
        )
    }
}

/// Convenience entry point: build the sampler and run it to completion.
pub fn fit(dtm: &DocTermMatrix, cfg: &LdaConfig) -> Result<TopicModel, AnalysisError> {
    Ok(GibbsSampler::new(dtm, cfg)?.run(None))
}
