// Latent Dirichlet Allocation by collapsed Gibbs sampling.
//
// This is the one genuinely algorithmic part of the pipeline. The sampler
// owns three mutable count tables for the duration of a run; the fitted
// model exposes only normalized, read-only distributions.

pub mod gibbs;
pub mod model;

pub use gibbs::{fit, GibbsSampler};
pub use model::{TopicModel, TopicSummary};
