// Wed Jan 21 2026 - Alex

pub mod weights;
pub mod scorer;
pub mod ranking;

pub use weights::ScoringWeights;
pub use scorer::{evaluate, score, CompositeScorer, Evaluation, SubScores};
pub use ranking::{best, rank, Confidence, Decision, ScoredResult};
