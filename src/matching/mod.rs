//! Text normalization, similarity, and candidate scoring.

pub mod normalize;
pub mod scorer;
pub mod similarity;

pub use normalize::{file_stem, normalize_key};
pub use scorer::{CandidateScorer, QueryProfile, ScoringWeights};
pub use similarity::{platform_similarity, sequence_ratio};
