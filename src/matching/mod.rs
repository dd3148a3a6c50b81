// src/matching/mod.rs
//! Multi-stage posting pipeline: criteria filter, recency ranking and
//! skill-overlap scoring.

pub mod filter;
pub mod ranker;
pub mod scorer;

pub use filter::filter_postings;
pub use ranker::rank_by_recency;
pub use scorer::{candidate_skill_set, score_postings};
