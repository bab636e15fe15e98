//! symcheck-scoring
//!
//! Turns a normalized list of symptoms into a per-condition match score and
//! a single best guess. Pure and synchronous: no I/O, no shared mutable state.
//!
//! A condition's score is the share of *its* symptoms present in the input
//! (recall), not the share of the input that matched. Conditions with few
//! symptoms therefore score high on partial matches; this asymmetry is
//! intentional and kept for compatibility with existing results.

pub mod input;
pub mod prediction;
pub mod scoring;

pub use input::SymptomInput;
pub use prediction::{PredictionResult, diagnose};
pub use scoring::{ConditionScore, ScoreResult, predict, score_condition};
pub use symcheck_catalog::CatalogError;
