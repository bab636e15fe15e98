use serde::Serialize;
use ts_rs::TS;

use symcheck_catalog::{CatalogError, ConditionCatalog};

use crate::input::SymptomInput;
use crate::scoring::{ScoreResult, predict};

/// Everything a front end needs to render a result.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct PredictionResult {
    pub best_condition: String,
    pub scores: ScoreResult,
    pub specialist: String,
    /// Minor conditions can usually be handled over telemedicine.
    pub is_minor: bool,
}

impl PredictionResult {
    pub fn best_score(&self) -> f64 {
        self.scores.get(&self.best_condition).unwrap_or_default()
    }
}

/// Score `input` and attach the catalog's specialist and severity for the
/// best match.
pub fn diagnose(
    input: &SymptomInput,
    catalog: &ConditionCatalog,
) -> Result<PredictionResult, CatalogError> {
    let (best_condition, scores) = predict(input.as_slice(), catalog)?;
    Ok(PredictionResult {
        specialist: catalog.specialist_for(&best_condition).to_string(),
        is_minor: catalog.is_minor(&best_condition),
        best_condition,
        scores,
    })
}
