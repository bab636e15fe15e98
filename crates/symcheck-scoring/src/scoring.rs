use std::collections::HashSet;

use serde::Serialize;
use ts_rs::TS;

use symcheck_catalog::{CatalogError, Condition, ConditionCatalog};

/// Match score for a single condition, in `[0, 100]` with one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ConditionScore {
    pub condition: String,
    pub score: f64,
}

/// One score per catalog condition, in catalog order. Conditions that
/// matched nothing are present with `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ScoreResult(Vec<ConditionScore>);

impl ScoreResult {
    pub fn get(&self, condition: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|s| s.condition == condition)
            .map(|s| s.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConditionScore> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scores sorted highest first. The sort is stable, so equal scores
    /// stay in catalog order.
    pub fn ranked(&self) -> Vec<ConditionScore> {
        let mut ranked = self.0.clone();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

/// Percentage of `condition`'s symptoms present in `selected`, rounded to
/// one decimal place.
pub fn score_condition(selected: &HashSet<&str>, condition: &Condition) -> f64 {
    let matched = selected
        .iter()
        .filter(|s| condition.has_symptom(s))
        .count();
    // Condition guarantees at least one symptom.
    let ratio = matched as f64 / condition.symptoms().len() as f64;
    round_one_decimal(ratio * 100.0)
}

/// Score every condition and pick the best match.
///
/// `symptoms` must already be normalized (see [`crate::SymptomInput`]);
/// comparison is exact string equality and unknown symptoms never match.
/// When several conditions share the top score the first one in catalog
/// order wins, so the result is identical for identical inputs.
pub fn predict(
    symptoms: &[String],
    catalog: &ConditionCatalog,
) -> Result<(String, ScoreResult), CatalogError> {
    let selected: HashSet<&str> = symptoms.iter().map(String::as_str).collect();

    let mut scores = Vec::with_capacity(catalog.len());
    let mut best: Option<(&str, f64)> = None;
    for condition in catalog.conditions() {
        let score = score_condition(&selected, condition);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((condition.name(), score));
        }
        scores.push(ConditionScore {
            condition: condition.name().to_string(),
            score,
        });
    }

    let Some((best_condition, top)) = best else {
        return Err(CatalogError::EmptyCatalog);
    };

    tracing::debug!(
        inputs = symptoms.len(),
        best_condition,
        score = top,
        "symptoms scored"
    );

    Ok((best_condition.to_string(), ScoreResult(scores)))
}

/// Round to one decimal, halves to even: 6.25 becomes 6.2, 6.35 becomes 6.4.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
