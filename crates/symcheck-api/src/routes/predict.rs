use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use symcheck_scoring::{ConditionScore, PredictionResult, SymptomInput, diagnose};

use crate::error::ApiError;
use crate::state::AppState;

/// Symptoms as picked from a list, typed as comma-separated text, or both.
#[derive(Debug, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct PredictResponse {
    #[serde(flatten)]
    pub prediction: PredictionResult,
    pub ranked: Vec<ConditionScore>,
    pub telemedicine_suggested: bool,
}

pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(req) = body?;
    let mut input = SymptomInput::from_selections(&req.symptoms);
    if let Some(text) = &req.text {
        input.extend(SymptomInput::parse(text));
    }

    let prediction = diagnose(&input, &state.catalog)?;
    tracing::info!(
        symptoms = input.len(),
        best_condition = %prediction.best_condition,
        score = prediction.best_score(),
        "prediction served"
    );

    Ok(Json(PredictResponse {
        ranked: prediction.scores.ranked(),
        telemedicine_suggested: prediction.is_minor,
        prediction,
    }))
}
