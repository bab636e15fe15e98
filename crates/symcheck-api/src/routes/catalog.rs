use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use symcheck_catalog::{CatalogError, Condition};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ConditionSummary {
    name: String,
    specialist: String,
    minor: bool,
}

pub async fn list_conditions(State(state): State<AppState>) -> Json<Vec<ConditionSummary>> {
    let conditions = state
        .catalog
        .conditions()
        .iter()
        .map(|c| ConditionSummary {
            name: c.name().to_string(),
            specialist: c.specialist().to_string(),
            minor: c.is_minor(),
        })
        .collect();
    Json(conditions)
}

pub async fn get_condition(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Condition>, ApiError> {
    let condition = state
        .catalog
        .condition(&name)
        .cloned()
        .ok_or(CatalogError::UnknownCondition(name))?;
    Ok(Json(condition))
}

/// Every known symptom, sorted, for building a pick list.
pub async fn list_symptoms(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.all_symptoms())
}
