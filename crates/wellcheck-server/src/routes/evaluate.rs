use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use wellcheck_instruments::scoring::{AssessmentResult, DomainResponses, evaluate};
use wellcheck_instruments::validation::{ValidationIssue, validate_responses};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct EvaluateResponse {
    pub result: AssessmentResult,
    /// Out-of-range answers. Scoring ran on them unchanged.
    pub issues: Vec<ValidationIssue>,
}

pub async fn evaluate_responses(
    body: Result<Json<DomainResponses>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    let Json(responses) = body?;

    let issues = validate_responses(&responses);
    if !issues.is_empty() {
        tracing::warn!(issues = issues.len(), "answers outside expected range");
    }

    Ok(Json(EvaluateResponse {
        result: evaluate(&responses),
        issues,
    }))
}
