use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use wellcheck_instruments::domains::{DomainId, DomainSpec, all_domains, domain};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct DomainSummary {
    id: DomainId,
    name: String,
    question_count: usize,
    max_score: i64,
}

#[derive(Serialize)]
pub struct DomainDetail {
    id: DomainId,
    name: String,
    questions: Vec<String>,
    max_score: i64,
    /// Upper bounds of Low, Mild and Moderate.
    thresholds: [i64; 3],
    urgent_at: Option<i64>,
}

impl From<&DomainSpec> for DomainSummary {
    fn from(spec: &DomainSpec) -> Self {
        Self {
            id: spec.id,
            name: spec.name.to_string(),
            question_count: spec.question_count(),
            max_score: spec.max_score,
        }
    }
}

pub async fn list_domains() -> Json<Vec<DomainSummary>> {
    Json(all_domains().iter().map(DomainSummary::from).collect())
}

pub async fn get_domain_detail(Path(id): Path<String>) -> Result<Json<DomainDetail>, ApiError> {
    let spec = domain(id.parse::<DomainId>()?);

    Ok(Json(DomainDetail {
        id: spec.id,
        name: spec.name.to_string(),
        questions: spec.questions.iter().map(|q| q.to_string()).collect(),
        max_score: spec.max_score,
        thresholds: [spec.bands.low, spec.bands.mild, spec.bands.moderate],
        urgent_at: spec.urgent_at,
    }))
}
