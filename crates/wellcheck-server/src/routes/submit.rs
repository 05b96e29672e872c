use std::collections::HashMap;

use axum::Form;
use axum::extract::State;
use axum::response::Html;

use wellcheck_export::view::ResultView;
use wellcheck_instruments::scoring::evaluate;
use wellcheck_instruments::validation::validate_responses;

use crate::error::ApiError;
use crate::form::responses_from_form;
use crate::state::AppState;

/// Score a submitted questionnaire and render the result page.
///
/// Out-of-range answers are logged and scored as given.
pub async fn submit(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Html<String>, ApiError> {
    let responses = responses_from_form(&fields);

    let issues = validate_responses(&responses);
    if !issues.is_empty() {
        tracing::warn!(
            issues = issues.len(),
            first = %issues[0],
            "answers outside expected range"
        );
    }

    let result = evaluate(&responses);
    tracing::info!(
        wellness_band = result.wellness_band.label(),
        urgent = result.urgent,
        "assessment scored"
    );

    let view = ResultView::new(&result, &state.crisis, jiff::Timestamp::now());
    Ok(Html(state.renderer.render_result(&view)?))
}
