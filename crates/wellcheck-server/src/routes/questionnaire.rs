use axum::extract::State;
use axum::response::Html;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn show_questionnaire(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.renderer.render_questionnaire()?))
}
