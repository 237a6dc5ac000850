//! Home page handler

use axum::{extract::State, Json};
use bonheur_service::dto::HomeResponse;
use bonheur_service::ReportService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Newest posts, newest comments and site totals
///
/// GET /home
pub async fn get_home(State(state): State<AppState>) -> ApiResult<Json<HomeResponse>> {
    let service = ReportService::new(state.service_context());
    let response = service.home().await?;
    Ok(Json(response))
}
