//! Abuse report handler

use axum::{extract::State, Json};
use bonheur_service::dto::AbuseReportResponse;
use bonheur_service::AbuseService;

use crate::extractors::{ContentRefPath, SnowflakePath};
use crate::response::{Accepted, ApiResult};
use crate::state::AppState;

/// Report a post or page as offensive
///
/// POST /abuse/{content_ref}
pub async fn report_abuse(
    State(state): State<AppState>,
    SnowflakePath(path): SnowflakePath<ContentRefPath>,
) -> ApiResult<Accepted<Json<AbuseReportResponse>>> {
    let service = AbuseService::new(state.service_context());
    let response = service.report(&path.content_ref).await?;
    Ok(Accepted(Json(response)))
}
