//! Post handlers
//!
//! Endpoints for sharing, reading, voting on and commenting posts.

use axum::{extract::State, Json};
use bonheur_service::dto::{
    ActionResponse, CreateCommentRequest, CreatePostRequest, PostListResponse, PostResponse,
};
use bonheur_service::{PostService, ReportService};

use crate::extractors::{PostIdPath, SnowflakePath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List every post with site totals
///
/// GET /posts
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<PostListResponse>> {
    let service = ReportService::new(state.service_context());
    let response = service.list_posts().await?;
    Ok(Json(response))
}

/// Share a new post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<ActionResponse<PostResponse>>>> {
    let service = PostService::new(state.service_context());
    let response = service.create_post(request).await?;
    Ok(Created(Json(response)))
}

/// Get a post with its comments
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    SnowflakePath(path): SnowflakePath<PostIdPath>,
) -> ApiResult<Json<PostResponse>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let response = service.get_post(post_id).await?;
    Ok(Json(response))
}

/// Vote for a post
///
/// POST /posts/{post_id}/votes
pub async fn vote(
    State(state): State<AppState>,
    SnowflakePath(path): SnowflakePath<PostIdPath>,
) -> ApiResult<Json<ActionResponse<PostResponse>>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let response = service.vote(post_id).await?;
    Ok(Json(response))
}

/// Comment on a post
///
/// POST /posts/{post_id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    SnowflakePath(path): SnowflakePath<PostIdPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<ActionResponse<PostResponse>>>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let response = service.add_comment(post_id, request).await?;
    Ok(Created(Json(response)))
}
