//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::notice::Notice;

// ============================================================================
// Common Response Types
// ============================================================================

/// Result of a mutating operation, with the one-shot notice to display
#[derive(Debug, Serialize)]
pub struct ActionResponse<T> {
    pub data: T,
    pub notice: Notice,
}

impl<T> ActionResponse<T> {
    pub fn new(data: T, notice: Notice) -> Self {
        Self { data, notice }
    }
}

// ============================================================================
// Post Responses
// ============================================================================

/// A comment as shown under its post
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A post with its counters and comments in chronological order
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub vote_count: i64,
    pub comment_count: i64,
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Listing Responses
// ============================================================================

/// Site-wide counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TotalsResponse {
    pub votes: i64,
    pub comments: i64,
}

/// Home page: newest posts, newest comments and site totals
#[derive(Debug, Clone, Serialize)]
pub struct HomeResponse {
    pub recent_posts: Vec<PostResponse>,
    pub latest_comments: Vec<CommentResponse>,
    pub totals: TotalsResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

/// Every post, newest first, with site totals
#[derive(Debug, Clone, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub totals: TotalsResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

// ============================================================================
// Abuse Responses
// ============================================================================

/// Acknowledgement of an abuse report
#[derive(Debug, Clone, Serialize)]
pub struct AbuseReportResponse {
    pub content_ref: String,
    pub notice: Notice,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each collaborator
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
