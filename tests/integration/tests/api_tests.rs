//! API Integration Tests
//!
//! Every test spawns its own server on in-memory storage, so no external
//! services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_error, assert_json, fixtures::*, test_config, TestServer};
use reqwest::StatusCode;

async fn create_post(server: &TestServer) -> PostResponse {
    let response = server
        .post("/api/v1/posts", &CreatePostRequest::unique())
        .await
        .unwrap();
    let created: ActionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.data
}

async fn vote(server: &TestServer, post_id: &str) -> ActionResponse {
    let response = server
        .post_empty(&format!("/api/v1/posts/{post_id}/votes"))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn comment(server: &TestServer, post_id: &str) -> ActionResponse {
    let response = server
        .post(
            &format!("/api/v1/posts/{post_id}/comments"),
            &CreateCommentRequest::unique(),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");

    assert!(response.headers().contains_key("x-request-id"));
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");

    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["storage"], "healthy");
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_empty_listing() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/posts").await.unwrap();
    let listing: PostListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listing.posts.is_empty());
    assert_eq!(listing.totals.votes, 0);
    assert_eq!(listing.totals.comments, 0);
    assert_eq!(listing.notice.unwrap().level, "info");

    let response = server.get("/api/v1/home").await.unwrap();
    let home: HomeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(home.recent_posts.is_empty());
    assert!(home.latest_comments.is_empty());
    assert!(home.notice.is_some());
}

#[tokio::test]
async fn test_listing_totals() {
    let server = TestServer::start().await.unwrap();

    let first = create_post(&server).await;
    let second = create_post(&server).await;
    let third = create_post(&server).await;

    for _ in 0..2 {
        vote(&server, &first.id).await;
    }
    for _ in 0..5 {
        vote(&server, &third.id).await;
    }
    comment(&server, &first.id).await;
    comment(&server, &third.id).await;
    comment(&server, &third.id).await;

    let response = server.get("/api/v1/posts").await.unwrap();
    let listing: PostListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(listing.posts.len(), 3);
    assert_eq!(listing.totals.votes, 7);
    assert_eq!(listing.totals.comments, 3);
    assert!(listing.notice.is_none());
    assert!(listing.posts.iter().any(|p| p.id == second.id && p.vote_count == 0));
}

#[tokio::test]
async fn test_home_view() {
    let server = TestServer::start().await.unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(create_post(&server).await.id);
    }
    for id in &ids {
        comment(&server, id).await;
    }
    vote(&server, &ids[0]).await;

    let response = server.get("/api/v1/home").await.unwrap();
    let home: HomeResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let recent: Vec<&str> = home.recent_posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(recent, vec![ids[4].as_str(), ids[3].as_str(), ids[2].as_str()]);

    assert_eq!(home.latest_comments.len(), 3);
    assert_eq!(home.latest_comments[0].post_id, ids[4]);

    assert_eq!(home.totals.votes, 1);
    assert_eq!(home.totals.comments, 5);
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_post() {
    let server = TestServer::start().await.unwrap();
    let request = CreatePostRequest::unique();

    let response = server.post("/api/v1/posts", &request).await.unwrap();
    let created: ActionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.data.author, request.author);
    assert_eq!(created.data.body, request.body);
    assert_eq!(created.data.vote_count, 0);
    assert_eq!(created.data.comment_count, 0);
    assert_eq!(created.notice.level, "success");
    assert!(created.notice.text.starts_with("Bien joué!"));

    let response = server
        .get(&format!("/api/v1/posts/{}", created.data.id))
        .await
        .unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.body, request.body);
}

#[tokio::test]
async fn test_create_post_missing_author() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_raw("/api/v1/posts", r#"{"body":"Sans auteur"}"#)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["author"].is_array());

    // Nothing was stored
    let response = server.get("/api/v1/posts").await.unwrap();
    let listing: PostListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listing.posts.is_empty());
}

#[tokio::test]
async fn test_create_post_malformed_json() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_raw("/api/v1/posts", "{oops").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_REQUEST_BODY");
}

#[tokio::test]
async fn test_get_unknown_post() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/posts/123456789").await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_POST");
}

#[tokio::test]
async fn test_get_post_invalid_id() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/posts/abc").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote() {
    let server = TestServer::start().await.unwrap();
    let post = create_post(&server).await;

    let voted = vote(&server, &post.id).await;
    assert_eq!(voted.data.vote_count, 1);
    assert!(voted.notice.text.starts_with("Bravo!"));

    let voted = vote(&server, &post.id).await;
    assert_eq!(voted.data.vote_count, 2);
}

#[tokio::test]
async fn test_vote_unknown_post() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_empty("/api/v1/posts/987654321/votes").await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_POST");
}

#[tokio::test]
async fn test_concurrent_votes() {
    let server = TestServer::start().await.unwrap();
    let post = create_post(&server).await;

    let path = format!("/api/v1/posts/{}/votes", post.id);
    let requests = (0..25).map(|_| server.post_empty(&path));
    for response in futures::future::join_all(requests).await {
        assert_eq!(response.unwrap().status(), StatusCode::OK);
    }

    let response = server
        .get(&format!("/api/v1/posts/{}", post.id))
        .await
        .unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.vote_count, 25);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment() {
    let server = TestServer::start().await.unwrap();
    let post = create_post(&server).await;

    comment(&server, &post.id).await;
    let commented = comment(&server, &post.id).await;

    assert_eq!(commented.data.comment_count, 2);
    assert_eq!(commented.data.comments.len(), 2);
    assert_eq!(commented.data.comments[1].post_id, post.id);
    assert_eq!(commented.notice.level, "success");
    assert!(commented.notice.text.starts_with("Merci !"));
}

#[tokio::test]
async fn test_comment_blank_body() {
    let server = TestServer::start().await.unwrap();
    let post = create_post(&server).await;

    let request = CreateCommentRequest {
        author: "Bob".to_string(),
        body: "   ".to_string(),
    };
    let response = server
        .post(&format!("/api/v1/posts/{}/comments", post.id), &request)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    let response = server
        .get(&format!("/api/v1/posts/{}", post.id))
        .await
        .unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.comment_count, 0);
}

#[tokio::test]
async fn test_comment_unknown_post() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/v1/posts/987654321/comments", &CreateCommentRequest::unique())
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_POST");
}

// ============================================================================
// Abuse Tests
// ============================================================================

#[tokio::test]
async fn test_report_abuse() {
    let server = TestServer::start().await.unwrap();
    let post = create_post(&server).await;

    let response = server
        .post_empty(&format!("/api/v1/abuse/{}", post.id))
        .await
        .unwrap();
    let ack: AbuseReportResponse = assert_json(response, StatusCode::ACCEPTED).await.unwrap();

    assert_eq!(ack.content_ref, post.id);
    assert_eq!(ack.notice.level, "success");
    assert!(ack.notice.text.starts_with("Merci de nous avoir averti"));
}

#[tokio::test]
async fn test_report_abuse_page_tag() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_empty("/api/v1/abuse/home").await.unwrap();
    let ack: AbuseReportResponse = assert_json(response, StatusCode::ACCEPTED).await.unwrap();
    assert_eq!(ack.content_ref, "home");
}

#[tokio::test]
async fn test_report_abuse_blank_reference() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_empty("/api/v1/abuse/%20").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");
}

// ============================================================================
// Middleware Tests
// ============================================================================

#[tokio::test]
async fn test_rate_limit() {
    let config = test_config(&[
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1"),
        ("RATE_LIMIT_BURST", "2"),
    ])
    .unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    let mut statuses = Vec::new();
    let mut limited = None;
    for _ in 0..5 {
        let response = server.get("/api/v1/posts").await.unwrap();
        statuses.push(response.status());
        if response.status() == StatusCode::TOO_MANY_REQUESTS && limited.is_none() {
            limited = Some(response);
        }
    }
    assert_eq!(statuses[0], StatusCode::OK);

    let limited = limited.expect("limiter never rejected a request");
    let code = assert_error(limited, StatusCode::TOO_MANY_REQUESTS).await.unwrap();
    assert_eq!(code, "RATE_LIMIT_EXCEEDED");

    // Health probes bypass the limiter
    let response = server.get("/health").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_propagated() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .client
        .get(format!("{}/api/v1/home", server.base_url()))
        .header("x-request-id", "test-request-42")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-request-42"
    );
}
