//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Post Interaction Tests
// ============================================================================

#[tokio::test]
async fn test_like_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let post_id = unique_id("post");
    let token = server.token_for(&unique_id("user")).unwrap();

    let response = server
        .post_auth("/api/v1/posts/interactions", &token, &PostReaction::like(&post_id))
        .await
        .unwrap();
    let body: Envelope<StatsResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    assert_eq!(body.message, "Post liked successfully");
    let stats = body.data.unwrap();
    assert_eq!(stats.subject_id, post_id);
    assert_eq!(stats.like_count, 1);
    assert_eq!(stats.dislike_count, 0);
    assert_eq!(stats.current_user_reaction.as_deref(), Some("like"));
}

#[tokio::test]
async fn test_like_post_twice_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let post_id = unique_id("post");
    let token = server.token_for(&unique_id("user")).unwrap();

    server
        .post_auth("/api/v1/posts/interactions", &token, &PostReaction::like(&post_id))
        .await
        .unwrap();
    let response = server
        .post_auth("/api/v1/posts/interactions", &token, &PostReaction::like(&post_id))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert!(!error.success);
    assert_eq!(error.message, "You have already liked this post");
    assert_eq!(error.code, "DUPLICATE_REACTION");
}

#[tokio::test]
async fn test_switch_like_to_dislike() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let post_id = unique_id("post");
    let token = server.token_for(&unique_id("user")).unwrap();

    server
        .post_auth("/api/v1/posts/interactions", &token, &PostReaction::like(&post_id))
        .await
        .unwrap();
    let response = server
        .post_auth("/api/v1/posts/interactions", &token, &PostReaction::dislike(&post_id))
        .await
        .unwrap();
    let body: Envelope<StatsResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.message, "Post disliked successfully");
    let stats = body.data.unwrap();
    assert_eq!(stats.like_count, 0);
    assert_eq!(stats.dislike_count, 1);
}

#[tokio::test]
async fn test_react_without_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/posts/interactions", &PostReaction::like("post-1"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_post_stats_counts_every_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let post_id = unique_id("post");
    let users: Vec<String> = (0..4).map(|_| unique_id("user")).collect();

    for (i, user) in users.iter().enumerate() {
        let token = server.token_for(user).unwrap();
        let reaction = if i < 3 {
            PostReaction::like(&post_id)
        } else {
            PostReaction::dislike(&post_id)
        };
        let response = server
            .post_auth("/api/v1/posts/interactions", &token, &reaction)
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let path = format!(
        "/api/v1/posts/interactions/stats?postId={post_id}&userId={}",
        users[3]
    );
    let response = server.get(&path).await.unwrap();
    let body: Envelope<StatsResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.message, "Post interaction stats retrieved successfully");
    let stats = body.data.unwrap();
    assert_eq!(stats.like_count, 3);
    assert_eq!(stats.dislike_count, 1);
    assert_eq!(stats.current_user_reaction.as_deref(), Some("dislike"));
}

#[tokio::test]
async fn test_stats_current_user_from_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let post_id = unique_id("post");
    let token = server.token_for(&unique_id("user")).unwrap();

    server
        .post_auth("/api/v1/posts/interactions", &token, &PostReaction::like(&post_id))
        .await
        .unwrap();

    let path = format!("/api/v1/posts/interactions/stats?postId={post_id}");
    let response = server.get_auth(&path, &token).await.unwrap();
    let body: Envelope<StatsResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.unwrap().current_user_reaction.as_deref(), Some("like"));

    let response = server.get(&path).await.unwrap();
    let body: Envelope<StatsResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.unwrap().current_user_reaction, None);
}

#[tokio::test]
async fn test_stats_requires_post_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/posts/interactions/stats").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(error.message, "Post ID is required");
}

// ============================================================================
// Comment Interaction Tests
// ============================================================================

#[tokio::test]
async fn test_comment_and_post_tables_are_separate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let shared_id = unique_id("subject");
    let token = server.token_for(&unique_id("user")).unwrap();

    let response = server
        .post_auth("/api/v1/comments/interactions", &token, &CommentReaction::like(&shared_id))
        .await
        .unwrap();
    let body: Envelope<StatsResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Comment liked successfully");

    // The same id as a post has no reactions yet
    let path = format!("/api/v1/posts/interactions/stats?postId={shared_id}");
    let response = server.get(&path).await.unwrap();
    let body: Envelope<StatsResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.unwrap().like_count, 0);
}

#[tokio::test]
async fn test_user_comment_interactions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = unique_id("user");
    let token = server.token_for(&user_id).unwrap();

    for _ in 0..2 {
        let response = server
            .post_auth(
                "/api/v1/comments/interactions",
                &token,
                &CommentReaction::like(&unique_id("comment")),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let path = format!("/api/v1/comments/interactions/user/{user_id}");
    let response = server.get(&path).await.unwrap();
    let body: Envelope<Vec<RecordResponse>> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.message, "User comment interactions retrieved successfully");
    let records = body.data.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.user_id == user_id && r.kind == "like"));
}
