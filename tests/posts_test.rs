//! Post endpoint integration tests
//!
//! Covers creation, public listing and detail, per-user listing, the
//! ownership checks on update/delete, and cascade deletion of comments.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;

async fn create_post(
    server: &TestServer,
    token: &str,
    title: &str,
    content: &str,
    category: Option<&str>,
) -> serde_json::Value {
    let mut body = serde_json::json!({ "title": title, "content": content });
    if let Some(category) = category {
        body["category"] = serde_json::json!(category);
    }

    let response = server
        .post("/api/posts")
        .add_header(AUTHORIZATION, common::bearer(token))
        .json(&body)
        .await;

    assert_eq!(
        response.status_code(),
        StatusCode::CREATED,
        "post creation failed: {}",
        response.text()
    );
    response.json()
}

#[tokio::test]
async fn test_created_post_appears_in_public_listing() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool);

    let (_, token) = common::register(&server, "alice").await;
    create_post(&server, &token, "Hello World", "first post", None).await;

    // Listing is public: no token attached.
    let response = server.get("/api/posts").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let posts: serde_json::Value = response.json();
    assert_eq!(posts.as_array().unwrap().len(), 1);

    let post = &posts[0];
    assert_eq!(post["title"], "Hello World");
    assert_eq!(post["content"], "first post");
    assert!(post["category"].is_null());
    assert_eq!(post["author"]["username"], "alice");
    assert_eq!(post["comments"], serde_json::json!([]));
}

#[tokio::test]
async fn test_create_post_requires_authentication() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool.clone());

    let response = server
        .post("/api/posts")
        .json(&serde_json::json!({ "title": "Hello World", "content": "body" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(common::count(&pool, "posts").await, 0);
}

#[tokio::test]
async fn test_create_post_validates_title_and_content() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool.clone());

    let (_, token) = common::register(&server, "alice").await;

    // Title shorter than five characters
    let response = server
        .post("/api/posts")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .json(&serde_json::json!({ "title": "Hey", "content": "body" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // Blank content
    let response = server
        .post("/api/posts")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .json(&serde_json::json!({ "title": "Hello World", "content": "   " }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    assert_eq!(common::count(&pool, "posts").await, 0);
}

#[tokio::test]
async fn test_empty_category_normalized_to_null() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool);

    let (_, token) = common::register(&server, "alice").await;

    let post = create_post(&server, &token, "Hello World", "body", Some("")).await;
    assert!(post["category"].is_null());

    let post = create_post(&server, &token, "Hello Again", "body", Some("rust")).await;
    assert_eq!(post["category"], "rust");
}

#[tokio::test]
async fn test_get_post_detail_and_missing() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool);

    let (_, token) = common::register(&server, "alice").await;
    let post = create_post(&server, &token, "Hello World", "body", None).await;

    let response = server.get(&format!("/api/posts/{}", post["id"])).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let detail: serde_json::Value = response.json();
    assert_eq!(detail["title"], "Hello World");
    assert_eq!(detail["author"]["username"], "alice");

    let response = server.get("/api/posts/999999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Post not found");
}

#[tokio::test]
async fn test_listing_is_newest_first() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool);

    let (_, token) = common::register(&server, "alice").await;
    let first = create_post(&server, &token, "First post", "one", None).await;
    let second = create_post(&server, &token, "Second post", "two", None).await;
    let third = create_post(&server, &token, "Third post", "three", None).await;

    let listing: serde_json::Value = server.get("/api/posts").await.json();
    let ids: Vec<i64> = listing
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();

    assert_eq!(
        ids,
        vec![
            third["id"].as_i64().unwrap(),
            second["id"].as_i64().unwrap(),
            first["id"].as_i64().unwrap(),
        ]
    );
}

#[tokio::test]
async fn test_my_posts_filtered_to_caller() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool);

    let (alice_id, alice_token) = common::register(&server, "alice").await;
    let (_, bob_token) = common::register(&server, "bob").await;

    create_post(&server, &alice_token, "Alice one", "body", None).await;
    create_post(&server, &alice_token, "Alice two", "body", None).await;
    create_post(&server, &bob_token, "Bob's post", "body", None).await;

    let response = server
        .get("/api/posts/my-posts")
        .add_header(AUTHORIZATION, common::bearer(&alice_token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let mine: serde_json::Value = response.json();
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine
        .iter()
        .all(|p| p["authorId"].as_i64().unwrap() == alice_id));
}

#[tokio::test]
async fn test_update_by_non_owner_forbidden_and_post_unchanged() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool);

    let (_, alice_token) = common::register(&server, "alice").await;
    let (_, bob_token) = common::register(&server, "bob").await;

    let post = create_post(&server, &alice_token, "Hello World", "body", None).await;
    let post_id = post["id"].as_i64().unwrap();

    let response = server
        .patch(&format!("/api/posts/{post_id}"))
        .add_header(AUTHORIZATION, common::bearer(&bob_token))
        .json(&serde_json::json!({ "title": "Hijacked title", "content": "body" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "You can only edit your own posts");

    let detail: serde_json::Value = server.get(&format!("/api/posts/{post_id}")).await.json();
    assert_eq!(detail["title"], "Hello World");
}

#[tokio::test]
async fn test_update_by_owner_persists() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool);

    let (_, token) = common::register(&server, "alice").await;
    let post = create_post(&server, &token, "Hello World", "body", Some("rust")).await;
    let post_id = post["id"].as_i64().unwrap();

    let response = server
        .patch(&format!("/api/posts/{post_id}"))
        .add_header(AUTHORIZATION, common::bearer(&token))
        .json(&serde_json::json!({
            "title": "Hello Rust",
            "content": "updated body",
            "category": ""
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: serde_json::Value = response.json();
    assert_eq!(updated["title"], "Hello Rust");
    assert!(updated["category"].is_null());

    let detail: serde_json::Value = server.get(&format!("/api/posts/{post_id}")).await.json();
    assert_eq!(detail["title"], "Hello Rust");
    assert_eq!(detail["content"], "updated body");
}

#[tokio::test]
async fn test_update_missing_post_not_found() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool);

    let (_, token) = common::register(&server, "alice").await;

    let response = server
        .patch("/api/posts/999999")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .json(&serde_json::json!({ "title": "Hello World", "content": "body" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_checks_ownership_and_existence() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool);

    let (_, alice_token) = common::register(&server, "alice").await;
    let (_, bob_token) = common::register(&server, "bob").await;

    let post = create_post(&server, &alice_token, "Hello World", "body", None).await;
    let post_id = post["id"].as_i64().unwrap();

    let response = server
        .delete("/api/posts/999999")
        .add_header(AUTHORIZATION, common::bearer(&alice_token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server
        .delete(&format!("/api/posts/{post_id}"))
        .add_header(AUTHORIZATION, common::bearer(&bob_token))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_by_owner_cascades_to_comments() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool.clone());

    let (_, token) = common::register(&server, "alice").await;
    let post = create_post(&server, &token, "Hello World", "body", None).await;
    let post_id = post["id"].as_i64().unwrap();

    let response = server
        .post("/api/comments")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .json(&serde_json::json!({ "postId": post_id, "content": "nice" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(common::count(&pool, "comments").await, 1);

    let response = server
        .delete(&format!("/api/posts/{post_id}"))
        .add_header(AUTHORIZATION, common::bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Post deleted successfully");

    let response = server.get(&format!("/api/posts/{post_id}")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    // Comments went with the post.
    assert_eq!(common::count(&pool, "comments").await, 0);
}
