//! HTTP-level integration tests for the tag vocabulary.

mod common;

use axum::http::StatusCode;
use common::{admin_delete, admin_get, admin_post_json, admin_put_json, body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_tag(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = admin_post_json(app, "/api/admin/tags", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

fn names(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_tag_normalizes_and_defaults_color(pool: PgPool) {
    let tag = create_tag(&pool, json!({"name": "  Web   Design "})).await;

    assert_eq!(tag["name"], "Web Design");
    assert_eq!(tag["color"], "#6366F1");
    assert_eq!(tag["is_technology"], false);

    let tag = create_tag(
        &pool,
        json!({"name": "Rust", "color": "#ff6600", "is_technology": true}),
    )
    .await;
    assert_eq!(tag["color"], "#FF6600");
    assert_eq!(tag["is_technology"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_tag_requires_pin(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/admin/tags", json!({"name": "Web"})).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_tag_validation_errors(pool: PgPool) {
    let long_name = "x".repeat(51);
    let cases = [
        (json!({"name": "   "}), "Tag name is required"),
        (
            json!({"name": long_name}),
            "Tag name must be at most 50 characters",
        ),
        (
            json!({"name": "Web", "color": "red"}),
            "Invalid color 'red'. Must be in #RRGGBB hex format",
        ),
    ];

    for (body, expected) in cases {
        let app = common::build_test_app(pool.clone());
        let response = admin_post_json(app, "/api/admin/tags", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], expected);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_tag_name_returns_409(pool: PgPool) {
    create_tag(&pool, json!({"name": "React"})).await;

    let app = common::build_test_app(pool);
    let response = admin_post_json(app, "/api/admin/tags", json!({"name": "react"})).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "A tag named 'react' already exists");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_tags_alphabetical_and_by_kind(pool: PgPool) {
    create_tag(&pool, json!({"name": "rust", "is_technology": true})).await;
    create_tag(&pool, json!({"name": "Mobile"})).await;
    create_tag(&pool, json!({"name": "Axum", "is_technology": true})).await;
    create_tag(&pool, json!({"name": "web"})).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/tags").await).await;
    assert_eq!(names(&json), vec!["Axum", "Mobile", "rust", "web"]);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/tags?kind=technology").await).await;
    assert_eq!(names(&json), vec!["Axum", "rust"]);

    let app = common::build_test_app(pool.clone());
    let json = body_json(admin_get(app, "/api/admin/tags?kind=category").await).await;
    assert_eq!(names(&json), vec!["Mobile", "web"]);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/tags?kind=framework").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_tag(pool: PgPool) {
    let tag = create_tag(&pool, json!({"name": "Web"})).await;
    let id = tag["id"].as_i64().unwrap();
    create_tag(&pool, json!({"name": "Mobile"})).await;

    // Same name with different casing on the same tag is allowed.
    let app = common::build_test_app(pool.clone());
    let response = admin_put_json(
        app,
        &format!("/api/admin/tags/{id}"),
        json!({"name": "WEB", "color": "#00aa00"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "WEB");
    assert_eq!(json["data"]["color"], "#00AA00");
    assert_eq!(json["data"]["is_technology"], false);

    // Renaming onto another tag's name conflicts.
    let app = common::build_test_app(pool.clone());
    let response =
        admin_put_json(app, &format!("/api/admin/tags/{id}"), json!({"name": "mobile"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool.clone());
    let response = admin_put_json(app, &format!("/api/admin/tags/{id}"), json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response =
        admin_put_json(app, "/api/admin/tags/999999", json!({"is_technology": true})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_tag_leaves_projects_alone(pool: PgPool) {
    let tag = create_tag(&pool, json!({"name": "Web"})).await;
    let id = tag["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = admin_post_json(
        app,
        "/api/admin/projects",
        json!({"title": "Shop", "description": "d", "categories": ["Web"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = admin_delete(app, &format!("/api/admin/tags/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/projects?category=Web").await).await;
    assert_eq!(json["data"][0]["categories"], json!(["Web"]));

    let app = common::build_test_app(pool);
    let response = admin_delete(app, &format!("/api/admin/tags/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
