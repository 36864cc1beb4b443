mod helpers;

use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use axum::http::{header, Method, Request, StatusCode};
use coursedesk::{
    models::{auth::Role, Category, CategoryPage, CategoryPatch},
    store::{CategoryStore, StoreError},
};
use helpers::{app, app_with_store, send, token};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

async fn create(app: &axum::Router, admin: &str, body: Value) -> Value {
    let (status, json) = send(app, Method::POST, "/api/category", Some(admin), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json["data"].clone()
}

#[tokio::test]
async fn status_is_public() {
    let app = app();

    let (status, json) = send(&app, Method::GET, "/api/status", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["app_name"], "Coursedesk");
    assert!(json.get("echo").is_none());

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/status",
        None,
        Some(json!({ "echo": "ping" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["echo"], "ping");
}

#[tokio::test]
async fn category_routes_need_a_valid_token() {
    let app = app();

    let (status, json) = send(&app, Method::GET, "/api/categories", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(json["message"].is_string());

    let (status, _) = send(&app, Method::GET, "/api/categories", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let forged = coursedesk::utils::issue_token("wrong secret", "mallory", Role::Admin, 1).unwrap();
    let (status, _) = send(&app, Method::GET, "/api/categories", Some(&forged), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_cookie_is_accepted() {
    let app = app();
    let request = Request::builder()
        .uri("/api/categories")
        .header(header::COOKIE, format!("token={}", token(Role::User)))
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn only_admins_can_mutate() {
    let app = app();
    let admin = token(Role::Admin);
    let user = token(Role::User);
    let created = create(&app, &admin, json!({ "name": "Physics" })).await;
    let uri = format!("/api/category/{}", created["id"].as_str().unwrap());

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/category",
        Some(&user),
        Some(json!({ "name": "Chemistry" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, Method::PUT, &uri, Some(&user), Some(json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&user), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, json) = send(&app, Method::GET, &uri, Some(&user), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["name"], "Physics");
}

#[tokio::test]
async fn create_validates_name() {
    let app = app();
    let admin = token(Role::Admin);

    for body in [json!({ "name": "" }), json!({ "name": "   " }), json!({})] {
        let (status, json) =
            send(&app, Method::POST, "/api/category", Some(&admin), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"].as_str().unwrap().contains("empty"));
    }

    let (_, json) = send(&app, Method::GET, "/api/categories", Some(&admin), None).await;
    assert_eq!(json["total"], 0);

    let created = create(
        &app,
        &admin,
        json!({ "name": "  Biology ", "description": "Cells and such" }),
    )
    .await;
    assert_eq!(created["name"], "Biology");
    assert_eq!(created["description"], "Cells and such");
}

#[tokio::test]
async fn listing_pages_through_categories() {
    let app = app();
    let admin = token(Role::Admin);
    let mut all = HashSet::new();
    for i in 0..5 {
        let created = create(&app, &admin, json!({ "name": format!("Course {i}") })).await;
        all.insert(created["id"].as_str().unwrap().to_string());
    }

    let ids = |json: &Value| -> HashSet<String> {
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap().to_string())
            .collect()
    };

    let (status, first) =
        send(&app, Method::GET, "/api/categories?page=1&limit=3", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["total"], 5);
    assert_eq!(first["page"], 1);
    assert_eq!(first["limit"], 3);
    assert_eq!(first["data"][0]["name"], "Course 0");

    let (_, second) =
        send(&app, Method::GET, "/api/categories?page=2&limit=3", Some(&admin), None).await;
    assert_eq!(second["data"].as_array().unwrap().len(), 2);

    let (first, second) = (ids(&first), ids(&second));
    assert!(first.is_disjoint(&second));
    assert_eq!(&first | &second, all);

    let (status, past) =
        send(&app, Method::GET, "/api/categories?page=9&limit=3", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(past["data"].as_array().unwrap().is_empty());
    assert_eq!(past["total"], 5);

    let (_, defaults) = send(&app, Method::GET, "/api/categories", Some(&admin), None).await;
    assert_eq!(defaults["page"], 1);
    assert_eq!(defaults["limit"], 20);
    assert_eq!(ids(&defaults), all);

    for query in ["page=0", "limit=0", "page=-3&limit=2"] {
        let (status, _) = send(
            &app,
            Method::GET,
            &format!("/api/categories?{query}"),
            Some(&admin),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{query}");
    }
}

#[tokio::test]
async fn update_and_delete_lifecycle() {
    let app = app();
    let admin = token(Role::Admin);
    let created = create(
        &app,
        &admin,
        json!({ "name": "Art", "description": "Painting" }),
    )
    .await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("/api/category/{id}");

    let (status, json) =
        send(&app, Method::PUT, &uri, Some(&admin), Some(json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["name"], "X");
    assert_eq!(json["data"]["description"], "Painting");

    let (status, _) =
        send(&app, Method::PUT, &uri, Some(&admin), Some(json!({ "name": " " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, json) = send(&app, Method::GET, &uri, Some(&admin), None).await;
    assert_eq!(json["data"]["name"], "X");

    let (status, json) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&admin),
        Some(json!({ "description": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["description"], Value::Null);

    let (status, json) = send(&app, Method::DELETE, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["name"], "X");

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) =
        send(&app, Method::PUT, &uri, Some(&admin), Some(json!({ "name": "Y" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::GET, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app();

    let (status, json) = send(&app, Method::GET, "/api-docs/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/api/categories"].is_object());
    assert!(json["paths"]["/api/category/{category_id}"]["delete"].is_object());
}

#[tokio::test]
async fn null_name_is_rejected() {
    let app = app();
    let admin = token(Role::Admin);
    let created = create(&app, &admin, json!({ "name": "Art" })).await;
    let uri = format!("/api/category/{}", created["id"].as_str().unwrap());

    let (status, json) =
        send(&app, Method::PUT, &uri, Some(&admin), Some(json!({ "name": null }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("empty"));

    let (_, json) = send(&app, Method::GET, &uri, Some(&admin), None).await;
    assert_eq!(json["data"]["name"], "Art");
}

#[tokio::test]
async fn malformed_requests_get_the_error_envelope() {
    let app = app();
    let admin = token(Role::Admin);
    let user = token(Role::User);
    let created = create(&app, &admin, json!({ "name": "Art" })).await;
    let uri = format!("/api/category/{}", created["id"].as_str().unwrap());

    let (status, json) =
        send(&app, Method::GET, "/api/categories?page=abc", Some(&admin), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].is_string());
    assert!(json["description"].is_string());

    let (status, json) =
        send(&app, Method::GET, "/api/category/not-a-uuid", Some(&admin), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].is_string());

    let (status, json) =
        send(&app, Method::PUT, &uri, Some(&admin), Some(json!({ "name": 5 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["message"].is_string());

    // The role is checked before the body is looked at.
    let (status, _) =
        send(&app, Method::PUT, &uri, Some(&user), Some(json!({ "name": 5 }))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/category",
        Some(&user),
        Some(json!({ "name": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

struct UnavailableStore;

#[async_trait]
impl CategoryStore for UnavailableStore {
    async fn insert(&self, _: String, _: Option<String>) -> Result<Category, StoreError> {
        Err(StoreError::Unavailable(String::from("connection pool timed out")))
    }

    async fn page(&self, _: u64, _: u64) -> Result<CategoryPage, StoreError> {
        Err(StoreError::Unavailable(String::from("connection pool timed out")))
    }

    async fn get(&self, _: Uuid) -> Result<Option<Category>, StoreError> {
        Err(StoreError::Unavailable(String::from("connection pool timed out")))
    }

    async fn update(&self, _: Uuid, _: CategoryPatch) -> Result<Option<Category>, StoreError> {
        Err(StoreError::Unavailable(String::from("connection pool timed out")))
    }

    async fn delete(&self, _: Uuid) -> Result<Option<Category>, StoreError> {
        Err(StoreError::Unavailable(String::from("connection pool timed out")))
    }
}

#[tokio::test]
async fn unavailable_store_maps_to_503() {
    let app = app_with_store(Arc::new(UnavailableStore));
    let admin = token(Role::Admin);

    let (status, json) = send(&app, Method::GET, "/api/categories", Some(&admin), None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["message"], "connection pool timed out");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/category",
        Some(&admin),
        Some(json!({ "name": "Art" })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    // Validation does not need the store.
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/category",
        Some(&admin),
        Some(json!({ "name": " " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
