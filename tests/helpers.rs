#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use coursedesk::{
    config::{Config, StoreKind},
    models::auth::Role,
    routes,
    store::{CategoryStore, MemoryCategoryStore},
    utils::issue_token,
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

pub const SECRET: &str = "test secret";

pub fn test_config() -> Config {
    Config {
        app_name: String::from("Coursedesk"),
        server_address: String::from("127.0.0.1"),
        server_port: 0,
        database_url: String::from("sqlite::memory:"),
        category_store: StoreKind::Memory,
        jwt_secret: String::from(SECRET),
        jwt_maxage_hour: 1,
        log_level: tracing::Level::DEBUG,
    }
}

pub fn app() -> Router {
    app_with_store(Arc::new(MemoryCategoryStore::new()))
}

pub fn app_with_store(store: Arc<dyn CategoryStore>) -> Router {
    routes::router(Arc::new(AppState::new(test_config(), store)))
}

pub fn token(role: Role) -> String {
    issue_token(SECRET, "tester", role, 1).unwrap()
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}
