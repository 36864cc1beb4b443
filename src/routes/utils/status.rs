use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{constants::version, routes::extract::JsonBody, utils::build_resp, AppState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusRequest {
    /// Echoed back in the response.
    pub echo: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponseBody {
    pub app_name: String,
    pub server_time: DateTime<Utc>,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo: Option<String>,
}

fn status_body(data: &AppState, echo: Option<String>) -> StatusResponseBody {
    StatusResponseBody {
        app_name: data.env.app_name.clone(),
        server_time: Utc::now(),
        version: version().to_string(),
        echo,
    }
}

#[utoipa::path(get, path = "/api/status", tag = "utils", responses(
    (status = 200, description = "Status check successful.", body = StatusResponse)
))]
pub async fn get_status(State(data): State<Arc<AppState>>) -> impl IntoResponse {
    build_resp(
        StatusCode::OK,
        String::from("Status check successful."),
        Some(status_body(&data, None)),
    )
}

#[utoipa::path(post, path = "/api/status", tag = "utils", request_body = StatusRequest, responses(
    (status = 200, description = "Status check successful.", body = StatusResponse)
))]
pub async fn post_status(
    State(data): State<Arc<AppState>>,
    JsonBody(query): JsonBody<StatusRequest>,
) -> impl IntoResponse {
    build_resp(
        StatusCode::OK,
        String::from("Status check successful."),
        Some(status_body(&data, query.echo)),
    )
}
