use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use super::{category_err_resp, CategoryResponseBody};
use crate::{
    models::NewCategory,
    routes::{extract::JsonBody, middlewares::AdminSession},
    utils::{build_resp, ErrorResp},
    AppState,
};

/// Create a category. Admins only.
#[utoipa::path(post, path = "/api/category", tag = "categories", request_body = NewCategory, responses(
    (status = 201, description = "Category created.", body = CategoryResponse),
    (status = 400, description = "Bad request.", body = ErrorResponse),
    (status = 401, description = "Unauthorized.", body = ErrorResponse),
    (status = 403, description = "Forbidden.", body = ErrorResponse),
        (status = 422, description = "Malformed request body.", body = ErrorResponse),
    (status = 500, description = "Internal server error.", body = ErrorResponse)
))]
pub async fn post_category(
    State(data): State<Arc<AppState>>,
    _admin: AdminSession,
    JsonBody(body): JsonBody<NewCategory>,
) -> Result<impl IntoResponse, ErrorResp> {
    let category = data
        .categories
        .create_category(body)
        .await
        .map_err(category_err_resp)?;

    Ok(build_resp(
        StatusCode::CREATED,
        format!("Category {} created.", category.id),
        Some(CategoryResponseBody { data: category }),
    ))
}
