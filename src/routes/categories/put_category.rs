use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use super::{category_err_resp, not_found_resp, CategoryResponseBody};
use crate::{
    models::CategoryPatch,
    routes::{
        extract::{JsonBody, PathParam},
        middlewares::AdminSession,
    },
    utils::{build_resp, ErrorResp},
    AppState,
};

/// Change the name and/or description of a category. Admins only.
///
/// Fields left out of the body are kept as they are.
#[utoipa::path(put, path = "/api/category/{category_id}", tag = "categories",
    params(("category_id" = Uuid, Path, description = "Id of the category.")),
    request_body = CategoryPatch,
    responses(
        (status = 200, description = "Category updated.", body = CategoryResponse),
        (status = 400, description = "Bad request.", body = ErrorResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 403, description = "Forbidden.", body = ErrorResponse),
        (status = 422, description = "Malformed request body.", body = ErrorResponse),
        (status = 404, description = "No category has this id.", body = ErrorResponse),
        (status = 500, description = "Internal server error.", body = ErrorResponse)
    )
)]
pub async fn put_category(
    State(data): State<Arc<AppState>>,
    _admin: AdminSession,
    PathParam(category_id): PathParam<Uuid>,
    JsonBody(body): JsonBody<CategoryPatch>,
) -> Result<impl IntoResponse, ErrorResp> {
    let category = data
        .categories
        .update_category(category_id, body)
        .await
        .map_err(category_err_resp)?
        .ok_or_else(|| not_found_resp(category_id))?;

    Ok(build_resp(
        StatusCode::OK,
        format!("Category {} updated.", category_id),
        Some(CategoryResponseBody { data: category }),
    ))
}
