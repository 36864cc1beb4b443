use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use super::{category_err_resp, not_found_resp, CategoryResponseBody};
use crate::{
    routes::{extract::PathParam, middlewares::AdminSession},
    utils::{build_resp, ErrorResp},
    AppState,
};

/// Delete a category for good. Admins only.
///
/// The response carries the category as it was right before deletion.
#[utoipa::path(delete, path = "/api/category/{category_id}", tag = "categories",
    params(("category_id" = Uuid, Path, description = "Id of the category.")),
    responses(
        (status = 200, description = "Category deleted.", body = CategoryResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 403, description = "Forbidden.", body = ErrorResponse),
        (status = 404, description = "No category has this id.", body = ErrorResponse),
        (status = 500, description = "Internal server error.", body = ErrorResponse)
    )
)]
pub async fn delete_category(
    State(data): State<Arc<AppState>>,
    _admin: AdminSession,
    PathParam(category_id): PathParam<Uuid>,
) -> Result<impl IntoResponse, ErrorResp> {
    let category = data
        .categories
        .delete_category(category_id)
        .await
        .map_err(category_err_resp)?
        .ok_or_else(|| not_found_resp(category_id))?;

    Ok(build_resp(
        StatusCode::OK,
        format!("Category {} deleted.", category_id),
        Some(CategoryResponseBody { data: category }),
    ))
}
