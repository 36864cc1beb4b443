use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use super::{category_err_resp, not_found_resp, CategoryResponseBody};
use crate::{
    routes::extract::PathParam,
    utils::{build_resp, ErrorResp},
    AppState,
};

#[utoipa::path(get, path = "/api/category/{category_id}", tag = "categories",
    params(("category_id" = Uuid, Path, description = "Id of the category.")),
    responses(
        (status = 200, description = "Fetch category successful.", body = CategoryResponse),
        (status = 404, description = "No category has this id.", body = ErrorResponse),
        (status = 500, description = "Internal server error.", body = ErrorResponse)
    )
)]
pub async fn get_category(
    State(data): State<Arc<AppState>>,
    PathParam(category_id): PathParam<Uuid>,
) -> Result<impl IntoResponse, ErrorResp> {
    let category = data
        .categories
        .get_category(category_id)
        .await
        .map_err(category_err_resp)?
        .ok_or_else(|| not_found_resp(category_id))?;

    Ok(build_resp(
        StatusCode::OK,
        format!("Fetch category with id {} successful.", category_id),
        Some(CategoryResponseBody { data: category }),
    ))
}
