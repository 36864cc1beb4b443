use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::category_err_resp;
use crate::{
    constants::{DEFAULT_LIMIT, DEFAULT_PAGE},
    models::Category,
    routes::extract::QueryParams,
    utils::{build_resp, ErrorResp},
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoriesQuery {
    /// 1-indexed page to fetch, defaults to 1.
    pub page: Option<i64>,
    /// Maximum number of categories per page, defaults to 20.
    pub limit: Option<i64>,
}

#[derive(Serialize, ToSchema)]
pub struct CategoriesResponseBody {
    /// The categories on the requested page, in creation order.
    pub data: Vec<Category>,
    /// Number of categories in total, regardless of paging.
    pub total: u64,
    pub page: i64,
    pub limit: i64,
}

/// List categories one page at a time.
///
/// A page past the end comes back empty, with the total still filled in.
#[utoipa::path(get, path = "/api/categories", tag = "categories", params(CategoriesQuery), responses(
    (status = 200, description = "Fetch categories successful.", body = CategoriesResponse),
    (status = 400, description = "Bad request.", body = ErrorResponse),
    (status = 401, description = "Unauthorized.", body = ErrorResponse),
    (status = 500, description = "Internal server error.", body = ErrorResponse)
))]
pub async fn get_categories(
    State(data): State<Arc<AppState>>,
    QueryParams(query): QueryParams<CategoriesQuery>,
) -> Result<impl IntoResponse, ErrorResp> {
    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let result = data
        .categories
        .get_all_categories(page, limit)
        .await
        .map_err(category_err_resp)?;

    Ok(build_resp(
        StatusCode::OK,
        String::from("Fetching categories successful."),
        Some(CategoriesResponseBody {
            data: result.categories,
            total: result.total,
            page,
            limit,
        }),
    ))
}
