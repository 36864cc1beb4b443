pub mod categories;
pub mod extract;
pub mod middlewares;
pub mod utils;

pub use self::{
    categories::{CategoriesResponseBody, CategoryResponseBody},
    utils::{StatusRequest, StatusResponseBody},
};
pub use middlewares::auth;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{Category, CategoryPatch, NewCategory},
    AppState,
};

#[derive(Clone, Deserialize, Serialize, ToSchema, Debug)]
pub struct ErrorResponseBody {
    /// The error message.
    pub message: String,
}

#[derive(Clone, Deserialize, Serialize, ToSchema, Debug)]
#[aliases(
    CategoriesResponse = ApiResponse<CategoriesResponseBody>,
    CategoryResponse = ApiResponse<CategoryResponseBody>,
    ErrorResponse = ApiResponse<ErrorResponseBody>,
    StatusResponse = ApiResponse<StatusResponseBody>,
)]
pub struct ApiResponse<T> {
    /// A description of the response status.
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub body: Option<T>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        description = "coursedesk's category backend documentations.",
        license(name = "MIT or Apache-2.0"),
    ),
    tags(
        (
            name = "categories",
            description = "Listing and managing course categories."
        ),
        (
            name = "utils",
            description = "Getting server status."
        )
    ),
    paths(
        categories::get_categories,
        categories::get_category,
        categories::post_category,
        categories::put_category,
        categories::delete_category,
        utils::get_status,
        utils::post_status,
    ),
    components(schemas(
        CategoriesResponse,
        CategoriesResponseBody,
        Category,
        CategoryPatch,
        CategoryResponse,
        CategoryResponseBody,
        ErrorResponse,
        ErrorResponseBody,
        NewCategory,
        StatusRequest,
        StatusResponse,
        StatusResponseBody,
    ))
)]
pub struct ApiDoc;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/categories", get(categories::get_categories))
        .route("/api/category", post(categories::post_category))
        .route(
            "/api/category/:category_id",
            get(categories::get_category)
                .put(categories::put_category)
                .delete(categories::delete_category),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth))
        .route("/api/status", get(utils::get_status).post(utils::post_status))
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
