mod delete_category;
mod get_categories;
mod get_category;
mod post_category;
mod put_category;

use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    models::Category,
    service::CategoryError,
    store::StoreError,
    utils::{build_err_resp, ErrorResp},
};

pub use delete_category::delete_category;
pub use get_categories::{get_categories, CategoriesQuery, CategoriesResponseBody};
pub use get_category::get_category;
pub use post_category::post_category;
pub use put_category::put_category;

pub use delete_category::__path_delete_category;
pub use get_categories::__path_get_categories;
pub use get_category::__path_get_category;
pub use post_category::__path_post_category;
pub use put_category::__path_put_category;

#[derive(Serialize, ToSchema)]
pub struct CategoryResponseBody {
    /// The requested category.
    pub data: Category,
}

fn category_err_resp(e: CategoryError) -> ErrorResp {
    match e {
        CategoryError::InvalidArgument(msg) | CategoryError::Validation(msg) => build_err_resp(
            StatusCode::BAD_REQUEST,
            String::from("Server has received a bad request."),
            msg,
        ),
        CategoryError::Store(StoreError::Unavailable(msg)) => build_err_resp(
            StatusCode::SERVICE_UNAVAILABLE,
            String::from("The category store is unavailable."),
            msg,
        ),
        CategoryError::Store(e) => build_err_resp(
            StatusCode::INTERNAL_SERVER_ERROR,
            String::from("An internal server error has occurred."),
            e.to_string(),
        ),
    }
}

fn not_found_resp(category_id: Uuid) -> ErrorResp {
    build_err_resp(
        StatusCode::NOT_FOUND,
        String::from("The requested category was not found."),
        format!(
            "The server could not find any categories matching the id {}.",
            category_id
        ),
    )
}
