use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::routes::{ApiResponse, ErrorResponseBody};

/// What every fallible handler and extractor in this crate rejects with.
pub type ErrorResp = (StatusCode, Json<ApiResponse<ErrorResponseBody>>);

pub fn build_resp<T: Serialize>(
    status: StatusCode,
    description: String,
    body: Option<T>,
) -> (StatusCode, Json<ApiResponse<T>>) {
    (status, Json(ApiResponse { description, body }))
}

pub fn build_err_resp(status: StatusCode, description: String, message: String) -> ErrorResp {
    (
        status,
        Json(ApiResponse {
            description,
            body: Some(ErrorResponseBody { message }),
        }),
    )
}

/// Wrap a rejected request, keeping the status axum picked for it.
pub fn build_rejection_resp(status: StatusCode, message: String) -> ErrorResp {
    let description = match status {
        StatusCode::UNPROCESSABLE_ENTITY => "Server could not process the request body.",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "Server expected a JSON request body.",
        _ => "Server has received a bad request.",
    };
    build_err_resp(status, String::from(description), message)
}
