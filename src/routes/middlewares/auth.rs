use std::sync::Arc;

use axum::{
    async_trait,
    body::Body,
    extract::{FromRequestParts, State},
    http::{header, request::Parts, Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use tracing::debug;

use crate::{
    models::auth::Session,
    utils::{build_err_resp, decode_token, ErrorResp},
    AppState,
};

/// Resolve the caller's [`Session`] from the `token` cookie or a bearer
/// token and hand it to the handlers as a request extension.
pub async fn auth(
    cookie_jar: CookieJar,
    State(data): State<Arc<AppState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, ErrorResp> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| {
                    auth_value
                        .strip_prefix("Bearer ")
                        .map(|stripped| stripped.to_owned())
                })
        })
        .ok_or_else(|| {
            build_err_resp(
                StatusCode::UNAUTHORIZED,
                String::from("Unauthorized."),
                String::from("You're not logged in, please provide a token."),
            )
        })?;

    let claims = decode_token(&data.env.jwt_secret, &token).map_err(|e| {
        debug!("rejected token: {}", e);
        build_err_resp(
            StatusCode::UNAUTHORIZED,
            String::from("Unauthorized."),
            String::from("Invalid token."),
        )
    })?;

    req.extensions_mut().insert(Session {
        token,
        user_id: claims.sub,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

/// A [`Session`] that belongs to an admin. Only admins may change categories.
///
/// Extracted from request parts, so it is checked before any body is parsed.
pub struct AdminSession(pub Session);

#[async_trait]
impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = ErrorResp;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts.extensions.get::<Session>().cloned().ok_or_else(|| {
            build_err_resp(
                StatusCode::UNAUTHORIZED,
                String::from("Unauthorized."),
                String::from("You're not logged in, please provide a token."),
            )
        })?;

        if !session.is_admin() {
            debug!("user {} is not an admin", session.user_id);
            return Err(build_err_resp(
                StatusCode::FORBIDDEN,
                String::from("Forbidden."),
                String::from("Only administrators can manage categories."),
            ));
        }

        Ok(Self(session))
    }
}
