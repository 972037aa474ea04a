use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use serde_json::json;

use credo_core::TokenService;

use super::AuthApiError;

/// GET /api/me
///
/// Echoes the claims of a valid bearer token. Malformed and expired tokens
/// both come back 401; the log line keeps them distinguishable.
#[tracing::instrument(name = "Me", skip_all)]
pub async fn me<T>(
    State(token_service): State<T>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AuthApiError>
where
    T: TokenService + Clone + 'static,
{
    let token = extract_bearer_token(&headers)?;

    let claims = token_service.verify(token).map_err(|error| {
        tracing::debug!(%error, "token rejected");
        error
    })?;

    Ok(Json(json!({ "email": claims.sub, "role": claims.role })))
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthApiError> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AuthApiError::MissingToken)
}
