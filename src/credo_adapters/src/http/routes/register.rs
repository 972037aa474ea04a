use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use serde_json::json;

use credo_application::RegisterUseCase;
use credo_core::{AccountStore, Blocklist, CredentialHasher, Email, MxResolver, Password};

use super::{AuthApiError, require_credentials};

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

/// POST /api/register
///
/// 201 `{ok: true}` on success; registration never returns a token.
#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<S, M, H>(
    State((account_store, blocklist, mx_resolver, hasher)): State<(S, Arc<Blocklist>, M, H)>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: AccountStore + Clone + 'static,
    M: MxResolver + Clone + 'static,
    H: CredentialHasher + Clone + 'static,
{
    let (email, password) = require_credentials(request.email, request.password)?;
    let email = Email::try_from(email)?;
    let password = Password::try_from(password)?;

    RegisterUseCase::new(&account_store, &blocklist, &mx_resolver, &hasher)
        .execute(email, password)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "ok": true }))))
}
