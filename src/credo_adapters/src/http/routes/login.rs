use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use serde_json::json;

use credo_application::LoginUseCase;
use credo_core::{AccountStore, CredentialHasher, Email, Password, TokenService};

use super::{AuthApiError, require_credentials};

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

/// POST /api/login
///
/// 200 `{token}` on success, 401 for unknown accounts or wrong passwords,
/// 403 once the account is locked.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S, H, T>(
    State((account_store, hasher, token_service)): State<(S, H, T)>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: AccountStore + Clone + 'static,
    H: CredentialHasher + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let (email, password) = require_credentials(request.email, request.password)?;
    // A structurally invalid email cannot name an account, so it gets the
    // same generic rejection as an unknown one.
    let email = Email::try_from(email).map_err(|_| AuthApiError::InvalidCredentials)?;
    let password = Password::try_from(password)?;

    let token = LoginUseCase::new(&account_store, &hasher, &token_service)
        .execute(email, password)
        .await?;

    Ok(Json(json!({ "token": token })))
}
