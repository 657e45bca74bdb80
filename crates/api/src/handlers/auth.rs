//! Handlers for the `/auth` resource (register, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use trade_core::types::{DbId, Timestamp};
use trade_db::models::admin::{AdminLoginRequest, AdminRegisterRequest};
use uuid::Uuid;

use crate::auth::jwt::issue_token;
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::services;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Admin returned by `POST /auth/register`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredAdmin {
    pub id: DbId,
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

/// Credentials returned by `POST /auth/login`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub email: String,
    pub name: String,
    pub access_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// The body is decoded here but validated by the service, after the email
/// uniqueness check.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<AdminRegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<RegisteredAdmin>>)> {
    let admin = services::admin::register(&state.pool, input).await?;

    let data = RegisteredAdmin {
        id: admin.id,
        uuid: admin.uuid,
        name: admin.name,
        email: admin.email,
        created_at: admin.created_at,
    };

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Successfully created user!", data)),
    ))
}

/// POST /auth/login
///
/// Check email + password and return a signed access token.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<AdminLoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    let admin = services::admin::login(&state.pool, input).await?;

    let access_token = issue_token(admin.id, &admin.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    let data = LoginResponse {
        email: admin.email,
        name: admin.name,
        access_token,
    };

    Ok(Json(DataResponse::new("User logged successfully", data)))
}
