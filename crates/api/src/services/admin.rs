//! Admin registration and credential checks.

use sqlx::PgPool;
use trade_core::error::CoreError;
use trade_core::validation::validate_input;
use trade_db::models::admin::{AdminLoginRequest, AdminRegisterRequest, AdminResponse, CreateAdmin};
use trade_db::repositories::AdminRepo;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

pub const EMAIL_EXISTS_MESSAGE: &str = "Email already exists";

/// Register a new admin.
///
/// The email is checked for uniqueness before the payload is validated, so a
/// taken address always answers 409.
#[tracing::instrument(skip(pool, input), fields(email = %input.email))]
pub async fn register(pool: &PgPool, input: AdminRegisterRequest) -> AppResult<AdminResponse> {
    if AdminRepo::email_exists(pool, &input.email).await? {
        return Err(CoreError::Conflict(EMAIL_EXISTS_MESSAGE.into()).into());
    }

    validate_input(&input)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let create = CreateAdmin {
        name: input.name,
        email: input.email,
        password_hash,
    };

    // A concurrent registration can still win the race to the unique index.
    let admin = AdminRepo::create(pool, &create).await.map_err(|e| {
        let taken = matches!(
            &e,
            sqlx::Error::Database(db) if db.constraint() == Some("uq_admins_email")
        );
        if taken {
            AppError::Core(CoreError::Conflict(EMAIL_EXISTS_MESSAGE.into()))
        } else {
            AppError::Database(e)
        }
    })?;

    tracing::info!(admin_id = admin.id, "Admin registered");
    Ok(admin.into())
}

/// Check credentials and return the matching admin.
///
/// The caller issues the access token from the returned id and email.
#[tracing::instrument(skip(pool, input), fields(email = %input.email))]
pub async fn login(pool: &PgPool, input: AdminLoginRequest) -> AppResult<AdminResponse> {
    validate_input(&input)?;

    let admin = AdminRepo::find_by_email(pool, &input.email)
        .await?
        .ok_or_else(|| CoreError::not_found("Admin", &input.email))?;

    let valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        tracing::info!(admin_id = admin.id, "Login rejected: wrong password");
        return Err(CoreError::InvalidPassword.into());
    }

    Ok(admin.into())
}
