//! Ownership guard for single-resource mutations.
//!
//! The guard resolves the owning admin of the addressed product (or of the
//! variant's parent product) and compares it with the token's admin id.
//! A missing resource yields 404; a foreign one yields 401 with
//! [`NOT_OWNER_MESSAGE`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::PgPool;
use trade_core::error::CoreError;
use trade_core::types::DbId;
use trade_db::repositories::{ProductRepo, VariantRepo};
use uuid::Uuid;

use crate::error::{AppError, AppResult, NOT_OWNER_MESSAGE};
use crate::extract::ApiPath;
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Ensure the product identified by `uuid` exists and belongs to `admin_id`.
pub async fn authorize_product(pool: &PgPool, uuid: Uuid, admin_id: DbId) -> AppResult<()> {
    let owner = ProductRepo::find_owner(pool, uuid)
        .await?
        .ok_or_else(|| CoreError::not_found("Product", uuid))?;
    check_owner(owner, admin_id)
}

/// Ensure the variant identified by `uuid` exists and its product belongs to `admin_id`.
pub async fn authorize_variant(pool: &PgPool, uuid: Uuid, admin_id: DbId) -> AppResult<()> {
    let owner = VariantRepo::find_owner(pool, uuid)
        .await?
        .ok_or_else(|| CoreError::not_found("Variant", uuid))?;
    check_owner(owner, admin_id)
}

fn check_owner(owner: DbId, admin_id: DbId) -> AppResult<()> {
    if owner != admin_id {
        tracing::warn!(owner, admin_id, "Ownership check failed");
        return Err(CoreError::Forbidden(NOT_OWNER_MESSAGE.into()).into());
    }
    Ok(())
}

/// Authenticated admin who owns the product addressed by the `{uuid}` path segment.
#[derive(Debug, Clone)]
pub struct ProductOwner {
    pub admin: AuthAdmin,
    pub uuid: Uuid,
}

impl FromRequestParts<AppState> for ProductOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = AuthAdmin::from_request_parts(parts, state).await?;
        let ApiPath(uuid) = ApiPath::<Uuid>::from_request_parts(parts, state).await?;
        authorize_product(&state.pool, uuid, admin.admin_id).await?;
        Ok(ProductOwner { admin, uuid })
    }
}

/// Authenticated admin who owns the variant addressed by the `{uuid}` path segment.
#[derive(Debug, Clone)]
pub struct VariantOwner {
    pub admin: AuthAdmin,
    pub uuid: Uuid,
}

impl FromRequestParts<AppState> for VariantOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = AuthAdmin::from_request_parts(parts, state).await?;
        let ApiPath(uuid) = ApiPath::<Uuid>::from_request_parts(parts, state).await?;
        authorize_variant(&state.pool, uuid, admin.admin_id).await?;
        Ok(VariantOwner { admin, uuid })
    }
}
