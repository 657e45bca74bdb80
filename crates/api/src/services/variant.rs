//! Variant rules. A variant may only be attached to a product owned by the
//! calling admin, both on create and when an update moves it.

use sqlx::PgPool;
use trade_core::error::CoreError;
use trade_core::types::DbId;
use trade_core::validation::validate_input;
use trade_db::models::variant::{CreateVariant, UpdateVariant, Variant, VariantRequest};
use trade_db::repositories::{ProductRepo, VariantRepo};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

#[tracing::instrument(skip(pool, input))]
pub async fn create(pool: &PgPool, input: VariantRequest, admin_id: DbId) -> AppResult<Variant> {
    let (variant_name, quantity, product_id) = required_fields(input)?;
    ensure_product_owned(pool, product_id, admin_id).await?;

    let create = CreateVariant {
        variant_name,
        quantity,
        product_id,
    };
    let variant = VariantRepo::create(pool, &create).await?;
    tracing::info!(variant_id = variant.id, product_id, "Variant created");
    Ok(variant)
}

/// One page of variants plus the number of variants matching `name_filter`.
#[tracing::instrument(skip(pool))]
pub async fn list(
    pool: &PgPool,
    limit: i64,
    offset: i64,
    name_filter: Option<&str>,
) -> AppResult<(Vec<Variant>, i64)> {
    let variants = VariantRepo::list(pool, name_filter, limit, offset).await?;
    let total = VariantRepo::count(pool, name_filter).await?;
    Ok((variants, total))
}

#[tracing::instrument(skip(pool))]
pub async fn get_by_uuid(pool: &PgPool, uuid: Uuid) -> AppResult<Variant> {
    VariantRepo::find_by_uuid(pool, uuid)
        .await?
        .ok_or_else(|| CoreError::not_found("Variant", uuid).into())
}

/// Overwrite name, quantity and product of an owned variant.
#[tracing::instrument(skip(pool, input))]
pub async fn update(
    pool: &PgPool,
    input: VariantRequest,
    uuid: Uuid,
    admin_id: DbId,
) -> AppResult<Variant> {
    let (variant_name, quantity, product_id) = required_fields(input)?;
    ensure_product_owned(pool, product_id, admin_id).await?;

    let update = UpdateVariant {
        variant_name,
        quantity,
        product_id,
    };
    let variant = VariantRepo::update_owned(pool, uuid, admin_id, &update)
        .await?
        .ok_or_else(|| CoreError::not_found("Variant", uuid))?;
    tracing::info!(variant_id = variant.id, "Variant updated");
    Ok(variant)
}

#[tracing::instrument(skip(pool))]
pub async fn delete(pool: &PgPool, uuid: Uuid, admin_id: DbId) -> AppResult<Variant> {
    let variant = VariantRepo::delete_owned(pool, uuid, admin_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Variant", uuid))?;
    tracing::info!(variant_id = variant.id, "Variant deleted");
    Ok(variant)
}

async fn ensure_product_owned(pool: &PgPool, product_id: DbId, admin_id: DbId) -> AppResult<()> {
    if !ProductRepo::is_owned_by(pool, product_id, admin_id).await? {
        return Err(CoreError::ProductNotOwned(product_id).into());
    }
    Ok(())
}

/// Validate the payload and unwrap its required fields.
fn required_fields(input: VariantRequest) -> Result<(String, i32, DbId), AppError> {
    validate_input(&input)?;
    match (input.quantity, input.product_id) {
        (Some(quantity), Some(product_id)) => Ok((input.variant_name, quantity, product_id)),
        // Unreachable once validation passed.
        _ => Err(CoreError::Validation("quantity and productId are required".into()).into()),
    }
}
