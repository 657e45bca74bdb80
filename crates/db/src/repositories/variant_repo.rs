//! Repository for the `variants` table.

use sqlx::PgPool;
use trade_core::types::DbId;
use uuid::Uuid;

use super::filter_pattern;
use crate::models::variant::{CreateVariant, UpdateVariant, Variant};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, uuid, variant_name, quantity, product_id, created_at, updated_at";

/// Same columns qualified with the `v` alias, for statements joining `products p`.
const QUALIFIED_COLUMNS: &str =
    "v.id, v.uuid, v.variant_name, v.quantity, v.product_id, v.created_at, v.updated_at";

/// Provides CRUD operations for variants.
pub struct VariantRepo;

impl VariantRepo {
    /// Insert a new variant, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVariant) -> Result<Variant, sqlx::Error> {
        let query = format!(
            "INSERT INTO variants (variant_name, quantity, product_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Variant>(&query)
            .bind(&input.variant_name)
            .bind(input.quantity)
            .bind(input.product_id)
            .fetch_one(pool)
            .await
    }

    /// Find a variant by its public UUID.
    pub async fn find_by_uuid(pool: &PgPool, uuid: Uuid) -> Result<Option<Variant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM variants WHERE uuid = $1");
        sqlx::query_as::<_, Variant>(&query)
            .bind(uuid)
            .fetch_optional(pool)
            .await
    }

    /// List one page of variants ordered by id, optionally filtered by a
    /// case-insensitive substring of `variant_name`.
    pub async fn list(
        pool: &PgPool,
        name_filter: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Variant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM variants
             WHERE ($1::text IS NULL OR variant_name ILIKE $1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Variant>(&query)
            .bind(filter_pattern(name_filter))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count variants matching the same filter as [`VariantRepo::list`].
    pub async fn count(pool: &PgPool, name_filter: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM variants WHERE ($1::text IS NULL OR variant_name ILIKE $1)",
        )
        .bind(filter_pattern(name_filter))
        .fetch_one(pool)
        .await
    }

    /// All variants belonging to any of `product_ids`, ordered by id.
    pub async fn list_for_products(
        pool: &PgPool,
        product_ids: &[DbId],
    ) -> Result<Vec<Variant>, sqlx::Error> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query =
            format!("SELECT {COLUMNS} FROM variants WHERE product_id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Variant>(&query)
            .bind(product_ids)
            .fetch_all(pool)
            .await
    }

    /// Resolve the owning admin of a variant through its product.
    pub async fn find_owner(pool: &PgPool, uuid: Uuid) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT p.admin_id
             FROM variants v
             JOIN products p ON v.product_id = p.id
             WHERE v.uuid = $1",
        )
        .bind(uuid)
        .fetch_optional(pool)
        .await
    }

    /// Overwrite a variant whose product is owned by `admin_id`.
    ///
    /// Refreshes `updated_at`. Returns `None` if no such variant exists for
    /// that owner.
    pub async fn update_owned(
        pool: &PgPool,
        uuid: Uuid,
        admin_id: DbId,
        input: &UpdateVariant,
    ) -> Result<Option<Variant>, sqlx::Error> {
        let query = format!(
            "UPDATE variants v SET
                variant_name = $3,
                quantity = $4,
                product_id = $5,
                updated_at = NOW()
             FROM products p
             WHERE v.product_id = p.id AND v.uuid = $1 AND p.admin_id = $2
             RETURNING {QUALIFIED_COLUMNS}"
        );
        sqlx::query_as::<_, Variant>(&query)
            .bind(uuid)
            .bind(admin_id)
            .bind(&input.variant_name)
            .bind(input.quantity)
            .bind(input.product_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a variant whose product is owned by `admin_id`, returning its prior state.
    pub async fn delete_owned(
        pool: &PgPool,
        uuid: Uuid,
        admin_id: DbId,
    ) -> Result<Option<Variant>, sqlx::Error> {
        let query = format!(
            "DELETE FROM variants v
             USING products p
             WHERE v.product_id = p.id AND v.uuid = $1 AND p.admin_id = $2
             RETURNING {QUALIFIED_COLUMNS}"
        );
        sqlx::query_as::<_, Variant>(&query)
            .bind(uuid)
            .bind(admin_id)
            .fetch_optional(pool)
            .await
    }
}
