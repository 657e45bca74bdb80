//! Repository for the `products` table.

use sqlx::PgPool;
use trade_core::types::DbId;
use uuid::Uuid;

use super::filter_pattern;
use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, uuid, name, image_url, admin_id, created_at, updated_at";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product owned by `input.admin_id`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, image_url, admin_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(input.admin_id)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its public UUID.
    pub async fn find_by_uuid(pool: &PgPool, uuid: Uuid) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE uuid = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(uuid)
            .fetch_optional(pool)
            .await
    }

    /// List one page of products ordered by id.
    ///
    /// When `name_filter` is non-blank only products whose name contains it
    /// (case-insensitive) are returned.
    pub async fn list(
        pool: &PgPool,
        name_filter: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE ($1::text IS NULL OR name ILIKE $1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(filter_pattern(name_filter))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count products matching the same filter as [`ProductRepo::list`].
    pub async fn count(pool: &PgPool, name_filter: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE ($1::text IS NULL OR name ILIKE $1)",
        )
        .bind(filter_pattern(name_filter))
        .fetch_one(pool)
        .await
    }

    /// Resolve the owning admin of a product. `None` if the product does not exist.
    pub async fn find_owner(pool: &PgPool, uuid: Uuid) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT admin_id FROM products WHERE uuid = $1")
            .bind(uuid)
            .fetch_optional(pool)
            .await
    }

    /// Whether the product with internal id `product_id` belongs to `admin_id`.
    pub async fn is_owned_by(
        pool: &PgPool,
        product_id: DbId,
        admin_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM products WHERE id = $1 AND admin_id = $2)",
        )
        .bind(product_id)
        .bind(admin_id)
        .fetch_one(pool)
        .await
    }

    /// Update name (and image URL when supplied) of a product owned by `admin_id`.
    ///
    /// Refreshes `updated_at`. Returns `None` if no product with that UUID is
    /// owned by the admin.
    pub async fn update_owned(
        pool: &PgPool,
        uuid: Uuid,
        admin_id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = $3,
                image_url = COALESCE($4, image_url),
                updated_at = NOW()
             WHERE uuid = $1 AND admin_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(uuid)
            .bind(admin_id)
            .bind(&input.name)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product owned by `admin_id`, returning its prior state.
    ///
    /// Variants of the product are removed by the `ON DELETE CASCADE` foreign key.
    pub async fn delete_owned(
        pool: &PgPool,
        uuid: Uuid,
        admin_id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query =
            format!("DELETE FROM products WHERE uuid = $1 AND admin_id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Product>(&query)
            .bind(uuid)
            .bind(admin_id)
            .fetch_optional(pool)
            .await
    }
}
