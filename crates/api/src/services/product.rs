//! Product rules: creation, paginated listing with variants, and
//! owner-scoped update/delete.

use std::collections::HashMap;

use sqlx::PgPool;
use trade_core::error::CoreError;
use trade_core::types::DbId;
use trade_db::models::product::{
    CreateProduct, Product, ProductRequest, ProductWithVariants, UpdateProduct,
};
use trade_db::models::variant::Variant;
use trade_db::repositories::{ProductRepo, VariantRepo};
use uuid::Uuid;

use crate::error::AppResult;

#[tracing::instrument(skip(pool, input, image_url))]
pub async fn create(
    pool: &PgPool,
    input: ProductRequest,
    image_url: Option<String>,
    admin_id: DbId,
) -> AppResult<Product> {
    let create = CreateProduct {
        name: input.name,
        image_url,
        admin_id,
    };
    let product = ProductRepo::create(pool, &create).await?;
    tracing::info!(product_id = product.id, "Product created");
    Ok(product)
}

/// One page of products, each with its variants, plus the number of
/// products matching `name_filter`.
#[tracing::instrument(skip(pool))]
pub async fn list(
    pool: &PgPool,
    limit: i64,
    offset: i64,
    name_filter: Option<&str>,
) -> AppResult<(Vec<ProductWithVariants>, i64)> {
    let products = ProductRepo::list(pool, name_filter, limit, offset).await?;
    let total = ProductRepo::count(pool, name_filter).await?;

    let ids: Vec<DbId> = products.iter().map(|p| p.id).collect();
    let variants = VariantRepo::list_for_products(pool, &ids).await?;

    Ok((attach_variants(products, variants), total))
}

#[tracing::instrument(skip(pool))]
pub async fn get_by_uuid(pool: &PgPool, uuid: Uuid) -> AppResult<ProductWithVariants> {
    let product = ProductRepo::find_by_uuid(pool, uuid)
        .await?
        .ok_or_else(|| CoreError::not_found("Product", uuid))?;
    let variants = VariantRepo::list_for_products(pool, &[product.id]).await?;

    Ok(ProductWithVariants { product, variants })
}

/// Replace the name and, when a new image was uploaded, the image URL.
#[tracing::instrument(skip(pool, input, image_url))]
pub async fn update(
    pool: &PgPool,
    input: ProductRequest,
    image_url: Option<String>,
    uuid: Uuid,
    admin_id: DbId,
) -> AppResult<Product> {
    let update = UpdateProduct {
        name: input.name,
        image_url,
    };
    let product = ProductRepo::update_owned(pool, uuid, admin_id, &update)
        .await?
        .ok_or_else(|| CoreError::not_found("Product", uuid))?;
    tracing::info!(product_id = product.id, "Product updated");
    Ok(product)
}

/// Delete a product (its variants go with it) and return the removed row.
#[tracing::instrument(skip(pool))]
pub async fn delete(pool: &PgPool, uuid: Uuid, admin_id: DbId) -> AppResult<Product> {
    let product = ProductRepo::delete_owned(pool, uuid, admin_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Product", uuid))?;
    tracing::info!(product_id = product.id, "Product deleted");
    Ok(product)
}

/// Group variants under their products, keeping the product order.
fn attach_variants(products: Vec<Product>, variants: Vec<Variant>) -> Vec<ProductWithVariants> {
    let mut by_product: HashMap<DbId, Vec<Variant>> = HashMap::new();
    for variant in variants {
        by_product.entry(variant.product_id).or_default().push(variant);
    }

    products
        .into_iter()
        .map(|product| {
            let variants = by_product.remove(&product.id).unwrap_or_default();
            ProductWithVariants { product, variants }
        })
        .collect()
}
