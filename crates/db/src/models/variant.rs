//! Variant entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trade_core::types::{DbId, Timestamp};
use uuid::Uuid;
use validator::Validate;

/// A variant row from the `variants` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: DbId,
    pub uuid: Uuid,
    pub variant_name: String,
    /// Never negative (enforced by `ck_variants_quantity_non_negative`).
    pub quantity: i32,
    pub product_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating or updating a variant.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VariantRequest {
    #[serde(default)]
    #[validate(length(min = 3, max = 100))]
    pub variant_name: String,
    #[validate(required, range(min = 0))]
    pub quantity: Option<i32>,
    #[validate(required, range(min = 1))]
    pub product_id: Option<DbId>,
}

/// DTO for inserting a variant.
#[derive(Debug, Clone)]
pub struct CreateVariant {
    pub variant_name: String,
    pub quantity: i32,
    pub product_id: DbId,
}

/// DTO for overwriting a variant. All fields are replaced.
#[derive(Debug, Clone)]
pub struct UpdateVariant {
    pub variant_name: String,
    pub quantity: i32,
    pub product_id: DbId,
}
