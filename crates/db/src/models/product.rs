//! Product entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trade_core::types::{DbId, Timestamp};
use uuid::Uuid;
use validator::Validate;

use crate::models::variant::Variant;

/// A product row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub uuid: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    /// Owning admin; fixed at creation.
    pub admin_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A product together with all of its variants, as returned by list/get.
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithVariants {
    #[serde(flatten)]
    pub product: Product,
    pub variants: Vec<Variant>,
}

/// Validated fields of a product create/update payload.
///
/// The optional image travels separately (multipart file) and is resolved
/// to a URL before reaching the repository.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductRequest {
    #[serde(default)]
    #[validate(length(min = 3, max = 100))]
    pub name: String,
}

/// DTO for creating a new product.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub image_url: Option<String>,
    pub admin_id: DbId,
}

/// DTO for updating a product. `image_url` is only replaced when `Some`.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub name: String,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use trade_core::error::CoreError;
    use trade_core::validation::validate_input;

    use super::*;

    #[test]
    fn name_length_is_enforced() {
        let too_long = "x".repeat(101);
        for name in ["", "ab", too_long.as_str()] {
            let req = ProductRequest { name: name.into() };
            let Err(CoreError::InvalidFields(fields)) = validate_input(&req) else {
                panic!("expected field errors for {name:?}");
            };
            assert_eq!(fields["name"], "length");
        }
        assert!(validate_input(&ProductRequest { name: "Widget".into() }).is_ok());
    }
}
