//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` + `Validate` request DTO carrying the field rules
//! - Plain create/update inputs handed to the repositories

pub mod admin;
pub mod product;
pub mod variant;
