//! Business rules between the handlers and the repositories.
//!
//! Services take typed, already-decoded inputs (request DTOs, the caller's
//! admin id) and return domain values or an [`AppError`](crate::error::AppError).

pub mod admin;
pub mod product;
pub mod variant;
