//! Shared response envelope types for API handlers.
//!
//! Single-resource responses use `{ "message": ..., "data": ... }`; list
//! responses add a `meta` pagination block.

use serde::Serialize;
use trade_core::pagination::PageMeta;

/// Standard `{ "message", "data" }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::new("Successfully fetched specific product!", product)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self { message, data }
    }
}

/// `{ "message", "data": [...], "meta": {limit, offset, total, totalPage} }`.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub message: &'static str,
    pub data: Vec<T>,
    pub meta: PageMeta,
}
