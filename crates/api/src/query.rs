//! Shared query parameter types for API handlers.

use serde::Deserialize;
use trade_core::error::CoreError;
use trade_core::pagination::PageRequest;

/// Query parameters for `GET /products` (`?name=&pageSize=&pageNum=`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListParams {
    pub name: Option<String>,
    pub page_size: Option<i64>,
    pub page_num: Option<i64>,
}

impl ProductListParams {
    pub fn page(&self) -> Result<PageRequest, CoreError> {
        PageRequest::new(self.page_size, self.page_num)
    }
}

/// Query parameters for `GET /products/variants` (`?variantName=&pageSize=&pageNum=`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantListParams {
    pub variant_name: Option<String>,
    pub page_size: Option<i64>,
    pub page_num: Option<i64>,
}

impl VariantListParams {
    pub fn page(&self) -> Result<PageRequest, CoreError> {
        PageRequest::new(self.page_size, self.page_num)
    }
}
