//! Page-number pagination used by every list endpoint.
//!
//! Callers send `pageSize` and `pageNum` (1-based). The repository layer
//! receives a `LIMIT`/`OFFSET` pair and the response carries a [`PageMeta`]
//! block with `totalPage = ceil(total / limit)`.

use serde::Serialize;

use crate::error::CoreError;

/// Page size applied when the caller does not send one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Page number applied when the caller does not send one.
pub const DEFAULT_PAGE_NUM: i64 = 1;

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_size: i64,
    page_num: i64,
}

impl PageRequest {
    /// Build a page request from optional query values.
    ///
    /// Rejects `page_num < 1` and `page_size < 1` so that no service call is
    /// ever made with a negative offset or a zero divisor.
    pub fn new(page_size: Option<i64>, page_num: Option<i64>) -> Result<Self, CoreError> {
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        let page_num = page_num.unwrap_or(DEFAULT_PAGE_NUM);

        if page_num < 1 {
            return Err(CoreError::Validation("Invalid page number".into()));
        }
        if page_size < 1 {
            return Err(CoreError::Validation("Invalid page size".into()));
        }

        Ok(Self {
            page_size,
            page_num,
        })
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// `(pageNum - 1) * pageSize`.
    pub fn offset(&self) -> i64 {
        (self.page_num - 1).saturating_mul(self.page_size)
    }

    /// Assemble the metadata block for a page whose query matched `total` rows.
    pub fn meta(&self, total: i64) -> PageMeta {
        PageMeta {
            limit: self.limit(),
            offset: self.offset(),
            total,
            total_page: total_pages(total, self.limit()),
        }
    }
}

/// Pagination metadata returned alongside every list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub limit: i64,
    pub offset: i64,
    pub total: i64,
    pub total_page: i64,
}

/// `ceil(total / limit)` in integer arithmetic. A non-positive limit yields 0.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 || total <= 0 {
        return 0;
    }
    total / limit + i64::from(total % limit != 0)
}
