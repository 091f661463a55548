//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use campushub_core::types::pagination::Page;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Rows to skip (default: 0).
    #[serde(default)]
    pub skip: i64,
    /// Maximum rows to return (default: 100, max: 1000).
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

impl PaginationParams {
    /// Converts to a clamped `Page`.
    pub fn into_page(self) -> Page {
        Page::new(self.skip, self.limit)
    }
}
