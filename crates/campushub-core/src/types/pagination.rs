//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default number of items returned by a list operation.
const DEFAULT_LIMIT: i64 = 100;
/// Hard cap on the number of items returned by a single list operation.
const MAX_LIMIT: i64 = 1000;

/// Offset/limit window for paginated queries.
///
/// Every list endpoint accepts `skip` and `limit` query parameters; this
/// type carries them down to the repositories after clamping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Page {
    /// Number of items to skip from the start of the result set.
    #[serde(default)]
    pub skip: i64,
    /// Maximum number of items to return.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Page {
    /// Create a page window, clamping out-of-range values.
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip: skip.max(0),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// The SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        self.skip
    }

    /// The SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}
