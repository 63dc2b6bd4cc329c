//! Pagination query parameters.

use serde::{Deserialize, Serialize};

use reliefhub_core::types::PageRequest;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<u64>,
    /// Items per page (default: 10, max: 100).
    pub per_page: Option<u64>,
    /// Optional status filter, used by report listings.
    pub status: Option<String>,
}

impl PaginationParams {
    /// Converts to a clamped `PageRequest`.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page, self.per_page)
    }
}
