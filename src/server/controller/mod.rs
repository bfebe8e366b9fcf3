//! HTTP request handlers.
//!
//! Controllers authenticate the caller through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs into domain parameters, call the matching service and convert the result
//! back into DTOs. Business rules live in the service layer.

use serde::Deserialize;
use utoipa::IntoParams;

pub mod course;
pub mod topic;
pub mod training;
pub mod user;

/// Offset pagination used by course, topic and user listings.
#[derive(Deserialize, IntoParams)]
pub struct OffsetParams {
    /// Number of entries to skip
    #[serde(default)]
    pub offset: u64,
    /// Maximum number of entries to return
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

/// Page pagination used by training listings. Pages start at 1.
#[derive(Deserialize, IntoParams)]
pub struct PageParams {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: u64,
    /// Entries per page
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageParams {
    /// Zero-based page index; page 0 is treated as page 1.
    pub fn page_index(&self) -> u64 {
        self.page.saturating_sub(1)
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    10
}
