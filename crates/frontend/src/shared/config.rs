//! Client configuration.
//!
//! The API location can be fixed at build time with `DONATION_API_BASE_URL`;
//! otherwise the API is expected on the page's host, port [`DEFAULT_API_PORT`].

pub use crate::shared::pagination::DEFAULT_WINDOW_SIZE;

pub const DEFAULT_API_PORT: u16 = 8000;

/// Prefix of every REST route
pub const API_PREFIX: &str = "/api/v1";

/// Cards per page on the public campaigns page
pub const CAMPAIGNS_PAGE_SIZE: u32 = 12;

/// Rows per page on admin tables
pub const ADMIN_PAGE_SIZE: u32 = 10;

pub const ADMIN_PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// Delay before a typed search is submitted
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Build-time API base URL, if one was configured
pub fn configured_api_base() -> Option<&'static str> {
    option_env!("DONATION_API_BASE_URL")
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Campaign amounts carry no currency of their own
pub const CAMPAIGN_CURRENCY: &str = "USD";
