//! API endpoint configuration.
//!
//! The bundle is static, so the base URL is fixed at build time through the
//! `RENTAL_API_BASE_URL` environment variable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin (and optional prefix) every endpoint path is appended to.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    pub fn from_build_env() -> Self {
        Self::new(option_env!("RENTAL_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Absolute URL for an endpoint path starting with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
