//! Client configuration resolved at compile time.
//!
//! The WASM bundle has no process environment, so the API base URL is baked
//! in from `KBC_API_BASE_URL` when the crate is built.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://kbc-backend-code.onrender.com";

/// Base URL of the remote authentication service, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("KBC_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}
