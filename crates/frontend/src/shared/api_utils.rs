//! API utilities for frontend-backend communication
//!
//! Builds endpoint URLs from the installed configuration.

use crate::shared::config::config;

/// Get the base URL for API requests
///
/// Uses `api.base_url` when configured. Otherwise the origin is derived
/// from the current window location with `api.port`.
///
/// # Returns
/// - API origin like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let api = &config().api;
    if let Some(base) = api.base_url.as_deref().filter(|b| !b.trim().is_empty()) {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Build a full API URL from an endpoint path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("sales/reports/");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), &config().api.prefix, path)
}

/// Join origin, prefix and path with exactly one slash between parts
pub fn join_url(base: &str, prefix: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let prefix = prefix.trim_matches('/');
    let path = path.trim_start_matches('/');
    if prefix.is_empty() {
        format!("{}/{}", base, path)
    } else {
        format!("{}/{}/{}", base, prefix, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000", "/api/", "sales/reports/"),
            "http://localhost:8000/api/sales/reports/"
        );
        assert_eq!(
            join_url("https://erp.example.com/", "api", "/get-username/"),
            "https://erp.example.com/api/get-username/"
        );
        assert_eq!(join_url("http://h:1", "", "sales/overview/"), "http://h:1/sales/overview/");
    }
}
