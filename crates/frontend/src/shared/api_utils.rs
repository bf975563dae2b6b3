//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and image sources.

use crate::shared::config::app_config;
use contracts::shared::report::join_url;

/// Get the base URL for API requests
///
/// Uses the configured `api.base_url` when set. Otherwise constructs the
/// base URL from the current window location, using port 3000 for the
/// backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/admin/banner/getBanners", api_base());
/// ```
pub fn api_base() -> String {
    let configured = &app_config().api.base_url;
    if !configured.is_empty() {
        return configured.clone();
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
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/admin/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Image source for a stored upload path
pub fn asset_url(path: &str) -> String {
    join_url(&api_base(), path)
}
