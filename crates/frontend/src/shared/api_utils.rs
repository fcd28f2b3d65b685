//! API utilities for frontend-DocumentService communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for DocumentService requests
///
/// Constructs the base URL from the current window location,
/// using port 8000 for the DocumentService backend.
///
/// # Returns
/// - Base URL like "http://localhost:8000" or "https://example.com:8000"
/// - Empty string if window is not available
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::api_base;
/// let url = format!("{}/upload_pdf/", api_base());
/// ```
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full DocumentService URL from a path
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("/ask_question/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
