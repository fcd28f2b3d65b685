//! Blocking user notifications via the browser alert dialog

/// Show a blocking alert. No-op outside a browser window.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
