//! One-shot blocking user notification.
//!
//! Wraps `window.alert`. Requires a browser environment; outside of it the
//! call is a no-op.

/// Show a blocking acknowledgment dialog with the given message.
pub fn acknowledge(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
