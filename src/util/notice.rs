//! Synchronous blocking notice.
//!
//! Placeholder surface for every action that would call a real model or
//! backend: the user gets a modal browser alert stating the integration is
//! pending. Replaced wholesale once real integrations land.

pub fn blocking_notice(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
