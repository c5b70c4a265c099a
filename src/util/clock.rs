//! Wall-clock access for fabricated timestamps.

/// Milliseconds since the Unix epoch; zero outside the browser.
pub fn now_ms() -> i64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}
