//! Fixed-duration delays simulating network latency.
//!
//! The product has no backend; auth and demo flows wait a fixed interval so
//! the UI behaves as it would against a real server. The delays perform no
//! I/O, cannot be cancelled, and resolve immediately outside the browser.

pub async fn artificial_delay(ms: u32) {
    #[cfg(feature = "csr")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(feature = "csr"))]
    {
        let _ = ms;
    }
}
