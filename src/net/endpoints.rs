//! Intended backend endpoint paths and demo timing constants.
//!
//! These paths are a placeholder contract only. Nothing in the crate calls
//! them; when a real backend lands, the analysis provider and session
//! service are the integration points.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const BASE_URL: &str = "/api";

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_SIGNUP: &str = "/auth/signup";
pub const AUTH_LOGOUT: &str = "/auth/logout";
pub const AUTH_VERIFY: &str = "/auth/verify";

pub const ANALYSIS_VOICE: &str = "/analysis/voice";
pub const ANALYSIS_FACE: &str = "/analysis/face";
pub const ANALYSIS_TEXT: &str = "/analysis/text";
pub const ANALYSIS_FUSION: &str = "/analysis/fusion";

pub const USER_PROFILE: &str = "/user/profile";
pub const USER_REPORTS: &str = "/user/reports";
pub const USER_HISTORY: &str = "/user/history";

pub const FEEDBACK: &str = "/feedback";

/// Full URL for an endpoint path.
pub fn endpoint_url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// Simulated network latency for login/signup.
pub const AUTH_DELAY_MS: u32 = 1000;

/// Simulated processing latency before an analysis call resolves.
pub const ANALYSIS_DELAY_MS: u32 = 3000;
