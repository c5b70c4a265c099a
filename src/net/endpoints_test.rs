use super::*;

#[test]
fn endpoint_url_joins_base_and_path() {
    assert_eq!(endpoint_url(AUTH_LOGIN), "/api/auth/login");
    assert_eq!(endpoint_url(ANALYSIS_VOICE), "/api/analysis/voice");
    assert_eq!(endpoint_url(FEEDBACK), "/api/feedback");
}

#[test]
fn analysis_paths_cover_all_modalities() {
    assert_eq!(ANALYSIS_VOICE, "/analysis/voice");
    assert_eq!(ANALYSIS_FACE, "/analysis/face");
    assert_eq!(ANALYSIS_TEXT, "/analysis/text");
    assert_eq!(ANALYSIS_FUSION, "/analysis/fusion");
}

#[test]
fn auth_paths_match_the_placeholder_contract() {
    assert_eq!(AUTH_LOGIN, "/auth/login");
    assert_eq!(AUTH_SIGNUP, "/auth/signup");
    assert_eq!(AUTH_LOGOUT, "/auth/logout");
    assert_eq!(AUTH_VERIFY, "/auth/verify");
}
