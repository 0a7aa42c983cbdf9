use super::*;

#[test]
fn unauthorized_login_means_bad_credentials() {
    assert_eq!(login_error_key(&ApiError::Unauthorized), Some("auth.invalid_credentials"));
    assert_eq!(login_error_key(&ApiError::NotFound), Some("auth.invalid_credentials"));
}

#[test]
fn forbidden_login_means_disabled_account() {
    assert_eq!(login_error_key(&ApiError::Forbidden), Some("auth.account_disabled"));
}

#[test]
fn other_failures_use_generic_error_text() {
    assert_eq!(login_error_key(&ApiError::Server(500)), None);
    assert_eq!(login_error_key(&ApiError::Network("offline".into())), None);
}
