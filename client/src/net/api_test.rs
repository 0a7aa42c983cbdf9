use super::*;

// =============================================================================
// ApiError::from_status
// =============================================================================

#[test]
fn from_status_maps_auth_statuses() {
    assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403, Some("nope".into())), ApiError::Forbidden);
    assert_eq!(ApiError::from_status(404, None), ApiError::NotFound);
}

#[test]
fn from_status_keeps_validation_message() {
    assert_eq!(
        ApiError::from_status(422, Some("Email already registered".into())),
        ApiError::Validation("Email already registered".into())
    );
}

#[test]
fn from_status_validation_without_message_names_status() {
    assert_eq!(ApiError::from_status(400, None), ApiError::Validation("request rejected: 400".into()));
    assert_eq!(ApiError::from_status(409, Some("   ".into())), ApiError::Validation("request rejected: 409".into()));
}

#[test]
fn from_status_other_codes_are_server_errors() {
    assert_eq!(ApiError::from_status(500, None), ApiError::Server(500));
    assert_eq!(ApiError::from_status(502, Some("bad gateway".into())), ApiError::Server(502));
}

#[test]
fn toast_key_groups_errors() {
    assert_eq!(ApiError::Network("x".into()).toast_key(), "error.network");
    assert_eq!(ApiError::Unavailable.toast_key(), "error.network");
    assert_eq!(ApiError::Decode("x".into()).toast_key(), "error.server");
    assert_eq!(ApiError::Forbidden.toast_key(), "error.forbidden");
}

#[test]
fn toast_text_only_for_validation() {
    assert_eq!(ApiError::Validation("bad date".into()).toast_text(), Some("bad date"));
    assert_eq!(ApiError::Server(500).toast_text(), None);
}

// =============================================================================
// Helpers
// =============================================================================

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn login_redirect_path_carries_next() {
    assert_eq!(login_redirect_path("/dashboard/orders"), "/login?next=/dashboard/orders");
}

#[test]
fn login_redirect_path_skips_root_and_login() {
    assert_eq!(login_redirect_path("/"), "/login");
    assert_eq!(login_redirect_path(""), "/login");
    assert_eq!(login_redirect_path("/login"), "/login");
}

#[test]
fn decode_body_treats_empty_as_null() {
    let (): () = decode_body("").unwrap();
    let none: Option<u32> = decode_body("  ").unwrap();
    assert_eq!(none, None);
}

#[test]
fn decode_body_reports_malformed_json() {
    let err = decode_body::<Vec<u32>>("{not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn error_body_prefers_message_over_error() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"m","error":"e"}"#).unwrap();
    assert_eq!(body.into_message(), Some("m".to_owned()));
    let body: ErrorBody = serde_json::from_str(r#"{"error":"e"}"#).unwrap();
    assert_eq!(body.into_message(), Some("e".to_owned()));
}

#[test]
fn stored_token_is_none_off_browser() {
    assert_eq!(stored_token(), None);
}

#[test]
fn method_names_are_uppercase() {
    assert_eq!(Method::Patch.as_str(), "PATCH");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[test]
fn captured_credentials_keep_their_token() {
    let creds = Credentials::Captured("tok".into());
    assert_eq!(creds.token(), Some("tok".to_owned()));
    assert!(!creds.intercepts_unauthorized());
}

#[test]
fn session_credentials_read_storage_and_intercept() {
    assert_eq!(Credentials::Session.token(), None);
    assert!(Credentials::Session.intercepts_unauthorized());
}
