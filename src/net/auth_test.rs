use super::*;
use futures::executor::block_on;

// =============================================================
// AuthConfig
// =============================================================

#[test]
fn default_config_uses_stockview_token_key() {
    assert_eq!(AuthConfig::default().token_key, "stockview_token");
}

#[test]
fn endpoints_join_base_and_path() {
    let config = AuthConfig { api_base: "/api".to_owned(), token_key: "t".to_owned() };
    assert_eq!(config.login_url(), "/api/auth/login");
    assert_eq!(config.logout_url(), "/api/auth/logout");
}

#[test]
fn endpoints_tolerate_trailing_slash_on_base() {
    let config = AuthConfig { api_base: "https://quotes.example/api/".to_owned(), token_key: "t".to_owned() };
    assert_eq!(config.login_url(), "https://quotes.example/api/auth/login");
}

// =============================================================
// classify_login_status
// =============================================================

#[test]
fn success_statuses_are_ok() {
    assert_eq!(classify_login_status(200), Ok(()));
    assert_eq!(classify_login_status(201), Ok(()));
}

#[test]
fn no_content_is_not_a_successful_login() {
    assert_eq!(classify_login_status(204), Err(AuthError::Http { status: 204 }));
}

#[test]
fn unauthorized_and_forbidden_are_invalid_credentials() {
    assert_eq!(classify_login_status(401), Err(AuthError::InvalidCredentials));
    assert_eq!(classify_login_status(403), Err(AuthError::InvalidCredentials));
}

#[test]
fn other_statuses_carry_the_status() {
    assert_eq!(classify_login_status(500), Err(AuthError::Http { status: 500 }));
    assert_eq!(classify_login_status(429), Err(AuthError::Http { status: 429 }));
}

// =============================================================
// HttpAuthService without a browser
// =============================================================

#[test]
fn native_build_has_no_session() {
    assert!(!HttpAuthService::new(AuthConfig::default()).is_authenticated());
}

#[test]
fn native_build_login_is_unavailable() {
    let service = HttpAuthService::new(AuthConfig::default());
    let result = block_on(service.login(&Credentials::new("ada", "hunter2")));
    assert_eq!(result, Err(AuthError::Unavailable));
}

#[test]
fn native_build_logout_reports_storage_error() {
    let result = HttpAuthService::new(AuthConfig::default()).logout();
    assert!(matches!(result, Err(AuthError::Storage(_))));
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid username or password");
    assert_eq!(AuthError::Http { status: 502 }.to_string(), "login request failed: 502");
    assert_eq!(AuthError::LoginInProgress.to_string(), "a login is already in progress");
}
