use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    let api = HttpAuthApi::new("https://api.example.test/");
    assert_eq!(api.endpoint(LOGIN_ENDPOINT), "https://api.example.test/login");
    assert_eq!(api.endpoint(SIGNUP_ENDPOINT), "https://api.example.test/post");
}

#[test]
fn from_config_uses_compiled_base_url() {
    let api = HttpAuthApi::from_config();
    assert_eq!(api.endpoint(LOGIN_ENDPOINT), format!("{}/login", crate::config::api_base_url()));
}

#[test]
fn auth_error_messages_are_readable() {
    assert_eq!(AuthError::Status { status: 401 }.to_string(), "request failed: 401");
    assert_eq!(AuthError::Network("timeout".to_owned()).to_string(), "network error: timeout");
    assert_eq!(AuthError::Unavailable.to_string(), "not available on server");
}

#[test]
fn login_status_200_reads_the_body() {
    assert_eq!(classify_login_status(200), Ok(None));
}

#[test]
fn login_status_other_2xx_is_an_unexpected_reply() {
    assert_eq!(classify_login_status(204), Ok(Some(LoginReply::Unexpected { status: 204 })));
    assert_eq!(classify_login_status(201), Ok(Some(LoginReply::Unexpected { status: 201 })));
}

#[test]
fn login_status_outside_2xx_is_an_error() {
    for status in [199, 301, 401, 500] {
        assert_eq!(classify_login_status(status), Err(AuthError::Status { status }), "{status}");
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_calls_are_unavailable_outside_the_browser() {
    use crate::net::types::Role;

    let api = HttpAuthApi::new("http://localhost");
    let login = LoginRequest { email: "a@b.com".to_owned(), password: "x".to_owned() };
    assert_eq!(futures::executor::block_on(api.login(&login)), Err(AuthError::Unavailable));

    let signup = SignupRequest {
        name: "Ada".to_owned(),
        email: "a@b.com".to_owned(),
        password: "Secret1!x".to_owned(),
        mobile_number: "9876543210".to_owned(),
        role: Role::User,
        admin_token: None,
    };
    assert_eq!(futures::executor::block_on(api.register(&signup)), Err(AuthError::Unavailable));
}
