use super::*;

// =============================================================
// parse_signin_body
// =============================================================

#[test]
fn parse_signin_body_reads_full_body() {
    let body = parse_signin_body(r#"{"message": "Login successful", "redirect": "/dashboard"}"#);
    assert_eq!(body.message.as_deref(), Some("Login successful"));
    assert_eq!(body.redirect.as_deref(), Some("/dashboard"));
}

#[test]
fn parse_signin_body_downgrades_malformed_json_to_empty() {
    assert_eq!(parse_signin_body("<html>502 Bad Gateway</html>"), SigninResponse::default());
    assert_eq!(parse_signin_body(""), SigninResponse::default());
}

#[test]
fn parse_signin_body_downgrades_wrong_shape_to_empty() {
    assert_eq!(parse_signin_body("[1, 2, 3]"), SigninResponse::default());
}

// =============================================================
// classify_response
// =============================================================

#[test]
fn classify_response_success_uses_server_message() {
    let body = parse_signin_body(r#"{"message": "Registration successful"}"#);
    let outcome = classify_response(201, body).unwrap();
    assert_eq!(outcome.message, "Registration successful");
    assert_eq!(outcome.redirect, None);
}

#[test]
fn classify_response_success_defaults_message() {
    let outcome = classify_response(200, SigninResponse::default()).unwrap();
    assert_eq!(outcome.message, "Sign in successful!");
}

#[test]
fn classify_response_success_treats_blank_message_as_missing() {
    let body = parse_signin_body(r#"{"message": ""}"#);
    let outcome = classify_response(200, body).unwrap();
    assert_eq!(outcome.message, "Sign in successful!");
}

#[test]
fn classify_response_success_carries_redirect() {
    let body = parse_signin_body(r#"{"message": "Login successful", "redirect": "/dashboard"}"#);
    let outcome = classify_response(200, body).unwrap();
    assert_eq!(outcome.redirect.as_deref(), Some("/dashboard"));
}

#[test]
fn classify_response_success_discards_blank_redirect() {
    let body = parse_signin_body(r#"{"message": "Login successful", "redirect": ""}"#);
    let outcome = classify_response(200, body).unwrap();
    assert_eq!(outcome.redirect, None);
}

#[test]
fn classify_response_failure_uses_server_message() {
    let body = parse_signin_body(r#"{"message": "Invalid email or password"}"#);
    let err = classify_response(401, body).unwrap_err();
    assert_eq!(err, "Invalid email or password");
}

#[test]
fn classify_response_failure_defaults_message() {
    let err = classify_response(500, SigninResponse::default()).unwrap_err();
    assert_eq!(err, "Sign in failed");
}

#[test]
fn classify_response_failure_treats_blank_message_as_missing() {
    let body = parse_signin_body(r#"{"message": ""}"#);
    let err = classify_response(403, body).unwrap_err();
    assert_eq!(err, "Sign in failed");
}

#[test]
fn classify_response_treats_only_2xx_as_success() {
    assert!(classify_response(199, SigninResponse::default()).is_err());
    assert!(classify_response(200, SigninResponse::default()).is_ok());
    assert!(classify_response(204, SigninResponse::default()).is_ok());
    assert!(classify_response(299, SigninResponse::default()).is_ok());
    assert!(classify_response(300, SigninResponse::default()).is_err());
    assert!(classify_response(403, SigninResponse::default()).is_err());
}
