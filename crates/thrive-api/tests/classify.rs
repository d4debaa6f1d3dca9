use thrive_api::error::{classify_error, ApiError};

#[test]
fn unauthorized_maps_to_redirect_variant() {
    let err = classify_error(401, br#"{"message":"Unauthenticated."}"#);
    assert!(matches!(err, ApiError::Unauthorized));
}

#[test]
fn unverified_email_is_distinct_from_plain_forbidden() {
    let err = classify_error(
        403,
        br#"{"message":"Email address not verified.","reason":"email_unverified","email":"amina@example.org"}"#,
    );
    match err {
        ApiError::UnverifiedEmail { email } => assert_eq!(email, "amina@example.org"),
        other => panic!("expected UnverifiedEmail, got {other}"),
    }

    // A 403 without the marker stays a generic status error.
    let err = classify_error(403, br#"{"message":"Forbidden."}"#);
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Forbidden.");
        }
        other => panic!("expected Status, got {other}"),
    }
}

#[test]
fn validation_errors_carry_the_field_map() {
    let err = classify_error(
        422,
        br#"{"message":"The given data was invalid.","errors":{"email":["The email field is required."]}}"#,
    );
    match err {
        ApiError::Validation { errors } => {
            assert_eq!(
                errors["email"],
                vec!["The email field is required.".to_string()]
            );
        }
        other => panic!("expected Validation, got {other}"),
    }
}

#[test]
fn unparseable_error_body_still_classifies() {
    let err = classify_error(500, b"<html>Internal Server Error</html>");
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "request failed");
        }
        other => panic!("expected Status, got {other}"),
    }
}
