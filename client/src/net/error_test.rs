use super::*;

#[test]
fn from_response_parses_message_and_field_errors() {
    let err = ApiError::from_response(
        422,
        r#"{"message":"Validation failed","errors":[{"field":"address","message":"already registered"}]}"#,
    );
    assert_eq!(err.server_message(), Some("Validation failed"));
    assert_eq!(err.field_errors().len(), 1);
    assert_eq!(err.field_errors()[0].field.as_deref(), Some("address"));
    assert_eq!(err.to_string(), "request rejected (422): Validation failed");
}

#[test]
fn from_response_tolerates_non_json_bodies() {
    let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Rejected { status: 502, body: ErrorBody::default() });
    assert_eq!(err.server_message(), None);
    assert_eq!(err.to_string(), "request rejected (502): no details");
}

#[test]
fn connectivity_has_no_server_details() {
    let err = ApiError::Connectivity("Failed to fetch".to_owned());
    assert!(matches!(err, ApiError::Connectivity(_)));
    assert!(err.field_errors().is_empty());
    assert_eq!(err.to_string(), "no response received: Failed to fetch");
}
