use super::*;

#[test]
fn users_endpoint_is_fixed_local_url() {
    assert_eq!(USERS_ENDPOINT, "http://localhost:8000/users/");
}

#[test]
fn register_payload_serializes_expected_json() {
    let payload = register_payload("a@b.com", "secret");
    assert_eq!(
        serde_json::to_string(&payload).unwrap(),
        r#"{"email":"a@b.com","password":"secret"}"#
    );
}

#[test]
fn register_payload_has_exactly_two_keys() {
    let payload = serde_json::to_value(register_payload("a@b.com", "secret")).unwrap();
    let obj = payload.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert!(obj.contains_key("email"));
    assert!(obj.contains_key("password"));
}

#[test]
fn register_payload_passes_empty_strings_through() {
    let payload = register_payload("", "");
    assert_eq!(
        serde_json::to_string(&payload).unwrap(),
        r#"{"email":"","password":""}"#
    );
}

#[test]
fn register_failed_message_formats_status() {
    assert_eq!(register_failed_message(400), "register failed: 400");
}
