use super::*;

#[test]
fn ack_message_is_exact() {
    assert_eq!(ACK_MESSAGE, "User registered!");
}

#[test]
fn submitted_fields_pass_values_verbatim() {
    assert_eq!(
        submitted_fields("a@b.com", "secret"),
        ("a@b.com".to_owned(), "secret".to_owned())
    );
}

#[test]
fn submitted_fields_do_not_trim() {
    assert_eq!(
        submitted_fields("  a@b.com  ", " secret\n"),
        ("  a@b.com  ".to_owned(), " secret\n".to_owned())
    );
}

#[test]
fn submitted_fields_allow_empty_strings() {
    assert_eq!(submitted_fields("", ""), (String::new(), String::new()));
}
