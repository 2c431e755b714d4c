use daan_validation::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("user@example.com", true)]
#[case("x@y.z", true)]
#[case("name.surname@ngo.org.in", true)]
#[case("", false)]
#[case("foo", false)]
#[case("foo@bar", false)]
#[case("@bar.com", false)]
fn test_email_cases(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(validate_email(input).is_valid, expected);
}

#[rstest]
#[case("Abcdef1!", true)]
#[case("P@ssw0rdLong", true)]
#[case("abcdefgh", false)]
#[case("ABCDEFGH", false)]
#[case("Abcdefgh", false)]
#[case("Ab1!", false)]
fn test_password_cases(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(validate_password(input).is_valid, expected);
}

#[rstest]
#[case("", true)]
#[case("12345", false)]
#[case("9876543210", true)]
#[case("0123456789", false)]
fn test_optional_phone_cases(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(validate_phone(input).is_valid, expected);
}

#[rstest]
#[case("abcde1234f", true)]
#[case("ABCDE1234F", true)]
#[case("ABCDE1234", false)]
#[case("12345ABCDE", false)]
fn test_pan_cases(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(validate_pan(input).is_valid, expected);
}

#[test]
fn test_required_wrappers_reject_empty_first() {
    assert!(validate_phone("").is_valid);
    assert!(!validate_required_phone("").is_valid);
    assert!(validate_pan("").is_valid);
    assert!(!validate_required_pan("").is_valid);
}

#[test]
fn test_file_rule_table() {
    let mib = 1024 * 1024;
    let big_pdf = FileMeta::new("reg.pdf", "application/pdf", 6 * mib);
    let jpeg = FileMeta::new("id.jpeg", "image/jpeg", 2 * mib);

    assert!(!validate_file(Some(&big_pdf), false).is_valid);
    assert!(validate_file(Some(&jpeg), true).is_valid);
    assert!(!validate_file(None, true).is_valid);
    assert!(validate_file(None, false).is_valid);
}

#[test]
fn test_rules_are_deterministic() {
    for _ in 0..3 {
        assert_eq!(
            validate_password("abcdefgh"),
            ValidationResult::failure("Password must contain at least one uppercase letter")
        );
    }
}

#[test]
fn test_file_meta_json_shape() {
    let meta: FileMeta =
        serde_json::from_str(r#"{"name":"a.png","mimeType":"image/png","size":42}"#).unwrap();
    assert_eq!(meta, FileMeta::new("a.png", "image/png", 42));
}
