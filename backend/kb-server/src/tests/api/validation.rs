use crate::ApiError;
use crate::api::validation::{
    optional_text, parse_id, parse_priority, required_text, validate_email, validate_string,
};

use kb_core::Priority;

fn field_of(error: ApiError) -> Option<String> {
    match error {
        ApiError::Validation { field, .. } => field,
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[test]
fn test_required_text_trims_surrounding_whitespace() {
    let name = required_text("  Sprint board \n", "name", 100).unwrap();

    assert_eq!(name, "Sprint board");
}

#[test]
fn test_required_text_rejects_blank() {
    let error = required_text("   ", "name", 100).unwrap_err();

    assert_eq!(field_of(error).as_deref(), Some("name"));
}

#[test]
fn test_validate_string_counts_characters_not_bytes() {
    // 5 characters, 10 bytes
    assert!(validate_string("ééééé", "title", 1, 5).is_ok());
    assert!(validate_string("éééééé", "title", 1, 5).is_err());
}

#[test]
fn test_validate_string_reports_maximum() {
    let error = validate_string("abcdef", "title", 1, 5).unwrap_err();

    match error {
        ApiError::Validation { message, .. } => {
            assert_eq!(message, "title must not exceed 5 characters");
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[test]
fn test_optional_text_turns_blank_into_none() {
    assert_eq!(optional_text("  ", "description", 10).unwrap(), None);
    assert_eq!(
        optional_text(" notes ", "description", 10).unwrap(),
        Some("notes".to_string())
    );
}

#[test]
fn test_parse_id_names_the_offending_field() {
    let error = parse_id("not-a-uuid", "column_id").unwrap_err();

    assert_eq!(field_of(error).as_deref(), Some("column_id"));
}

#[test]
fn test_parse_priority_is_case_insensitive_and_optional() {
    assert_eq!(parse_priority(Some("HIGH")).unwrap(), Some(Priority::High));
    assert_eq!(parse_priority(None).unwrap(), None);
    assert!(parse_priority(Some("urgent")).is_err());
}

#[test]
fn test_validate_email_lowercases_and_checks_shape() {
    assert_eq!(
        validate_email(" Ada@Example.COM ").unwrap(),
        "ada@example.com"
    );

    for bad in ["ada", "@example.com", "ada@localhost", ""] {
        let error = validate_email(bad).unwrap_err();
        assert_eq!(field_of(error).as_deref(), Some("email"), "input {bad:?}");
    }
}
