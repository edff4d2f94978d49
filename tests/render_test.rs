//! Integration tests for rendering a field's errors as a string.

use demerit::{ContractError, FieldErrors};

fn sample() -> FieldErrors {
    FieldErrors::from_iter([
        (
            "email",
            vec!["Email is required!", "Please, provide a valid email address!"],
        ),
        ("password", vec![]),
    ])
}

#[test]
fn test_messages_are_joined_with_single_spaces() {
    assert_eq!(
        sample().field_as_string("email").unwrap(),
        "Email is required! Please, provide a valid email address!"
    );
}

#[test]
fn test_single_message_renders_verbatim() {
    let errors = FieldErrors::from_iter([("name", vec!["Name is required!"])]);
    assert_eq!(errors.field_as_string("name").unwrap(), "Name is required!");
}

#[test]
fn test_empty_list_renders_as_empty_string() {
    assert_eq!(sample().field_as_string("password").unwrap(), "");
}

#[test]
fn test_unknown_field_is_rejected() {
    assert_eq!(
        sample().field_as_string("bogusField"),
        Err(ContractError::InvalidField("bogusField".to_string()))
    );
}

#[test]
fn test_transform_applies_per_message() {
    let rendered = sample()
        .field_as_string_with("email", |message| message.to_uppercase())
        .unwrap();
    assert_eq!(
        rendered,
        "EMAIL IS REQUIRED! PLEASE, PROVIDE A VALID EMAIL ADDRESS!"
    );
}

#[test]
fn test_transform_sees_messages_left_to_right() {
    let errors = FieldErrors::from_iter([("field", vec!["one", "two", "three"])]);

    let mut seen = Vec::new();
    errors
        .field_as_string_with("field", |message| {
            seen.push(message.to_string());
            message.to_string()
        })
        .unwrap();
    assert_eq!(seen, ["one", "two", "three"]);
}

#[test]
fn test_transform_on_empty_list_is_never_called() {
    let mut calls = 0;
    let rendered = sample()
        .field_as_string_with("password", |message| {
            calls += 1;
            message.to_string()
        })
        .unwrap();
    assert_eq!(rendered, "");
    assert_eq!(calls, 0);
}

#[test]
fn test_unknown_field_is_rejected_before_the_transform_runs() {
    let mut calls = 0;
    let result = sample().field_as_string_with("missing", |message| {
        calls += 1;
        message.to_string()
    });
    assert!(result.is_err());
    assert_eq!(calls, 0);
}

#[test]
fn test_rendering_does_not_mutate_the_structure() {
    let errors = sample();
    let before = errors.clone();
    errors.field_as_string("email").unwrap();
    errors.field_as_string_with("email", str::to_string).unwrap();
    assert_eq!(errors, before);
}
