//! Integration tests for traversal and the first-error queries.

use demerit::{FieldErrors, FieldMatch, FirstError};

/// The structure most of these tests revolve around: one field with two
/// messages, one with none.
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
fn test_traverse_stops_at_first_match() {
    let errors =
        FieldErrors::from_iter([("a", vec!["first"]), ("b", vec!["second"]), ("c", vec!["third"])]);

    let hit = errors.traverse(|_, field| field != "a").unwrap();
    assert_eq!(
        hit,
        FieldMatch {
            position: 1,
            field: "b".to_string(),
        }
    );
}

#[test]
fn test_traverse_visits_fields_in_insertion_order() {
    let errors = FieldErrors::from_iter([
        ("zulu", vec![] as Vec<&str>),
        ("alpha", vec![]),
        ("mike", vec![]),
    ]);

    let mut visited = Vec::new();
    errors.traverse(|_, field| {
        visited.push(field.to_string());
        false
    });
    assert_eq!(visited, ["zulu", "alpha", "mike"]);
}

#[test]
fn test_traverse_predicate_sees_the_whole_structure() {
    let hit = sample()
        .traverse(|errors, field| errors.get(field).is_some_and(|messages| messages.len() > 1))
        .unwrap();
    assert_eq!(hit.field, "email");
}

#[test]
fn test_traverse_empty_structure_finds_nothing() {
    // Even an always-true predicate has nothing to match.
    let errors = FieldErrors::new();
    assert!(errors.traverse(|_, _| true).is_none());
}

#[test]
fn test_traverse_does_not_mutate_the_structure() {
    let errors = sample();
    let before = errors.clone();
    errors.traverse(|_, _| false);
    assert_eq!(errors, before);
}

#[test]
fn test_first_error_reports_position_field_and_message() {
    let first = sample().first_error().unwrap();
    assert_eq!(
        first,
        FirstError {
            position: 0,
            field: "email".to_string(),
            message: "Email is required!".to_string(),
        }
    );
}

#[test]
fn test_first_error_skips_fields_with_empty_lists() {
    let errors = FieldErrors::from_iter([
        ("name", vec![]),
        ("age", vec![]),
        ("email", vec!["Email is required!"]),
    ]);

    let first = errors.first_error().unwrap();
    // Position counts all fields, not just those carrying errors.
    assert_eq!(first.position, 2);
    assert_eq!(first.field, "email");
}

#[test]
fn test_first_error_none_when_every_list_is_empty() {
    let errors = FieldErrors::from_iter([("name", Vec::<String>::new()), ("email", vec![])]);
    assert!(errors.first_error().is_none());
}

#[test]
fn test_first_error_none_for_empty_structure() {
    assert!(FieldErrors::new().first_error().is_none());
}

#[test]
fn test_has_errors_true_with_any_non_empty_field() {
    assert!(sample().has_errors());
}

#[test]
fn test_has_errors_false_for_empty_structure() {
    assert!(!FieldErrors::new().has_errors());
}

#[test]
fn test_has_errors_false_when_every_list_is_empty() {
    let errors = FieldErrors::from_iter([("a", Vec::<String>::new()), ("b", vec![])]);
    assert!(!errors.has_errors());
}
