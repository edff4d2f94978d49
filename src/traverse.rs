//! Ordered traversal and the first-error queries.
//!
//! This module provides the traversal primitive underlying the error
//! queries: an insertion-order scan that stops at the first field satisfying
//! a caller-supplied predicate, plus the derived first-error and has-errors
//! operations.

use crate::fields::FieldErrors;

/// A field located by [`FieldErrors::traverse`].
///
/// `position` is the insertion-order index of the field among all fields of
/// the structure, not just among those satisfying the predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    /// Insertion-order index of the matched field.
    pub position: usize,
    /// Name of the matched field.
    pub field: String,
}

/// The first error in a structure, located by [`FieldErrors::first_error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstError {
    /// Insertion-order index of the field carrying the error.
    pub position: usize,
    /// Name of the field carrying the error.
    pub field: String,
    /// The field's first error message.
    pub message: String,
}

impl FieldErrors {
    /// Finds the first field satisfying a predicate.
    ///
    /// Fields are visited in insertion order. The predicate receives the
    /// whole structure along with the current field name; traversal stops at
    /// the first field for which it returns true. Returns `None` when no
    /// field satisfies the predicate, including for the empty structure.
    ///
    /// Given the same structure and predicate the result is identical; the
    /// structure is never mutated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use demerit::FieldErrors;
    ///
    /// let errors = FieldErrors::from_iter([
    ///     ("name", vec![]),
    ///     ("email", vec!["Email is required!"]),
    /// ]);
    ///
    /// let hit = errors
    ///     .traverse(|errors, field| errors.get(field).is_some_and(|m| !m.is_empty()))
    ///     .unwrap();
    /// assert_eq!(hit.position, 1);
    /// assert_eq!(hit.field, "email");
    ///
    /// assert!(errors.traverse(|_, field| field == "missing").is_none());
    /// ```
    pub fn traverse<P>(&self, mut predicate: P) -> Option<FieldMatch>
    where
        P: FnMut(&FieldErrors, &str) -> bool,
    {
        for (position, field) in self.fields().enumerate() {
            if predicate(self, field) {
                return Some(FieldMatch {
                    position,
                    field: field.to_string(),
                });
            }
        }
        None
    }

    /// Returns the first field, in insertion order, with a non-empty message
    /// list, along with that field's first message.
    ///
    /// A field with an empty list never matches, regardless of where it sits
    /// relative to fields with errors. Returns `None` when every field's
    /// list is empty or the structure has no fields.
    ///
    /// # Example
    ///
    /// ```rust
    /// use demerit::FieldErrors;
    ///
    /// let errors = FieldErrors::from_iter([
    ///     ("email", vec!["Email is required!", "Please, provide a valid email address!"]),
    ///     ("password", vec![]),
    /// ]);
    ///
    /// let first = errors.first_error().unwrap();
    /// assert_eq!(first.position, 0);
    /// assert_eq!(first.field, "email");
    /// assert_eq!(first.message, "Email is required!");
    /// ```
    pub fn first_error(&self) -> Option<FirstError> {
        let hit = self.traverse(|errors, field| {
            errors.get(field).is_some_and(|messages| !messages.is_empty())
        })?;
        let message = self.get(&hit.field)?.first()?.clone();
        Some(FirstError {
            position: hit.position,
            field: hit.field,
            message,
        })
    }

    /// Returns true iff at least one field has at least one error message.
    ///
    /// False for the zero-field structure and for structures whose every
    /// field has an empty message list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use demerit::FieldErrors;
    ///
    /// let mut errors = FieldErrors::new();
    /// assert!(!errors.has_errors());
    ///
    /// errors.insert("email", Vec::<String>::new());
    /// assert!(!errors.has_errors());
    ///
    /// errors.push("email", "Email is required!");
    /// assert!(errors.has_errors());
    /// ```
    pub fn has_errors(&self) -> bool {
        self.first_error().is_some()
    }
}
