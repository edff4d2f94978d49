//! # Demerit
//!
//! A helper library for the "field errors" structure produced by form
//! validation: an ordered mapping from field name to the list of error
//! messages currently attached to that field.
//!
//! ## Overview
//!
//! Validation layers accumulate messages per field; the UI layer then needs
//! quick answers to a handful of questions. Does anything have an error?
//! What is the first error, and where? How does one field's error list read
//! as a single string? What does the structure look like with some fields
//! cleared? Demerit answers all of these without ever mutating the structure
//! it is handed, so callers can safely diff old and new state to decide what
//! changed.
//!
//! ## Core Types
//!
//! - [`FieldErrors`]: the ordered mapping from field name to error messages
//! - [`FieldMatch`]: position and name of a field located by traversal
//! - [`FirstError`]: position, field, and message of the first error found
//! - [`FieldSelection`]: one or many field names to clear
//! - [`ContractError`]: the closed set of contract-violation errors
//!
//! ## Example
//!
//! ```rust
//! use demerit::FieldErrors;
//!
//! let errors = FieldErrors::from_iter([
//!     ("email", vec!["Email is required!", "Please, provide a valid email address!"]),
//!     ("password", vec![]),
//! ]);
//!
//! assert!(errors.has_errors());
//!
//! let first = errors.first_error().unwrap();
//! assert_eq!((first.position, first.field.as_str()), (0, "email"));
//!
//! let rendered = errors.field_as_string("email").unwrap();
//! assert_eq!(rendered, "Email is required! Please, provide a valid email address!");
//!
//! // Clearing produces a new structure; `errors` itself is untouched.
//! let cleared = errors.cleared("email");
//! assert!(!cleared.has_errors());
//! assert!(errors.has_errors());
//! ```

pub mod error;
pub mod fields;
mod render;
pub mod traverse;

pub use error::ContractError;
pub use fields::{FieldErrors, FieldSelection};
pub use traverse::{FieldMatch, FirstError};
