//! The closed error set for contract violations.
//!
//! Every failure this library can report is a misuse of the API by the
//! integrating code, surfaced as a typed variant rather than a message
//! string so callers can branch programmatically.

use thiserror::Error;

/// Errors raised when an operation's arguments violate its contract.
///
/// These are programming-time defects in the integrating code, not
/// recoverable runtime conditions. They are returned immediately, before any
/// traversal or computation takes place, and should surface in logs and
/// tests rather than in end-user UI. The library never coerces or sanitizes
/// malformed input.
///
/// # Example
///
/// ```rust
/// use demerit::{ContractError, FieldErrors};
///
/// let errors = FieldErrors::new();
/// let result = errors.field_as_string("email");
///
/// assert_eq!(result, Err(ContractError::InvalidField("email".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// An argument does not have the shape the operation requires.
    #[error("invalid argument `{argument}`: expected {expected}, got {got}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// The shape the operation requires.
        expected: &'static str,
        /// The shape actually supplied.
        got: String,
    },

    /// A field name does not correspond to an existing key.
    #[error("unknown field '{0}'")]
    InvalidField(String),
}

impl ContractError {
    pub(crate) fn invalid_argument(
        argument: &'static str,
        expected: &'static str,
        got: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            argument,
            expected,
            got: got.into(),
        }
    }
}

// ContractError is Send + Sync since all fields are owned types.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ContractError>();
    assert_sync::<ContractError>();
};
