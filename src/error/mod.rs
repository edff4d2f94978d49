//! Contract-violation error types.
//!
//! This module provides the closed set of errors raised when an operation's
//! arguments violate its contract.

mod contract_error;

pub use contract_error::ContractError;
