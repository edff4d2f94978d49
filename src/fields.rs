//! The field errors structure and its structural operations.
//!
//! This module provides [`FieldErrors`], an insertion-ordered mapping from
//! field name to a list of error messages, along with construction helpers,
//! the clearing operation, and conversion to and from `serde_json::Value`
//! at the dynamic data boundary.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::ContractError;

/// An ordered mapping from field name to its list of error messages.
///
/// Keys are unique and every key always maps to a list (possibly empty),
/// never to a scalar. Insertion order of keys is significant: traversal and
/// every operation that produces a new structure preserve it. Beyond that
/// the structure is opaque data; no schema is imposed on field names or
/// message content.
///
/// Construction is owned by the caller (typically a validation layer); all
/// query operations take `&self` and never mutate the structure, and
/// [`FieldErrors::cleared`] allocates a fresh structure rather than editing
/// in place.
///
/// # Example
///
/// ```rust
/// use demerit::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.push("email", "Email is required!");
/// errors.push("email", "Please, provide a valid email address!");
/// errors.insert("password", Vec::<String>::new());
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.error_count(), 2);
/// assert_eq!(errors.get("email").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    inner: IndexMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Creates an empty structure with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field's message list, replacing and returning any previous one.
    ///
    /// An already-present field keeps its insertion-order position; a new
    /// field is appended at the end.
    ///
    /// # Example
    ///
    /// ```rust
    /// use demerit::FieldErrors;
    ///
    /// let mut errors = FieldErrors::new();
    /// errors.insert("name", ["Name is required!"]);
    ///
    /// let previous = errors.insert("name", ["Name is too short!"]);
    /// assert_eq!(previous, Some(vec!["Name is required!".to_string()]));
    /// ```
    pub fn insert<M>(
        &mut self,
        field: impl Into<String>,
        messages: impl IntoIterator<Item = M>,
    ) -> Option<Vec<String>>
    where
        M: Into<String>,
    {
        self.inner
            .insert(field.into(), messages.into_iter().map(Into::into).collect())
    }

    /// Appends one message to a field, creating the field if absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use demerit::FieldErrors;
    ///
    /// let mut errors = FieldErrors::new();
    /// errors.push("email", "Email is required!");
    /// errors.push("email", "Please, provide a valid email address!");
    ///
    /// assert_eq!(errors.get("email").unwrap().len(), 2);
    /// ```
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.inner.entry(field.into()).or_default().push(message.into());
    }

    /// Returns a field's message list, or `None` for an unknown field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.inner.get(field).map(Vec::as_slice)
    }

    /// Returns true if the field exists as a key, even with an empty list.
    pub fn contains_field(&self, field: &str) -> bool {
        self.inner.contains_key(field)
    }

    /// Returns the number of fields in the structure.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the structure has no fields at all.
    ///
    /// A structure whose every field has an empty message list is not empty
    /// in this sense; use [`FieldErrors::has_errors`] to ask about messages.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the total number of messages across all fields.
    pub fn error_count(&self) -> usize {
        self.inner.values().map(Vec::len).sum()
    }

    /// Returns an iterator over field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Returns an iterator over `(field, messages)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Returns a new structure with the selected fields' message lists emptied.
    ///
    /// The result has the same key set in the same insertion order as the
    /// receiver. Selected fields map to an empty list; every other field's
    /// list is carried over with equal contents. The receiver itself is
    /// never touched, so callers can diff the old and new structures to
    /// decide what changed.
    ///
    /// A selected name that is not a key of the structure is silently never
    /// matched; selecting only unknown names yields a structural copy with
    /// nothing cleared.
    ///
    /// # Example
    ///
    /// ```rust
    /// use demerit::FieldErrors;
    ///
    /// let errors = FieldErrors::from_iter([
    ///     ("email", vec!["Email is required!"]),
    ///     ("password", vec!["Password is too short!"]),
    /// ]);
    ///
    /// let cleared = errors.cleared("email");
    /// assert!(cleared.get("email").unwrap().is_empty());
    /// assert_eq!(cleared.get("password"), errors.get("password"));
    ///
    /// // Several fields at once:
    /// let cleared = errors.cleared(["email", "password"]);
    /// assert_eq!(cleared.error_count(), 0);
    ///
    /// // The original still holds both messages.
    /// assert_eq!(errors.error_count(), 2);
    /// ```
    pub fn cleared(&self, fields: impl Into<FieldSelection>) -> FieldErrors {
        let selection = fields.into();
        let inner = self
            .inner
            .iter()
            .map(|(field, messages)| {
                let messages = if selection.contains(field) {
                    Vec::new()
                } else {
                    messages.clone()
                };
                (field.clone(), messages)
            })
            .collect();
        FieldErrors { inner }
    }

    /// Builds a structure from a JSON value, validating its shape.
    ///
    /// The value must be a JSON object whose every entry is an array of
    /// strings. Key order of the object becomes the structure's insertion
    /// order. Validation fails fast: the first shape violation aborts the
    /// conversion with no partial result.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidArgument`] if the value is not an
    /// object, if any entry is not an array, or if any array element is not
    /// a string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use demerit::FieldErrors;
    /// use serde_json::json;
    ///
    /// let errors = FieldErrors::from_value(&json!({
    ///     "email": ["Email is required!"],
    ///     "password": [],
    /// }))
    /// .unwrap();
    ///
    /// assert!(errors.has_errors());
    /// assert!(FieldErrors::from_value(&json!(["not", "an", "object"])).is_err());
    /// ```
    pub fn from_value(value: &Value) -> Result<FieldErrors, ContractError> {
        let object = value.as_object().ok_or_else(|| {
            ContractError::invalid_argument(
                "errors",
                "an object mapping field names to message arrays",
                json_type(value),
            )
        })?;

        let mut inner = IndexMap::with_capacity(object.len());
        for (field, entry) in object {
            let list = entry.as_array().ok_or_else(|| {
                ContractError::invalid_argument(
                    "errors",
                    "an array of error messages",
                    json_type(entry),
                )
            })?;
            let mut messages = Vec::with_capacity(list.len());
            for message in list {
                let message = message.as_str().ok_or_else(|| {
                    ContractError::invalid_argument(
                        "errors",
                        "a string error message",
                        json_type(message),
                    )
                })?;
                messages.push(message.to_string());
            }
            inner.insert(field.clone(), messages);
        }
        Ok(FieldErrors { inner })
    }

    /// Renders the structure as a JSON object of message arrays.
    ///
    /// The inverse of [`FieldErrors::from_value`]; key order is preserved.
    pub fn to_value(&self) -> Value {
        let mut object = Map::with_capacity(self.inner.len());
        for (field, messages) in &self.inner {
            let list = messages.iter().map(|m| Value::String(m.clone())).collect();
            object.insert(field.clone(), Value::Array(list));
        }
        Value::Object(object)
    }
}

/// Names the JSON type of a value for error context.
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} error(s) across {} field(s):",
            self.error_count(),
            self.len()
        )?;
        let mut index = 0;
        for (field, messages) in self.iter() {
            for message in messages {
                index += 1;
                writeln!(f, "  {}. {}: {}", index, field, message)?;
            }
        }
        Ok(())
    }
}

impl<K, V, M> FromIterator<(K, V)> for FieldErrors
where
    K: Into<String>,
    V: IntoIterator<Item = M>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let inner = iter
            .into_iter()
            .map(|(field, messages)| {
                (
                    field.into(),
                    messages.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { inner }
    }
}

impl IntoIterator for FieldErrors {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// One or many field names selected for clearing.
///
/// [`FieldErrors::cleared`] accepts anything convertible into a selection:
/// a single name (`&str`, `String`) or a collection of names (`Vec`, slice,
/// or array of `&str`).
///
/// # Example
///
/// ```rust
/// use demerit::FieldSelection;
///
/// let one = FieldSelection::from("email");
/// assert!(one.contains("email"));
/// assert!(!one.contains("password"));
///
/// let many = FieldSelection::from(["email", "password"]);
/// assert!(many.contains("password"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelection {
    /// A single field name.
    One(String),
    /// A collection of field names.
    Many(Vec<String>),
}

impl FieldSelection {
    /// Returns true if the selection names the given field.
    pub fn contains(&self, field: &str) -> bool {
        match self {
            FieldSelection::One(name) => name == field,
            FieldSelection::Many(names) => names.iter().any(|name| name == field),
        }
    }
}

impl From<&str> for FieldSelection {
    fn from(field: &str) -> Self {
        FieldSelection::One(field.to_string())
    }
}

impl From<String> for FieldSelection {
    fn from(field: String) -> Self {
        FieldSelection::One(field)
    }
}

impl From<Vec<String>> for FieldSelection {
    fn from(fields: Vec<String>) -> Self {
        FieldSelection::Many(fields)
    }
}

impl From<Vec<&str>> for FieldSelection {
    fn from(fields: Vec<&str>) -> Self {
        FieldSelection::Many(fields.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for FieldSelection {
    fn from(fields: &[&str]) -> Self {
        FieldSelection::Many(fields.iter().map(|field| field.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldSelection {
    fn from(fields: [&str; N]) -> Self {
        FieldSelection::Many(fields.iter().map(|field| field.to_string()).collect())
    }
}
