//! String rendering for a single field's error list.

use crate::error::ContractError;
use crate::fields::FieldErrors;

impl FieldErrors {
    /// Renders one field's error messages as a single string.
    ///
    /// Messages are joined with a single space, in list order. A field with
    /// an empty message list renders as the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidField`] if `field` is not among the
    /// structure's keys.
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
    /// assert_eq!(
    ///     errors.field_as_string("email").unwrap(),
    ///     "Email is required! Please, provide a valid email address!"
    /// );
    /// assert_eq!(errors.field_as_string("password").unwrap(), "");
    /// ```
    pub fn field_as_string(&self, field: &str) -> Result<String, ContractError> {
        self.field_as_string_with(field, str::to_string)
    }

    /// Renders one field's error messages as a single string, passing each
    /// message through `transform` first.
    ///
    /// The transform is applied per element, left to right; it sees one
    /// message at a time and has no access to its neighbors.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidField`] if `field` is not among the
    /// structure's keys. The field is validated before the transform runs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use demerit::FieldErrors;
    ///
    /// let errors = FieldErrors::from_iter([("name", vec!["too short", "required"])]);
    ///
    /// let rendered = errors
    ///     .field_as_string_with("name", |message| format!("name {message}"))
    ///     .unwrap();
    /// assert_eq!(rendered, "name too short name required");
    /// ```
    pub fn field_as_string_with<F>(
        &self,
        field: &str,
        mut transform: F,
    ) -> Result<String, ContractError>
    where
        F: FnMut(&str) -> String,
    {
        let messages = self
            .get(field)
            .ok_or_else(|| ContractError::InvalidField(field.to_string()))?;
        Ok(messages
            .iter()
            .map(|message| transform(message))
            .collect::<Vec<_>>()
            .join(" "))
    }
}
