//! Per-field error messages accumulated by [`Form`](super::Form) rules

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field name → error messages, in the order the rules added them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message for a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// First message for a field, or `""` when the field has none
    pub fn get(&self, field: &str) -> &str {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All messages for a field
    pub fn all(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of messages across all fields
    pub fn count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_get_returns_first_message() {
        let mut errors = FormErrors::new();
        errors.add("a", "test");
        errors.add("a", "second");

        assert_eq!(errors.get("a"), "test");
        assert_eq!(errors.all("a").len(), 2);
        assert_eq!(errors.count(), 2);
    }

    #[test]
    fn get_unknown_field_is_empty() {
        let errors = FormErrors::new();
        assert_eq!(errors.get("b"), "");
        assert!(errors.all("b").is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut errors = FormErrors::new();
        errors.add("email", "Invalid email address");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"email": ["Invalid email address"]}));
    }
}
