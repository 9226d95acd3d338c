//! Submitted-form validation
//!
//! A [`Form`] wraps the submitted field values and accumulates
//! human-readable errors per field as rules run. Rules never fail:
//! callers run every rule they care about, then check [`Form::valid`].
//! Rules are additive, so two rules failing on the same field leave
//! two messages behind.

mod errors;

use std::collections::HashMap;

use validator::ValidateEmail;

pub use errors::FormErrors;

pub const BLANK_FIELD: &str = "This field cannot be blank";
pub const INVALID_EMAIL: &str = "Invalid email address";

/// Submitted values plus the errors found in them so far
#[derive(Debug, Clone, Default)]
pub struct Form {
    values: HashMap<String, String>,
    errors: FormErrors,
}

impl Form {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self {
            values,
            errors: FormErrors::new(),
        }
    }

    /// Submitted value for a field, or `""` when absent
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// True iff the field was submitted with a non-empty value
    pub fn has(&self, field: &str) -> bool {
        !self.get(field).is_empty()
    }

    /// Every listed field must be present with a non-blank value
    pub fn required(&mut self, fields: &[&str]) -> &mut Self {
        for field in fields {
            if self.get(field).trim().is_empty() {
                self.errors.add(*field, BLANK_FIELD);
            }
        }
        self
    }

    /// Field must be at least `min` characters long.
    ///
    /// An absent field counts as zero characters.
    pub fn min_length(&mut self, field: &str, min: usize) -> &mut Self {
        if self.get(field).chars().count() < min {
            self.errors.add(
                field,
                format!("This field must be at least {} characters long", min),
            );
        }
        self
    }

    /// Field, when present, must look like an email address
    pub fn is_email(&mut self, field: &str) -> &mut Self {
        if self.has(field) && !self.get(field).to_string().validate_email() {
            self.errors.add(field, INVALID_EMAIL);
        }
        self
    }

    /// True iff no rule has recorded an error
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    pub fn into_errors(self) -> FormErrors {
        self.errors
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> Form {
        Form::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn empty_form_is_valid() {
        assert!(form(&[]).valid());
    }

    #[test]
    fn required_flags_missing_and_blank_fields() {
        let mut f = form(&[("b", "   ")]);
        f.required(&["a", "b"]);

        assert!(!f.valid());
        assert_eq!(f.errors().get("a"), BLANK_FIELD);
        assert_eq!(f.errors().get("b"), BLANK_FIELD);
    }

    #[test]
    fn required_passes_when_all_present() {
        let mut f = form(&[("a", "test"), ("b", "test"), ("c", "test")]);
        f.required(&["a", "b", "c"]);
        assert!(f.valid());
    }

    #[test]
    fn has_requires_non_empty_value() {
        let f = form(&[("a", "test"), ("b", "")]);
        assert!(f.has("a"));
        assert!(!f.has("b"));
        assert!(!f.has("c"));
    }

    #[test]
    fn min_length_rejects_short_values() {
        let mut f = form(&[("a", "te")]);
        assert!(!f.min_length("a", 3).valid());
        assert_eq!(
            f.errors().get("a"),
            "This field must be at least 3 characters long"
        );

        let mut f = form(&[("a", "test")]);
        assert!(f.min_length("a", 3).valid());
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        let mut f = form(&[("first_name", "Zoë")]);
        assert!(f.min_length("first_name", 3).valid());
    }

    #[test]
    fn is_email_checks_shape_of_present_values() {
        let mut f = form(&[("a", "te")]);
        assert!(!f.is_email("a").valid());
        assert_eq!(f.errors().get("a"), INVALID_EMAIL);

        let mut f = form(&[("a", "test@test.com")]);
        assert!(f.is_email("a").valid());
    }

    #[test]
    fn is_email_ignores_absent_field() {
        let mut f = form(&[]);
        assert!(f.is_email("email").valid());
    }

    #[test]
    fn required_and_min_length_are_additive() {
        let mut f = form(&[]);
        f.required(&["a"]).min_length("a", 3);

        assert_eq!(f.errors().all("a").len(), 2);
        assert_eq!(f.errors().get("a"), BLANK_FIELD);
    }
}
