// File: src/state.rs
// Purpose: Per-page form state: values, touched fields, recorded errors

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use daan_validation::{FileMeta, ValidationResult};

use crate::schema::FormSchema;
use crate::value::FieldValue;

/// Everything a page knows about its form between two events
///
/// Only the reducer mutates it. An error is present for a field only after a
/// validation of that field failed, and a touched field stays touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
    touched: BTreeSet<String>,
    errors: BTreeMap<String, String>,
    active_step: usize,
}

impl FormState {
    /// Fresh state with every field at its initial value
    pub fn new(schema: &FormSchema) -> Self {
        let values = schema
            .all_fields()
            .map(|field| (field.name.to_string(), field.kind.initial_value()))
            .collect();

        Self {
            values,
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
            active_step: 0,
        }
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Text content of a field, empty for missing or non-text fields
    pub fn text(&self, field: &str) -> &str {
        self.values
            .get(field)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
    }

    pub fn flag(&self, field: &str) -> bool {
        self.values
            .get(field)
            .and_then(FieldValue::as_flag)
            .unwrap_or(false)
    }

    pub fn file(&self, field: &str) -> Option<&FileMeta> {
        self.values.get(field).and_then(FieldValue::as_file)
    }

    pub fn values(&self) -> &BTreeMap<String, FieldValue> {
        &self.values
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn touched(&self) -> &BTreeSet<String> {
        &self.touched
    }

    /// Get error message for a field
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn active_step(&self) -> usize {
        self.active_step
    }

    pub(crate) fn set_value(&mut self, field: &str, value: FieldValue) {
        self.values.insert(field.to_string(), value);
    }

    pub(crate) fn touch(&mut self, field: &str) {
        self.touched.insert(field.to_string());
    }

    /// Store the outcome of a validation pass for `field`
    pub(crate) fn record(&mut self, field: &str, result: &ValidationResult) {
        match result.error() {
            Some(message) => {
                self.errors.insert(field.to_string(), message.to_string());
            }
            None => {
                self.errors.remove(field);
            }
        }
    }

    pub(crate) fn set_active_step(&mut self, step: usize) {
        self.active_step = step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PageKind;

    #[test]
    fn test_new_state_uses_initial_values() {
        let state = FormState::new(PageKind::SignIn.schema());
        assert_eq!(state.text("userType"), "donor");
        assert_eq!(state.text("email"), "");
        assert!(!state.has_errors());
        assert!(state.touched().is_empty());
        assert_eq!(state.active_step(), 0);
    }

    #[test]
    fn test_record_sets_and_clears_errors() {
        let mut state = FormState::new(PageKind::Admin.schema());
        state.record("email", &ValidationResult::failure("Email is required"));
        assert_eq!(state.error("email"), Some("Email is required"));

        state.record("email", &ValidationResult::success());
        assert!(state.error("email").is_none());
        assert!(!state.has_errors());
    }

    #[test]
    fn test_typed_accessors() {
        let mut state = FormState::new(PageKind::Ngo.schema());
        assert!(!state.flag("agreeTerms"));
        assert!(state.file("certificate").is_none());

        state.set_value("agreeTerms", FieldValue::Flag(true));
        state.set_value(
            "certificate",
            FileMeta::new("reg.pdf", "application/pdf", 1024).into(),
        );
        assert!(state.flag("agreeTerms"));
        assert_eq!(state.file("certificate").map(|f| f.name.as_str()), Some("reg.pdf"));
    }
}
