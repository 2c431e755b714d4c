// File: src/event.rs
// Purpose: Inputs to the form reducer and the effects it asks for

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::pages::PageKind;
use crate::route::Route;
use crate::state::FormState;
use crate::value::FieldValue;

/// One user interaction
///
/// Event scripts use the JSON form, e.g.
/// `{"type":"set_value","field":"email","value":"a@b.co"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// Keystroke, select change, checkbox toggle or file pick
    SetValue { field: String, value: FieldValue },
    /// Field lost focus
    Blur { field: String },
    /// Primary button: "Next" on an intermediate wizard step, submit otherwise
    Submit,
    /// Previous wizard step, or leave the page from the first one
    Back,
    /// Switch between alternative steps (login method)
    SelectStep { step: usize },
}

impl FormEvent {
    pub fn set_value(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        FormEvent::SetValue {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn blur(field: impl Into<String>) -> Self {
        FormEvent::Blur {
            field: field.into(),
        }
    }
}

/// A form that passed full validation, handed to the submission collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub page: PageKind,
    /// Active alternative (login method) when the page has several
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<&'static str>,
    pub values: BTreeMap<String, FieldValue>,
}

impl Submission {
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

    /// Text value, `None` when nothing was entered
    pub fn optional_text(&self, field: &str) -> Option<String> {
        Some(self.text(field))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Submit(Submission),
    Navigate(Route),
}

/// Result of one reducer step: the next state plus at most one effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FormState,
    pub effect: Option<Effect>,
}

impl Transition {
    pub fn quiet(state: FormState) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    pub fn with_effect(state: FormState, effect: Effect) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json() {
        let event: FormEvent =
            serde_json::from_str(r#"{"type":"set_value","field":"agreeTerms","value":true}"#)
                .unwrap();
        assert_eq!(event, FormEvent::set_value("agreeTerms", true));

        let event: FormEvent = serde_json::from_str(r#"{"type":"select_step","step":1}"#).unwrap();
        assert_eq!(event, FormEvent::SelectStep { step: 1 });

        let event: FormEvent = serde_json::from_str(r#"{"type":"submit"}"#).unwrap();
        assert_eq!(event, FormEvent::Submit);
    }

    #[test]
    fn test_optional_text() {
        let mut values = BTreeMap::new();
        values.insert("phone".to_string(), FieldValue::from(""));
        values.insert("email".to_string(), FieldValue::from("a@b.co"));
        let submission = Submission {
            page: PageKind::Donor,
            step: None,
            values,
        };
        assert_eq!(submission.optional_text("phone"), None);
        assert_eq!(submission.optional_text("email").as_deref(), Some("a@b.co"));
        assert_eq!(submission.optional_text("missing"), None);
    }
}
