// File: src/schema.rs
// Purpose: Static field tables that parameterize the generic form reducer

use daan_validation::{self as rules, ValidationResult};

use crate::pages::PageKind;
use crate::state::FormState;
use crate::value::FieldValue;

/// Validation rule bound to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Email,
    Password,
    /// Must equal the current value of the named password field
    ConfirmPassword { password_field: &'static str },
    /// Optional mobile number
    Phone,
    RequiredPhone,
    /// Optional PAN
    Pan,
    RequiredPan,
    Name,
    /// Non-blank text; `label` is used in the message
    Required { label: &'static str },
    File { required: bool },
    Website,
    AccessCode,
}

impl Rule {
    /// Run the rule against `value`, reading paired fields from `state`
    pub fn check(&self, value: &FieldValue, state: &FormState) -> ValidationResult {
        let text = value.as_text().unwrap_or_default();
        match *self {
            Rule::Email => rules::validate_email(text),
            Rule::Password => rules::validate_password(text),
            Rule::ConfirmPassword { password_field } => {
                rules::validate_confirm_password(state.text(password_field), text)
            }
            Rule::Phone => rules::validate_phone(text),
            Rule::RequiredPhone => rules::validate_required_phone(text),
            Rule::Pan => rules::validate_pan(text),
            Rule::RequiredPan => rules::validate_required_pan(text),
            Rule::Name => rules::validate_name(text),
            Rule::Required { label } => rules::validate_required(text, label),
            Rule::File { required } => rules::validate_file(value.as_file(), required),
            Rule::Website => rules::validate_website(text),
            Rule::AccessCode => rules::validate_access_code(text),
        }
    }
}

/// How `compute_form_valid` treats a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Non-blank and no recorded error
    Required,
    /// No recorded error when something was entered
    Optional,
    /// Checkbox that must be ticked; never validated like text
    Gate,
    /// Not considered
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl ChoiceOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Never echoed back when rendering
    Secret,
    Choice {
        options: &'static [ChoiceOption],
        initial: &'static str,
    },
    Flag,
    File,
}

impl FieldKind {
    pub fn initial_value(&self) -> FieldValue {
        match self {
            FieldKind::Text | FieldKind::Secret => FieldValue::empty_text(),
            FieldKind::Choice { initial, .. } => FieldValue::from(*initial),
            FieldKind::Flag => FieldValue::Flag(false),
            FieldKind::File => FieldValue::File(None),
        }
    }

    /// Whether `value` is the variant this input produces
    pub fn accepts(&self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (FieldKind::Text | FieldKind::Secret | FieldKind::Choice { .. }, FieldValue::Text(_))
                | (FieldKind::Flag, FieldValue::Flag(_))
                | (FieldKind::File, FieldValue::File(_))
        )
    }

    pub fn expected_name(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Secret | FieldKind::Choice { .. } => "text",
            FieldKind::Flag => "flag",
            FieldKind::File => "file",
        }
    }
}

/// One row of a page's field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub requirement: Requirement,
    pub rule: Option<Rule>,
    /// Helper text shown while the field has no error
    pub hint: Option<&'static str>,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str, rule: Rule) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            requirement: Requirement::Required,
            rule: Some(rule),
            hint: None,
        }
    }

    pub const fn secret(name: &'static str, label: &'static str, rule: Rule) -> Self {
        Self {
            kind: FieldKind::Secret,
            ..Self::text(name, label, rule)
        }
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [ChoiceOption],
        initial: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Choice { options, initial },
            requirement: Requirement::None,
            rule: None,
            hint: None,
        }
    }

    pub const fn flag(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Flag,
            requirement: Requirement::None,
            rule: None,
            hint: None,
        }
    }

    pub const fn file(name: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::File,
            requirement: if required {
                Requirement::Required
            } else {
                Requirement::Optional
            },
            rule: Some(Rule::File { required }),
            hint: None,
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            requirement: Requirement::Optional,
            ..self
        }
    }

    /// A select that must be filled; `label` names it in the message
    pub const fn required_choice(self, label: &'static str) -> Self {
        Self {
            requirement: Requirement::Required,
            rule: Some(Rule::Required { label }),
            ..self
        }
    }

    pub const fn gate(self) -> Self {
        Self {
            requirement: Requirement::Gate,
            ..self
        }
    }

    pub const fn with_hint(self, hint: &'static str) -> Self {
        Self {
            hint: Some(hint),
            ..self
        }
    }

    pub fn choice_options(&self) -> &'static [ChoiceOption] {
        match self.kind {
            FieldKind::Choice { options, .. } => options,
            _ => &[],
        }
    }
}

/// A named group of fields completed together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSpec {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

/// How a page moves between its steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// One step holding every field
    Single,
    /// Sequential steps; forward only when the active step validates
    Wizard,
    /// Freely selectable steps, each submitted on its own (login method)
    Alternatives,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSchema {
    pub page: PageKind,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit_label: &'static str,
    pub flow: Flow,
    pub steps: &'static [StepSpec],
    /// Fields outside every step (shared across login methods)
    pub shared: &'static [FieldSpec],
}

impl FormSchema {
    pub fn all_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        let steps: &'static [StepSpec] = self.steps;
        let shared: &'static [FieldSpec] = self.shared;
        shared
            .iter()
            .chain(steps.iter().flat_map(|step| step.fields.iter()))
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.all_fields().find(|field| field.name == name)
    }

    pub fn step(&self, index: usize) -> Option<&'static StepSpec> {
        let steps: &'static [StepSpec] = self.steps;
        steps.get(index)
    }

    pub fn is_last_step(&self, index: usize) -> bool {
        index + 1 >= self.steps.len()
    }

    /// Fields that `compute_form_valid` inspects while `active_step` is shown
    pub fn scope_fields(&self, active_step: usize) -> Vec<&'static FieldSpec> {
        self.step(active_step)
            .map(|step| step.fields.iter().collect())
            .unwrap_or_default()
    }

    /// Fields a final submit re-validates
    ///
    /// A wizard submits every step at once; the other flows only the active one.
    pub fn submit_fields(&self, active_step: usize) -> Vec<&'static FieldSpec> {
        match self.flow {
            Flow::Wizard => self.steps.iter().flat_map(|step| step.fields.iter()).collect(),
            Flow::Single | Flow::Alternatives => self.scope_fields(active_step),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let phone = FieldSpec::text("phone", "Phone Number", Rule::Phone).optional();
        assert_eq!(phone.requirement, Requirement::Optional);
        assert_eq!(phone.kind, FieldKind::Text);

        let terms = FieldSpec::flag("agreeTerms", "I agree").gate();
        assert_eq!(terms.requirement, Requirement::Gate);
        assert!(terms.rule.is_none());

        let cert = FieldSpec::file("certificate", "Certificate", true);
        assert_eq!(cert.rule, Some(Rule::File { required: true }));
        assert_eq!(cert.requirement, Requirement::Required);
    }

    #[test]
    fn test_required_choice() {
        const OPTIONS: &[ChoiceOption] = &[ChoiceOption::new("delhi", "Delhi")];
        let state = FieldSpec::choice("state", "State", OPTIONS, "").required_choice("State");
        assert_eq!(state.rule, Some(Rule::Required { label: "State" }));
        assert_eq!(state.choice_options().len(), 1);
    }

    #[test]
    fn test_kind_accepts() {
        assert!(FieldKind::Secret.accepts(&FieldValue::from("x")));
        assert!(!FieldKind::Flag.accepts(&FieldValue::from("x")));
        assert!(FieldKind::File.accepts(&FieldValue::File(None)));
        assert_eq!(FieldKind::Flag.initial_value(), FieldValue::Flag(false));
    }
}
