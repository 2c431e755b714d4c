// File: src/reducer.rs
// Purpose: (state, event) -> next state for every form page
//
// One reducer serves all pages; the page's field table decides which rule runs
// for which field, which fields make up the active step and which checkboxes
// gate submission.

use tracing::debug;

use crate::error::FormError;
use crate::event::{Effect, FormEvent, Submission, Transition};
use crate::route::Route;
use crate::schema::{FieldKind, FieldSpec, Flow, FormSchema, Requirement};
use crate::state::FormState;
use crate::value::FieldValue;

/// Apply one event to `state` and return the state that follows it
///
/// `state` itself is left untouched.
pub fn reduce(
    schema: &FormSchema,
    state: &FormState,
    event: FormEvent,
) -> Result<Transition, FormError> {
    let mut next = state.clone();

    match event {
        FormEvent::SetValue { field, value } => {
            let spec = lookup(schema, &field)?;
            check_value(spec, &value)?;
            next.set_value(spec.name, value);
            if next.is_touched(spec.name) {
                validate_field(spec, &mut next);
            }
            Ok(Transition::quiet(next))
        }
        FormEvent::Blur { field } => {
            let spec = lookup(schema, &field)?;
            next.touch(spec.name);
            validate_field(spec, &mut next);
            Ok(Transition::quiet(next))
        }
        FormEvent::Submit => Ok(primary_action(schema, next)),
        FormEvent::Back => Ok(back(schema, next)),
        FormEvent::SelectStep { step } => {
            if schema.flow != Flow::Alternatives || schema.step(step).is_none() {
                return Err(FormError::InvalidStep {
                    page: schema.page.as_str(),
                    step,
                });
            }
            next.set_active_step(step);
            Ok(Transition::quiet(next))
        }
    }
}

/// Whether the active step could be submitted right now
///
/// Reads recorded errors only and never runs a rule, so calling it any number
/// of times leaves the state exactly as it was.
pub fn compute_form_valid(schema: &FormSchema, state: &FormState) -> bool {
    fields_valid(&schema.scope_fields(state.active_step()), state)
}

fn fields_valid(fields: &[&FieldSpec], state: &FormState) -> bool {
    fields.iter().all(|field| {
        let value = state.value(field.name);
        match field.requirement {
            Requirement::Required => {
                value.is_some_and(|v| !v.is_blank()) && state.error(field.name).is_none()
            }
            Requirement::Optional => {
                !value.is_some_and(FieldValue::is_present) || state.error(field.name).is_none()
            }
            Requirement::Gate => state.flag(field.name),
            Requirement::None => true,
        }
    })
}

fn gates_satisfied(fields: &[&FieldSpec], state: &FormState) -> bool {
    fields
        .iter()
        .filter(|field| field.requirement == Requirement::Gate)
        .all(|field| state.flag(field.name))
}

fn lookup(schema: &FormSchema, field: &str) -> Result<&'static FieldSpec, FormError> {
    schema.field(field).ok_or_else(|| FormError::UnknownField {
        page: schema.page.as_str(),
        field: field.to_string(),
    })
}

fn check_value(spec: &FieldSpec, value: &FieldValue) -> Result<(), FormError> {
    if !spec.kind.accepts(value) {
        return Err(FormError::TypeMismatch {
            field: spec.name.to_string(),
            expected: spec.kind.expected_name(),
            actual: value.kind_name(),
        });
    }

    // The empty string is the "Select ..." placeholder
    if let (FieldKind::Choice { options, .. }, FieldValue::Text(text)) = (spec.kind, value) {
        if !text.is_empty() && !options.iter().any(|option| option.value == text.as_str()) {
            return Err(FormError::UnknownOption {
                field: spec.name.to_string(),
                value: text.clone(),
            });
        }
    }

    Ok(())
}

/// Run the field's rule and record the outcome; fields without a rule pass
fn validate_field(spec: &FieldSpec, state: &mut FormState) -> bool {
    let Some(rule) = spec.rule else {
        return true;
    };

    let initial;
    let value = match state.value(spec.name) {
        Some(value) => value,
        None => {
            initial = spec.kind.initial_value();
            &initial
        }
    };
    let result = rule.check(value, state);
    state.record(spec.name, &result);

    debug!(field = spec.name, valid = result.is_valid, "field validated");
    result.is_valid
}

/// Touch and validate every field that has a rule, without stopping early
fn validate_all(fields: &[&FieldSpec], state: &mut FormState) -> bool {
    fields
        .iter()
        .filter(|field| field.rule.is_some())
        .fold(true, |all_valid, field| {
            state.touch(field.name);
            validate_field(field, state) && all_valid
        })
}

fn primary_action(schema: &FormSchema, state: FormState) -> Transition {
    let active = state.active_step();
    if schema.flow == Flow::Wizard && !schema.is_last_step(active) {
        return next_step(schema, state, active);
    }
    submit(schema, state, active)
}

fn next_step(schema: &FormSchema, mut state: FormState, active: usize) -> Transition {
    let fields = schema.scope_fields(active);
    let all_valid = validate_all(&fields, &mut state);

    if all_valid && compute_form_valid(schema, &state) {
        state.set_active_step(active + 1);
        debug!(page = %schema.page, step = active + 1, "step advanced");
    } else {
        debug!(page = %schema.page, step = active, "step blocked");
    }
    Transition::quiet(state)
}

fn submit(schema: &FormSchema, mut state: FormState, active: usize) -> Transition {
    let fields = schema.submit_fields(active);
    let all_valid = validate_all(&fields, &mut state);

    if !(all_valid && gates_satisfied(&fields, &state)) {
        debug!(
            page = %schema.page,
            errors = state.errors().len(),
            "submit blocked"
        );
        return Transition::quiet(state);
    }

    let step = match schema.flow {
        Flow::Alternatives => schema.step(active).map(|step| step.title),
        Flow::Single | Flow::Wizard => None,
    };
    let submission = Submission {
        page: schema.page,
        step,
        values: state.values().clone(),
    };
    debug!(page = %schema.page, "submit accepted");
    Transition::with_effect(state, Effect::Submit(submission))
}

fn back(schema: &FormSchema, mut state: FormState) -> Transition {
    let active = state.active_step();
    if schema.flow == Flow::Wizard && active > 0 {
        state.set_active_step(active - 1);
        return Transition::quiet(state);
    }
    Transition::with_effect(state, Effect::Navigate(Route::Home))
}
