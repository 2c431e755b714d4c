// File: src/view.rs
// Purpose: Server-side HTML for a page's active step

use maud::{html, Markup, DOCTYPE};

use crate::reducer::compute_form_valid;
use crate::schema::{FieldKind, FieldSpec, Flow, FormSchema, Rule};
use crate::state::FormState;

/// File types the picker offers
const FILE_ACCEPT: &str = ".pdf,.jpg,.jpeg,.png";

/// Render the form as it currently stands
///
/// Only the active step is rendered (plus fields shared by every step).
/// Secrets and files are never written back into the markup.
pub fn render_form(schema: &FormSchema, state: &FormState) -> Markup {
    let active = state.active_step();
    let valid = compute_form_valid(schema, state);
    let primary_label = match schema.flow {
        Flow::Wizard if !schema.is_last_step(active) => "Next",
        _ => schema.submit_label,
    };

    html! {
        form.daan-form method="post" data-page=(schema.page.as_str()) novalidate {
            header {
                h1 { (schema.title) }
                p.subtitle { (schema.subtitle) }
            }
            @match schema.flow {
                Flow::Wizard => { (stepper(schema, active)) }
                Flow::Alternatives => { (method_switch(schema, active)) }
                Flow::Single => {}
            }
            @for field in schema.shared {
                (render_field(field, state))
            }
            @if let Some(step) = schema.step(active) {
                fieldset data-step=(active) {
                    @for field in step.fields {
                        (render_field(field, state))
                    }
                }
            }
            footer {
                @if schema.flow == Flow::Wizard && active > 0 {
                    button type="button" name="back" { "Previous" }
                }
                button type="submit" disabled[!valid] { (primary_label) }
            }
        }
    }
}

/// Full document around [`render_form`]
pub fn render_page(schema: &FormSchema, state: &FormState) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (schema.title) " | Daan" }
            }
            body {
                (render_form(schema, state))
            }
        }
    }
}

fn stepper(schema: &FormSchema, active: usize) -> Markup {
    html! {
        ol.stepper {
            @for (index, step) in schema.steps.iter().enumerate() {
                li.active[index == active].done[index < active] {
                    span.step-number { (index + 1) }
                    span.step-title { (step.title) }
                }
            }
        }
    }
}

fn method_switch(schema: &FormSchema, active: usize) -> Markup {
    html! {
        nav.login-methods {
            @for (index, step) in schema.steps.iter().enumerate() {
                button.active[index == active] type="button" name="method" value=(index) {
                    (step.title)
                }
            }
        }
    }
}

fn input_type(field: &FieldSpec) -> &'static str {
    match field.rule {
        Some(Rule::Email) => "email",
        Some(Rule::Phone | Rule::RequiredPhone) => "tel",
        Some(Rule::Website) => "url",
        _ => "text",
    }
}

fn render_field(field: &FieldSpec, state: &FormState) -> Markup {
    let error = state.error(field.name);
    let invalid = error.map(|_| "true");
    let help_id = format!("{}-help", field.name);
    let helper = error.or(field.hint);

    html! {
        div.field.has-error[error.is_some()] data-field=(field.name) {
            @match field.kind {
                FieldKind::Flag => {
                    label {
                        input type="checkbox" id=(field.name) name=(field.name)
                            checked[state.flag(field.name)]
                            aria-invalid=[invalid];
                        " " (field.label)
                    }
                }
                FieldKind::Text => {
                    label for=(field.name) { (field.label) }
                    input type=(input_type(field)) id=(field.name) name=(field.name)
                        value=(state.text(field.name))
                        aria-invalid=[invalid]
                        aria-describedby=[helper.map(|_| help_id.as_str())];
                }
                FieldKind::Secret => {
                    label for=(field.name) { (field.label) }
                    input type="password" id=(field.name) name=(field.name)
                        autocomplete="off"
                        aria-invalid=[invalid]
                        aria-describedby=[helper.map(|_| help_id.as_str())];
                }
                FieldKind::Choice { options, initial } => {
                    label for=(field.name) { (field.label) }
                    select id=(field.name) name=(field.name) aria-invalid=[invalid] {
                        @if initial.is_empty() {
                            option value="" { "Select " (field.label) }
                        }
                        @for option in options {
                            option value=(option.value)
                                selected[state.text(field.name) == option.value] {
                                (option.label)
                            }
                        }
                    }
                }
                FieldKind::File => {
                    label for=(field.name) { (field.label) }
                    input type="file" id=(field.name) name=(field.name)
                        accept=(FILE_ACCEPT)
                        aria-invalid=[invalid];
                }
            }
            @if let Some(text) = helper {
                p.error[error.is_some()].hint[error.is_none()] id=(help_id) { (text) }
            }
        }
    }
}
