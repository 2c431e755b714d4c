// File: src/controller.rs
// Purpose: Stateful handle over the reducer for one mounted page

use crate::error::FormError;
use crate::event::{Effect, FormEvent, Submission};
use crate::pages::PageKind;
use crate::reducer;
use crate::route::Route;
use crate::schema::{FormSchema, StepSpec};
use crate::state::FormState;
use crate::value::FieldValue;

/// Owns the current [`FormState`] of a page and feeds it events
///
/// Created when a page mounts, dropped when it unmounts. Every method goes
/// through [`reducer::reduce`]; a failed event leaves the state unchanged.
#[derive(Debug, Clone)]
pub struct FormController {
    schema: &'static FormSchema,
    state: FormState,
}

impl FormController {
    pub fn new(page: PageKind) -> Self {
        let schema = page.schema();
        Self {
            schema,
            state: FormState::new(schema),
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn active_step(&self) -> &'static StepSpec {
        // Both reducer paths that move the index keep it inside the schema
        let steps: &'static [StepSpec] = self.schema.steps;
        &steps[self.state.active_step().min(steps.len() - 1)]
    }

    pub fn dispatch(&mut self, event: FormEvent) -> Result<Option<Effect>, FormError> {
        let transition = reducer::reduce(self.schema, &self.state, event)?;
        self.state = transition.state;
        Ok(transition.effect)
    }

    pub fn set_value(
        &mut self,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        self.dispatch(FormEvent::set_value(field, value)).map(drop)
    }

    /// Blur: touch the field and validate it once
    pub fn mark_touched(&mut self, field: &str) -> Result<(), FormError> {
        self.dispatch(FormEvent::blur(field)).map(drop)
    }

    pub fn compute_form_valid(&self) -> bool {
        reducer::compute_form_valid(self.schema, &self.state)
    }

    /// Primary button; returns the submission when the form was accepted
    pub fn submit(&mut self) -> Result<Option<Submission>, FormError> {
        Ok(match self.dispatch(FormEvent::Submit)? {
            Some(Effect::Submit(submission)) => Some(submission),
            _ => None,
        })
    }

    /// Returns the route to leave to when there is no previous step
    pub fn back(&mut self) -> Result<Option<Route>, FormError> {
        Ok(match self.dispatch(FormEvent::Back)? {
            Some(Effect::Navigate(route)) => Some(route),
            _ => None,
        })
    }

    pub fn select_step(&mut self, step: usize) -> Result<(), FormError> {
        self.dispatch(FormEvent::SelectStep { step }).map(drop)
    }
}
