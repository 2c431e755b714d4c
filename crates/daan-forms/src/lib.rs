// File: src/lib.rs
// Purpose: Form controller for the Daan signup and sign-in pages

//! Form state machine for the Daan signup and sign-in pages
//!
//! Each page is described by a static [`FormSchema`]. A single reducer applies
//! [`FormEvent`]s to a [`FormState`], validating touched fields through
//! `daan-validation` and producing at most one [`Effect`] per event (a
//! submission or a navigation request).
//!
//! ```
//! use daan_forms::{FormController, PageKind};
//!
//! let mut form = FormController::new(PageKind::Admin);
//! form.set_value("accessCode", "abc").unwrap();
//! form.mark_touched("accessCode").unwrap();
//! assert_eq!(
//!     form.state().error("accessCode"),
//!     Some("Access code must be at least 6 characters long")
//! );
//! assert!(!form.compute_form_valid());
//! ```

pub mod controller;
pub mod error;
pub mod event;
pub mod pages;
pub mod reducer;
pub mod route;
pub mod schema;
pub mod state;
pub mod value;
pub mod view;

pub use controller::FormController;
pub use error::FormError;
pub use event::{Effect, FormEvent, Submission, Transition};
pub use pages::PageKind;
pub use reducer::{compute_form_valid, reduce};
pub use route::{Navigator, Route};
pub use schema::{ChoiceOption, FieldKind, FieldSpec, Flow, FormSchema, Requirement, Rule, StepSpec};
pub use state::FormState;
pub use value::FieldValue;
pub use view::{render_form, render_page};

// Re-export so callers can build file values without a direct dependency
pub use daan_validation::{FileMeta, ValidationResult};
