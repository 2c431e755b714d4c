// File: src/lib.rs
// Purpose: Backend side of Daan form submissions

//! Submission collaborator for the Daan forms
//!
//! [`SubmissionHandler`] takes the `Submit` effect produced by a
//! [`daan_forms::FormController`], posts donor signups through [`DaanClient`],
//! stores the returned [`Session`] in a [`SessionStore`] and asks the
//! [`daan_forms::Navigator`] for the dashboard.

pub mod client;
pub mod error;
pub mod request;
pub mod session;
pub mod submit;

pub use client::{ClientSettings, DaanClient};
pub use error::{ClientError, SessionError};
pub use request::{AuthResponse, DonorSignupRequest, ErrorBody};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
pub use submit::{Outcome, SubmissionHandler};
