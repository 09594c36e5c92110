//! Contact form pipeline: cleaning, validation and delivery of an inquiry to
//! the external form endpoint.
//!
//! Everything here is plain Rust with no DOM access so the rules can be
//! exercised from tests; the Leptos component in `app::contact` only wires
//! signals and events to a [`ContactController`].

mod controller;
mod form;
mod relay;
pub mod sanitize;

pub use controller::{
    Attempt, Banner, ContactController, Outcome, SubmissionCounter, SubmitError, SubmitState,
    MAX_SUBMISSIONS,
};
pub use form::{
    validate, Field, InquiryForm, Payload, ValidationErrors, EMAIL_MAX_LEN, MESSAGE_MAX_LEN,
    MESSAGE_MIN_LEN, NAME_MAX_LEN, NAME_MIN_LEN,
};
pub use relay::{is_success, HttpRelay, Relay, RelayError};
