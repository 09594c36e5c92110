use log::{debug, info, warn};
use thiserror::Error;

use super::form::{validate, Field, InquiryForm, Payload, ValidationErrors};
use super::relay::{Relay, RelayError};

/// Successful deliveries allowed per page load.
pub const MAX_SUBMISSIONS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Status line under the form. Lives independently of [`SubmitState`]: editing
/// a field after an outcome returns the state to `Idle` but keeps the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Success,
    Failure,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(ValidationErrors),
    #[error("Submission limit of {} reached for this session", MAX_SUBMISSIONS)]
    RateLimited,
    #[error("Couldn't deliver inquiry: {0}")]
    Transmission(#[from] RelayError),
    #[error("A submission is already in flight")]
    Busy,
    #[error("No submission is in flight")]
    NotSubmitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// Honeypot tripped. Nothing observable happens.
    Discarded,
    Rejected(SubmitError),
    /// Ready to go out; hand the payload to a [`Relay`] and report back with
    /// [`ContactController::complete`].
    Send(Payload),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Delivered,
    Discarded,
}

/// Soft per-session cap. Memory only, gone on reload; real abuse prevention is
/// the form endpoint's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionCounter {
    count: u32,
}

impl SubmissionCounter {
    pub fn count(self) -> u32 {
        self.count
    }

    pub fn exhausted(self) -> bool {
        self.count >= MAX_SUBMISSIONS
    }

    fn record(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactController {
    form: InquiryForm,
    errors: ValidationErrors,
    state: SubmitState,
    banner: Option<Banner>,
    counter: SubmissionCounter,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &InquiryForm {
        &self.form
    }

    pub fn value(&self, field: Field) -> &str {
        self.form.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn banner(&self) -> Option<Banner> {
        self.banner
    }

    pub fn submissions(&self) -> u32 {
        self.counter.count()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.clear(field);
        if matches!(self.state, SubmitState::Succeeded | SubmitState::Failed) {
            self.state = SubmitState::Idle;
        }
    }

    /// Run every check that happens before the network.
    ///
    /// Order matters: the honeypot is looked at first so an automated client
    /// never learns anything, then the session cap, then field validation.
    pub fn prepare(&mut self) -> Attempt {
        if self.state == SubmitState::Submitting {
            return Attempt::Rejected(SubmitError::Busy);
        }
        if self.form.is_bot() {
            debug!("contact: honeypot filled, discarding submission");
            return Attempt::Discarded;
        }
        if self.counter.exhausted() {
            warn!(
                "contact: session limit of {} submissions reached",
                MAX_SUBMISSIONS
            );
            self.state = SubmitState::Failed;
            self.banner = Some(Banner::Failure);
            return Attempt::Rejected(SubmitError::RateLimited);
        }

        self.state = SubmitState::Validating;
        let errors = validate(&self.form);
        if !errors.is_empty() {
            self.errors = errors.clone();
            self.state = SubmitState::Idle;
            return Attempt::Rejected(SubmitError::Invalid(errors));
        }

        self.state = SubmitState::Submitting;
        Attempt::Send(self.form.payload())
    }

    /// Record how the delivery for the last [`Attempt::Send`] went.
    pub fn complete(&mut self, result: Result<(), RelayError>) -> Result<(), SubmitError> {
        if self.state != SubmitState::Submitting {
            return Err(SubmitError::NotSubmitting);
        }
        match result {
            Ok(()) => {
                self.counter.record();
                self.state = SubmitState::Succeeded;
                self.banner = Some(Banner::Success);
                self.form.reset();
                self.errors.clear_all();
                info!(
                    "contact: inquiry delivered ({}/{})",
                    self.counter.count(),
                    MAX_SUBMISSIONS
                );
                Ok(())
            }
            Err(e) => {
                // keep the form as typed so the visitor can resubmit
                warn!("contact: delivery failed: {e}");
                self.state = SubmitState::Failed;
                self.banner = Some(Banner::Failure);
                Err(SubmitError::Transmission(e))
            }
        }
    }

    pub async fn submit<R: Relay>(&mut self, relay: &R) -> Result<Outcome, SubmitError> {
        match self.prepare() {
            Attempt::Discarded => Ok(Outcome::Discarded),
            Attempt::Rejected(e) => Err(e),
            Attempt::Send(payload) => {
                let result = relay.deliver(&payload).await;
                self.complete(result).map(|()| Outcome::Delivered)
            }
        }
    }
}
