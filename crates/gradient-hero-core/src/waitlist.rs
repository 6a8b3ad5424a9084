//! Waitlist form state machine.
//!
//! ## States
//!
//! | State | Form shown | Submit control |
//! |-------|------------|----------------|
//! | Idle | yes | enabled |
//! | Submitting | yes | disabled, spinner |
//! | Submitted | no, confirmation instead | - |
//! | Failed | yes, with error line | enabled (retry) |
//!
//! [`WaitlistForm`] is the synchronous machine. [`WaitlistController`]
//! drives it: it runs the submission and the confirmation delay on a
//! task it owns, and publishes every state change on a watch channel.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::WaitlistConfig;
use crate::error::{HeroError, HeroResult};
use crate::submit::{submitter_from_config, Submitter};
use crate::task::TaskHandle;

/// Lifecycle of the waitlist form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Submitted,
    /// Submission failed; carries the message shown under the form
    Failed(String),
}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormState::Submitting)
    }

    /// Whether the input row is visible (everything but the confirmation).
    pub fn shows_form(&self) -> bool {
        !matches!(self, FormState::Submitted)
    }

    fn accepts_submit(&self) -> bool {
        matches!(self, FormState::Idle | FormState::Failed(_))
    }
}

/// The only guard on submission: non-empty and containing `@`.
pub fn validate_email(email: &str) -> HeroResult<()> {
    if email.is_empty() || !email.contains('@') {
        return Err(HeroError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Ties an async completion to the submission that started it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Point-in-time view of the form, as published to the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub email: String,
    pub state: FormState,
}

#[derive(Clone, Debug, Default)]
pub struct WaitlistForm {
    email: String,
    state: FormState,
    generation: u64,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            email: self.email.clone(),
            state: self.state.clone(),
        }
    }

    /// Replace the email text. Ignored while submitting or showing the
    /// confirmation; editing after a failure clears the error.
    pub fn set_email(&mut self, email: impl Into<String>) -> bool {
        match self.state {
            FormState::Idle => {}
            FormState::Failed(_) => self.state = FormState::Idle,
            FormState::Submitting | FormState::Submitted => return false,
        }
        self.email = email.into();
        true
    }

    /// Start a submission. Returns `None` (and changes nothing) when the
    /// email fails validation or a submission is already in flight.
    pub fn submit(&mut self) -> Option<Ticket> {
        if !self.state.accepts_submit() || validate_email(&self.email).is_err() {
            return None;
        }
        self.generation += 1;
        self.state = FormState::Submitting;
        Some(Ticket(self.generation))
    }

    /// Apply the outcome of the submission identified by `ticket`.
    pub fn complete(&mut self, ticket: Ticket, result: HeroResult<()>) -> bool {
        if ticket.0 != self.generation || !self.state.is_submitting() {
            return false;
        }
        match result {
            Ok(()) => {
                self.email.clear();
                self.state = FormState::Submitted;
            }
            Err(e) => {
                self.state = FormState::Failed(e.to_string());
            }
        }
        true
    }

    /// Return to Idle once the confirmation or error has been displayed.
    pub fn dismiss(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match self.state {
            FormState::Submitted | FormState::Failed(_) => {
                self.state = FormState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Back to Idle, invalidating every outstanding ticket.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = FormState::Idle;
    }
}

struct Shared {
    form: Mutex<WaitlistForm>,
    submitter: Arc<dyn Submitter>,
    confirmation: Duration,
    updates: watch::Sender<FormSnapshot>,
}

impl Shared {
    fn publish(&self, form: &WaitlistForm) {
        self.updates.send_replace(form.snapshot());
    }

    async fn run(self: Arc<Self>, ticket: Ticket, email: String) {
        let result = self.submitter.submit(email).await;
        match &result {
            Ok(()) => info!("Waitlist submission accepted"),
            Err(e) => warn!("Waitlist submission failed: {}", e),
        }

        {
            let mut form = self.form.lock();
            if !form.complete(ticket, result) {
                debug!("Dropping stale waitlist completion");
                return;
            }
            self.publish(&form);
        }

        tokio::time::sleep(self.confirmation).await;

        let mut form = self.form.lock();
        if form.dismiss(ticket) {
            self.publish(&form);
        }
    }
}

/// Owns a [`WaitlistForm`] and the task that carries it through a submission.
///
/// Dropping the controller aborts any pending transition.
pub struct WaitlistController {
    shared: Arc<Shared>,
    pending: Mutex<Option<TaskHandle>>,
}

impl WaitlistController {
    pub fn new(submitter: Arc<dyn Submitter>, confirmation: Duration) -> Self {
        let form = WaitlistForm::new();
        let (updates, _) = watch::channel(form.snapshot());
        Self {
            shared: Arc::new(Shared {
                form: Mutex::new(form),
                submitter,
                confirmation,
                updates,
            }),
            pending: Mutex::new(None),
        }
    }

    pub fn from_config(config: &WaitlistConfig) -> HeroResult<Self> {
        let submitter = submitter_from_config(config)?;
        Ok(Self::new(submitter, config.confirmation_delay()))
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.shared.form.lock().snapshot()
    }

    pub fn state(&self) -> FormState {
        self.shared.form.lock().state().clone()
    }

    pub fn email(&self) -> String {
        self.shared.form.lock().email().to_string()
    }

    /// Receiver that wakes on every state or email change.
    pub fn subscribe(&self) -> watch::Receiver<FormSnapshot> {
        self.shared.updates.subscribe()
    }

    pub fn set_email(&self, email: impl Into<String>) {
        let mut form = self.shared.form.lock();
        if form.set_email(email) {
            self.shared.publish(&form);
        }
    }

    /// Validate and start a submission. Returns whether one was started.
    ///
    /// Must be called inside a tokio runtime.
    pub fn submit(&self) -> bool {
        let (ticket, email) = {
            let mut form = self.shared.form.lock();
            let Some(ticket) = form.submit() else {
                debug!(state = ?form.state(), "Waitlist submit ignored");
                return false;
            };
            self.shared.publish(&form);
            (ticket, form.email().to_string())
        };

        info!("Waitlist submission started");
        let shared = self.shared.clone();
        let task = TaskHandle::spawn(shared.run(ticket, email));
        // A superseded task can only be waiting out a failure message.
        *self.pending.lock() = Some(task);
        true
    }

    /// Abort any pending transition and wait for it to be released.
    ///
    /// The form keeps whatever state it had reached.
    pub async fn shutdown(&self) {
        let task = self.pending.lock().take();
        if let Some(task) = task {
            task.cancel().await;
            debug!("Waitlist controller shut down");
        }
    }
}
