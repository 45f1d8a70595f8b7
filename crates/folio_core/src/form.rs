//! Contact form submission lifecycle
//!
//! A four-state machine driven by injected time:
//!
//! ```text
//! idle ──submit──▶ submitting ──delivered──▶ success ──settle──▶ idle
//!                      │  └──────failed────▶ error   ──settle──▶ idle
//!                      └──cancel──▶ idle
//! ```
//!
//! `submit` moves to `submitting` synchronously. The delivery service is
//! invoked once the submission latency elapses; success clears the fields,
//! failure keeps them so the visitor does not lose their message. Both
//! outcomes settle back to `idle` after the status hold.

use crate::delivery::MessageDelivery;
use crate::error::{DeliveryError, FormError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default simulated round-trip of a submission
pub const DEFAULT_SUBMISSION_LATENCY: Duration = Duration::from_millis(1500);

/// Default time the success/error notice stays up
pub const DEFAULT_STATUS_HOLD: Duration = Duration::from_millis(3000);

/// Fields on the contact form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Email, FieldName::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Message => "message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FieldName::Name),
            "email" => Ok(FieldName::Email),
            "message" => Ok(FieldName::Message),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Current text of every form field
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
            FieldName::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Fields that are blank (whitespace only counts as blank)
    pub fn missing(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// Required-field check for the calling view
    ///
    /// The lifecycle itself never enforces this.
    pub fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }
}

/// Submission status of the form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Inputs that drive status transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormEvent {
    Submit,
    Delivered,
    Failed,
    Cancel,
    /// The success/error notice has been shown long enough
    Settle,
}

impl FormStatus {
    /// Transition table; `None` means the event is not accepted in this status
    pub fn on(self, event: FormEvent) -> Option<FormStatus> {
        use FormEvent::*;
        use FormStatus::*;

        match (self, event) {
            (Idle | Success | Error, Submit) => Some(Submitting),
            (Submitting, Delivered) => Some(Success),
            (Submitting, Failed) => Some(Error),
            (Submitting, Cancel) => Some(Idle),
            (Success | Error, Settle) => Some(Idle),
            _ => None,
        }
    }

    /// Label for the submit button
    pub fn button_label(&self) -> &'static str {
        match self {
            FormStatus::Idle => "Send Message",
            FormStatus::Submitting => "Sending...",
            FormStatus::Success => "Message Sent!",
            FormStatus::Error => "Failed to Send",
        }
    }

    /// Notice shown below the form, if any
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            FormStatus::Success => Some("Thank you for your message! I'll get back to you soon."),
            FormStatus::Error => Some("Something went wrong. Please try again later."),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }

    /// Whether the submit control should accept input
    pub fn accepts_submit(&self) -> bool {
        self.on(FormEvent::Submit).is_some()
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormStatus::Idle => "idle",
            FormStatus::Submitting => "submitting",
            FormStatus::Success => "success",
            FormStatus::Error => "error",
        };
        f.pad(name)
    }
}

/// Delays used by the lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormTimings {
    /// Delay between `submit` and the delivery call
    pub submission_latency: Duration,
    /// How long `success`/`error` is shown before returning to `idle`
    pub status_hold: Duration,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            submission_latency: DEFAULT_SUBMISSION_LATENCY,
            status_hold: DEFAULT_STATUS_HOLD,
        }
    }
}

/// Read-only view of the form for rendering
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub status: FormStatus,
    pub fields: ContactFields,
}

/// Scheduled work; at most one is outstanding
#[derive(Clone, Debug)]
enum Pending {
    /// Deliver the message captured at submit time
    Completion {
        remaining: Duration,
        message: ContactFields,
    },
    /// Return to idle
    Settle { remaining: Duration },
}

impl Pending {
    fn remaining_mut(&mut self) -> &mut Duration {
        match self {
            Pending::Completion { remaining, .. } | Pending::Settle { remaining } => remaining,
        }
    }
}

/// The contact form lifecycle
///
/// Dropping the form discards any pending completion.
pub struct ContactForm<D: MessageDelivery> {
    delivery: D,
    timings: FormTimings,
    status: FormStatus,
    fields: ContactFields,
    pending: Option<Pending>,
    last_error: Option<DeliveryError>,
}

impl<D: MessageDelivery> ContactForm<D> {
    pub fn new(delivery: D, timings: FormTimings) -> Self {
        Self {
            delivery,
            timings,
            status: FormStatus::Idle,
            fields: ContactFields::default(),
            pending: None,
            last_error: None,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            status: self.status,
            fields: self.fields.clone(),
        }
    }

    pub fn timings(&self) -> FormTimings {
        self.timings
    }

    pub fn delivery(&self) -> &D {
        &self.delivery
    }

    /// Error reported by the most recent failed delivery
    pub fn last_error(&self) -> Option<&DeliveryError> {
        self.last_error.as_ref()
    }

    /// Time until the next scheduled transition, if any
    pub fn time_to_next_event(&self) -> Option<Duration> {
        match &self.pending {
            Some(Pending::Completion { remaining, .. }) | Some(Pending::Settle { remaining }) => {
                Some(*remaining)
            }
            None => None,
        }
    }

    /// Set a field's text; never changes the status
    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Submit the current fields
    ///
    /// Required-field validation is the caller's job. Fails with
    /// [`FormError::Busy`] while a submission is in flight.
    pub fn submit(&mut self) -> Result<(), FormError> {
        let next = self.status.on(FormEvent::Submit).ok_or(FormError::Busy)?;

        self.pending = Some(Pending::Completion {
            remaining: self.timings.submission_latency,
            message: self.fields.clone(),
        });
        self.last_error = None;
        self.set_status(next);
        Ok(())
    }

    /// Replace every field, then submit
    pub fn submit_fields(&mut self, fields: ContactFields) -> Result<(), FormError> {
        if !self.status.accepts_submit() {
            return Err(FormError::Busy);
        }
        self.fields = fields;
        self.submit()
    }

    /// Abandon an in-flight submission
    ///
    /// Returns to `idle` and discards the pending completion. Does nothing
    /// (and returns false) unless the form is submitting.
    pub fn cancel(&mut self) -> bool {
        match self.status.on(FormEvent::Cancel) {
            Some(next) => {
                self.pending = None;
                self.set_status(next);
                true
            }
            None => false,
        }
    }

    /// Tear the form down
    ///
    /// Abandons an in-flight submission like [`cancel`](Self::cancel) and
    /// drops any scheduled return to idle. The status then stays put no
    /// matter how far time advances.
    pub fn dispose(&mut self) {
        if !self.cancel() {
            self.pending = None;
        }
        tracing::debug!("ContactForm: disposed in {}", self.status);
    }

    /// Advance time by `dt`, firing every scheduled transition that falls due
    pub fn advance(&mut self, dt: Duration) {
        let mut budget = dt;
        while let Some(mut pending) = self.pending.take() {
            let remaining = pending.remaining_mut();
            if budget < *remaining {
                *remaining -= budget;
                self.pending = Some(pending);
                return;
            }
            budget -= *remaining;
            self.fire(pending);
        }
    }

    fn fire(&mut self, pending: Pending) {
        match pending {
            Pending::Completion { message, .. } => {
                let event = match self.delivery.deliver(&message) {
                    Ok(()) => {
                        self.fields.clear();
                        FormEvent::Delivered
                    }
                    Err(error) => {
                        tracing::warn!("ContactForm: delivery failed: {}", error);
                        self.last_error = Some(error);
                        FormEvent::Failed
                    }
                };
                if self.apply(event) {
                    self.schedule_settle();
                }
            }
            Pending::Settle { .. } => {
                self.apply(FormEvent::Settle);
            }
        }
    }

    /// Run `event` through the transition table; false if it does not apply
    fn apply(&mut self, event: FormEvent) -> bool {
        match self.status.on(event) {
            Some(next) => {
                self.set_status(next);
                true
            }
            None => {
                tracing::debug!("ContactForm: ignored {:?} in {}", event, self.status);
                false
            }
        }
    }

    fn schedule_settle(&mut self) {
        self.pending = Some(Pending::Settle {
            remaining: self.timings.status_hold,
        });
    }

    fn set_status(&mut self, status: FormStatus) {
        tracing::debug!("ContactForm: {} -> {}", self.status, status);
        self.status = status;
    }
}
