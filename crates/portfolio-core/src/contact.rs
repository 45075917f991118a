//! Contact form validation and submission.
//!
//! The form itself is local state; delivery is delegated to a
//! [`ContactSink`]. The site ships [`OutboxSink`], which queues messages
//! as JSON lines for an external mailer to pick up.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ContactError;

/// A validated message ready for delivery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// Delivers contact messages somewhere outside the site.
pub trait ContactSink {
    fn submit(&mut self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Appends each message as one JSON line to an outbox file.
#[derive(Clone, Debug)]
pub struct OutboxSink {
    path: PathBuf,
}

impl OutboxSink {
    pub const FILE_NAME: &'static str = "outbox.jsonl";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, message: &ContactMessage) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let line = serde_json::to_string(message)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl ContactSink for OutboxSink {
    fn submit(&mut self, message: &ContactMessage) -> Result<(), ContactError> {
        self.append(message)
            .map_err(|e| ContactError::Delivery(e.to_string()))?;
        tracing::info!(path = %self.path.display(), from = %message.email, "Contact message queued");
        Ok(())
    }
}

/// Outcome of the last submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sent,
    Failed(String),
}

/// Editable contact form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Checks the fields and builds a message stamped with the current time.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = required(&self.name, "name")?;
        let email = required(&self.email, "email")?;
        let message = required(&self.message, "message")?;

        if !is_plausible_email(&email) {
            return Err(ContactError::InvalidEmail(email));
        }

        let subject = self.subject.trim();
        Ok(ContactMessage {
            name,
            email,
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message,
            sent_at: Utc::now(),
        })
    }

    /// Validates and hands the message to `sink`.
    ///
    /// On success the fields are cleared. Either way the outcome is kept
    /// in [`ContactForm::status`].
    pub fn submit(&mut self, sink: &mut dyn ContactSink) -> Result<(), ContactError> {
        let result = self.validate().and_then(|message| sink.submit(&message));
        match &result {
            Ok(()) => {
                *self = ContactForm {
                    status: SubmitStatus::Sent,
                    ..ContactForm::default()
                };
            }
            Err(e) => {
                tracing::debug!(error = %e, "Contact submission rejected");
                self.status = SubmitStatus::Failed(e.to_string());
            }
        }
        result
    }

    /// Clears a previous success/failure banner.
    pub fn reset_status(&mut self) {
        self.status = SubmitStatus::Idle;
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ContactError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ContactError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// `local@domain.tld` with no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
        }
        None => false,
    }
}
