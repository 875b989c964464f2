//! # Submission Records
//!
//! Records are immutable once the store hands them back. The `New*` types are
//! what callers supply; the store fills in the id and any missing timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message sent through the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Store-assigned identifier, starting at 1
    pub id: u64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Contact message as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Defaults to insert time when omitted
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl NewContactMessage {
    /// Build a message stamped with the current time
    pub fn now(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
            created_at: Some(Utc::now()),
        }
    }

    pub(crate) fn into_record(self, id: u64) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// A newsletter signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscriber {
    /// Store-assigned identifier, starting at 1
    pub id: u64,
    /// Unique across all subscribers (exact match)
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

/// Newsletter signup as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNewsletterSubscriber {
    pub email: String,
    #[serde(default)]
    pub subscribed_at: Option<DateTime<Utc>>,
}

impl NewNewsletterSubscriber {
    /// Build a signup stamped with the current time
    pub fn now(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            subscribed_at: Some(Utc::now()),
        }
    }

    pub(crate) fn into_record(self, id: u64) -> NewsletterSubscriber {
        NewsletterSubscriber {
            id,
            email: self.email,
            subscribed_at: self.subscribed_at.unwrap_or_else(Utc::now),
        }
    }
}
