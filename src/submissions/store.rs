//! # Submission Store
//!
//! Storage abstraction for contact messages and newsletter subscribers.
//! Handlers receive the store as `Arc<dyn SubmissionStore>`, so a durable
//! backend can replace the in-memory one without touching the routes.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::model::{ContactMessage, NewContactMessage, NewNewsletterSubscriber, NewsletterSubscriber};

const CONTACT_MESSAGES: &str = "contact_messages";
const NEWSLETTER_SUBSCRIBERS: &str = "newsletter_subscribers";

/// Outcome of an insert-if-absent newsletter signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscription {
    /// A new subscriber record was stored
    Created(NewsletterSubscriber),
    /// The email was already subscribed; the stored record is returned unchanged
    Existing(NewsletterSubscriber),
}

impl Subscription {
    /// The subscriber record, new or existing
    pub fn subscriber(&self) -> &NewsletterSubscriber {
        match self {
            Subscription::Created(s) | Subscription::Existing(s) => s,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Subscription::Created(_))
    }
}

/// Submission store trait
///
/// Records are never updated or deleted once stored.
pub trait SubmissionStore: Send + Sync {
    /// Store a contact message under the next contact id
    fn create_contact_message(&self, message: NewContactMessage) -> StoreResult<ContactMessage>;

    /// Store a subscriber under the next subscriber id
    ///
    /// Does not check for an existing subscriber with the same email;
    /// use [`SubmissionStore::subscribe_newsletter`] for that.
    fn create_newsletter_subscriber(
        &self,
        subscriber: NewNewsletterSubscriber,
    ) -> StoreResult<NewsletterSubscriber>;

    /// Find the first subscriber (in id order) whose email matches exactly
    fn get_newsletter_subscriber_by_email(
        &self,
        email: &str,
    ) -> StoreResult<Option<NewsletterSubscriber>>;

    /// Insert a subscriber unless one with the same email exists
    ///
    /// Lookup and insert happen as one step, so concurrent signups for the
    /// same address produce exactly one record.
    fn subscribe_newsletter(&self, subscriber: NewNewsletterSubscriber) -> StoreResult<Subscription>;

    /// Number of stored contact messages
    fn contact_message_count(&self) -> StoreResult<usize>;

    /// Number of stored newsletter subscribers
    fn newsletter_subscriber_count(&self) -> StoreResult<usize>;
}

/// One id-keyed table with its own counter
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Assign the next id, store the row built from it, and return a copy
    fn insert_with(&mut self, name: &'static str, build: impl FnOnce(u64) -> T) -> StoreResult<T> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(StoreError::IdExhausted(name))?;

        let row = build(id);
        self.rows.insert(id, row.clone());
        Ok(row)
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory submission store
///
/// Each table sits behind its own lock. Nothing is persisted; dropping the
/// store discards every record.
#[derive(Debug, Default)]
pub struct InMemorySubmissionStore {
    contact_messages: RwLock<Table<ContactMessage>>,
    newsletter_subscribers: RwLock<Table<NewsletterSubscriber>>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn find_by_email<'a>(
    table: &'a Table<NewsletterSubscriber>,
    email: &str,
) -> Option<&'a NewsletterSubscriber> {
    table.rows.values().find(|s| s.email == email)
}

impl SubmissionStore for InMemorySubmissionStore {
    fn create_contact_message(&self, message: NewContactMessage) -> StoreResult<ContactMessage> {
        let mut table = self
            .contact_messages
            .write()
            .map_err(|_| StoreError::LockPoisoned(CONTACT_MESSAGES))?;

        table.insert_with(CONTACT_MESSAGES, |id| message.into_record(id))
    }

    fn create_newsletter_subscriber(
        &self,
        subscriber: NewNewsletterSubscriber,
    ) -> StoreResult<NewsletterSubscriber> {
        let mut table = self
            .newsletter_subscribers
            .write()
            .map_err(|_| StoreError::LockPoisoned(NEWSLETTER_SUBSCRIBERS))?;

        table.insert_with(NEWSLETTER_SUBSCRIBERS, |id| subscriber.into_record(id))
    }

    fn get_newsletter_subscriber_by_email(
        &self,
        email: &str,
    ) -> StoreResult<Option<NewsletterSubscriber>> {
        let table = self
            .newsletter_subscribers
            .read()
            .map_err(|_| StoreError::LockPoisoned(NEWSLETTER_SUBSCRIBERS))?;

        Ok(find_by_email(&table, email).cloned())
    }

    fn subscribe_newsletter(&self, subscriber: NewNewsletterSubscriber) -> StoreResult<Subscription> {
        let mut table = self
            .newsletter_subscribers
            .write()
            .map_err(|_| StoreError::LockPoisoned(NEWSLETTER_SUBSCRIBERS))?;

        if let Some(existing) = find_by_email(&table, &subscriber.email) {
            return Ok(Subscription::Existing(existing.clone()));
        }

        table
            .insert_with(NEWSLETTER_SUBSCRIBERS, |id| subscriber.into_record(id))
            .map(Subscription::Created)
    }

    fn contact_message_count(&self) -> StoreResult<usize> {
        let table = self
            .contact_messages
            .read()
            .map_err(|_| StoreError::LockPoisoned(CONTACT_MESSAGES))?;
        Ok(table.rows.len())
    }

    fn newsletter_subscriber_count(&self) -> StoreResult<usize> {
        let table = self
            .newsletter_subscribers
            .read()
            .map_err(|_| StoreError::LockPoisoned(NEWSLETTER_SUBSCRIBERS))?;
        Ok(table.rows.len())
    }
}
