//! # Submissions
//!
//! Contact messages and newsletter subscribers accepted from the public site
//! forms, together with the in-memory store that holds them for the lifetime
//! of the process.

pub mod errors;
pub mod model;
pub mod store;
pub mod validation;

pub use errors::{StoreError, StoreResult};
pub use model::{ContactMessage, NewContactMessage, NewNewsletterSubscriber, NewsletterSubscriber};
pub use store::{InMemorySubmissionStore, SubmissionStore, Subscription};
pub use validation::{field_text, is_present, is_valid_email, is_valid_email_value, require_fields};
