//! # Store Errors
//!
//! Error types for the submission store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Submission store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A writer panicked while holding the table lock
    #[error("Lock poisoned on {0} table")]
    LockPoisoned(&'static str),

    /// The id counter for a table cannot advance any further
    #[error("Identifier space exhausted on {0} table")]
    IdExhausted(&'static str),
}
