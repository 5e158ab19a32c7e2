//! Error types for the realm store.
//!
//! The store has no I/O and raises errors only at bootstrap. Everything
//! after bootstrap degrades silently: lookups return `Option`, and event
//! application logs and no-ops on stale references.

use crate::types::UserId;
use thiserror::Error;

/// Main error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The initial snapshot did not contain the account's own user. This
    /// indicates a session-bootstrap bug, not a runtime condition.
    #[error("self user not found in initial snapshot: {0}")]
    SelfUserMissing(UserId),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
