//! # Realm Store
//!
//! The client-side data model for a group-chat account: an in-memory store
//! bootstrapped from an initial snapshot, then kept current by applying the
//! server's ordered event stream, one event at a time.
//!
//! ## Core Concepts
//!
//! - **Snapshot**: the one-time bulk state delivered at session start
//! - **Events**: incremental, server-numbered changes applied in order
//! - **Facets**: one store per domain (users, settings), composed into a
//!   per-account [`AccountStore`]
//! - **Display**: pure functions deriving UI strings from store state
//!
//! ## Example
//!
//! ```ignore
//! use realm_store::{AccountStore, EnglishLocalizations, UserId};
//!
//! let mut store = AccountStore::from_snapshot(&snapshot)?;
//!
//! // Feed the event stream as the transport delivers it
//! for event in transport.events() {
//!     store.apply_event(event);
//! }
//!
//! // Queries are synchronous and never fail
//! let name = store.user_display_name(&EnglishLocalizations, UserId(7), true);
//! ```

pub mod account;
pub mod display;
pub mod error;
pub mod events;
pub mod settings;
pub mod snapshot;
pub mod types;
pub mod users;

// Re-exports
pub use account::AccountStore;
pub use display::{sender_display_name, user_display_name, EnglishLocalizations, Localizations, SenderRef};
pub use error::{Result, StoreError};
pub use events::{
    Event, EventKind, FieldUpdate, MutedUsersEvent, ProfileFieldChange, RealmUserEvent,
    UserSettingsUpdate, UserUpdate,
};
pub use settings::{UserSettings, UserSettingsStore};
pub use snapshot::InitialSnapshot;
pub use types::*;
pub use users::{UserLookup, UserStore};
