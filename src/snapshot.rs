//! The initial state delivered once per session.

use crate::settings::UserSettings;
use crate::types::{EventId, MutedUser, User, UserId};
use serde::{Deserialize, Serialize};

/// Bulk initial state, supplied by the session-bootstrap collaborator after
/// authentication.
///
/// Seeds every store facet in one shot; after this, state changes only by
/// applying events. The three user lists partition the realm's participants;
/// an identity appearing in more than one list is a server bug (see
/// [`UserStore::from_snapshot`](crate::UserStore::from_snapshot)).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InitialSnapshot {
    /// The account this session belongs to.
    pub self_user_id: UserId,

    /// The event id the snapshot is current through; events resume after it.
    pub last_event_id: EventId,

    /// Active members of the realm.
    pub realm_users: Vec<User>,

    /// Deactivated members, retained for rendering old messages.
    pub realm_non_active_users: Vec<User>,

    /// Service accounts shared across realms (notification bot, etc).
    pub cross_realm_bots: Vec<User>,

    /// Identities this account has muted.
    pub muted_users: Vec<MutedUser>,

    /// This account's own settings.
    pub user_settings: UserSettings,
}
