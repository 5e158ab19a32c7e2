//! Server-pushed events.
//!
//! Each event variant carries only the changed fields. The transport layer
//! decodes its wire frames into these values and hands them, in
//! server-assigned order, to [`AccountStore::apply_event`](crate::AccountStore::apply_event).

use crate::types::{CustomProfileFieldId, EventId, MutedUser, ProfileFieldValue, User, UserId, UserRole};
use tracing::error;

/// A three-state update for one entity attribute.
///
/// Distinguishes "no change" from "clear", which a bare `Option` conflates.
/// `Unchanged` is the default so update constructors can fill in only the
/// fields an event actually carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// The event does not touch this field.
    Unchanged,
    /// Overwrite the field with a new value.
    Set(T),
    /// Explicitly clear the field.
    Clear,
}

// No `T: Default` bound; the default is always `Unchanged`.
impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Unchanged
    }
}

impl<T> FieldUpdate<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, FieldUpdate::Unchanged)
    }

    /// Apply to a required attribute. `Clear` violates the event schema for
    /// required fields: fatal in debug builds, a logged no-op in release.
    pub(crate) fn apply_to(self, field_name: &'static str, slot: &mut T) {
        match self {
            FieldUpdate::Unchanged => {}
            FieldUpdate::Set(value) => *slot = value,
            FieldUpdate::Clear => {
                debug_assert!(false, "cannot clear required field {field_name}");
                error!(field = field_name, "ignoring clear of required field");
            }
        }
    }

    /// Apply to an optional attribute; `Clear` sets it to `None`.
    pub(crate) fn apply_to_opt(self, slot: &mut Option<T>) {
        match self {
            FieldUpdate::Unchanged => {}
            FieldUpdate::Set(value) => *slot = Some(value),
            FieldUpdate::Clear => *slot = None,
        }
    }
}

/// Change to one custom profile field on one user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileFieldChange {
    pub id: CustomProfileFieldId,

    /// `Set` installs or overwrites the field, `Clear` removes it.
    pub value: FieldUpdate<ProfileFieldValue>,
}

/// Partial update of an existing user.
///
/// Fields left `Unchanged` keep their current value; there is no way to
/// express "reset to default" except where `Clear` is valid.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UserUpdate {
    pub full_name: FieldUpdate<String>,
    pub delivery_email: FieldUpdate<String>,
    pub avatar_url: FieldUpdate<String>,
    pub avatar_version: FieldUpdate<u32>,
    pub timezone: FieldUpdate<String>,
    pub is_active: FieldUpdate<bool>,
    pub is_billing_admin: FieldUpdate<bool>,
    pub role: FieldUpdate<UserRole>,
    pub custom_profile_field: Option<ProfileFieldChange>,
}

/// Lifecycle events for realm users.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RealmUserEvent {
    /// A user joined the realm (or became visible). Authoritative full
    /// record: overwrites any existing entry at the same identity.
    Add(User),

    /// A user left the realm entirely.
    Remove { user_id: UserId },

    /// Attributes of an existing user changed.
    Update { user_id: UserId, update: UserUpdate },
}

/// Wholesale replacement of the mute list.
///
/// The server sends the full membership on every change, never a diff.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutedUsersEvent {
    pub muted_users: Vec<MutedUser>,
}

/// Update to one of this account's own settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserSettingsUpdate {
    TwentyFourHourTime(bool),
    DisplayEmojiReactionUsers(bool),
    PresenceEnabled(bool),
}

/// The payload of one server event, tagged by kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    RealmUser(RealmUserEvent),
    MutedUsers(MutedUsersEvent),
    UserSettings(UserSettingsUpdate),
}

/// One server event: a numbered envelope around a typed payload.
///
/// Event ids are strictly increasing within a session; the transport resumes
/// from [`AccountStore::last_event_id`](crate::AccountStore::last_event_id)
/// after a reconnect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub kind: EventKind,
}
