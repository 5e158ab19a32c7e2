//! Core types for the realm store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Unique identifier for a realm user (human or bot).
///
/// Assigned by the server; immutable for the life of the account.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-assigned position in the event stream (per-session).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct EventId(pub u64);

impl fmt::Debug for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventId({})", self.0)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl EventId {
    pub fn next(self) -> Self {
        EventId(self.0 + 1)
    }
}

/// Seconds since Unix epoch, as reported by the server.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

/// Identifier for a custom profile field defined by the realm.
pub type CustomProfileFieldId = u64;

/// A user's role within the realm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Owner,
    Administrator,
    Moderator,
    Member,
    Guest,
    /// A role this client version does not recognize.
    Unknown,
}

impl UserRole {
    /// Whether this role grants realm administration rights.
    pub fn is_admin(self) -> bool {
        matches!(self, UserRole::Owner | UserRole::Administrator)
    }
}

/// A user's value for one custom profile field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFieldValue {
    pub value: String,

    /// Server-rendered HTML, present for long-text fields.
    pub rendered_value: Option<String>,
}

/// A realm participant.
///
/// The identity is immutable once created; every other attribute may be
/// overwritten in place by update events. Instances are owned exclusively
/// by the [`UserStore`](crate::UserStore); readers get shared references.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identity (assigned by server).
    pub user_id: UserId,

    /// Email address messages are delivered to, if visible to this account.
    pub delivery_email: Option<String>,

    /// Display name.
    pub full_name: String,

    /// Avatar image reference; `None` means the server-computed default.
    pub avatar_url: Option<String>,

    /// Bumped by the server whenever the avatar changes, for cache busting.
    pub avatar_version: u32,

    /// IANA timezone name, or empty if unset.
    pub timezone: String,

    /// Whether the user is active in the realm. Deactivated users are
    /// retained so old messages still render a name.
    pub is_active: bool,

    pub is_billing_admin: bool,

    pub is_bot: bool,

    pub role: UserRole,

    /// Values for the realm's custom profile fields.
    ///
    /// The canonical empty form is `None`, never `Some` of an empty map;
    /// the store normalizes on insert and after field removal so that
    /// equality is independent of which empty form the server sent.
    pub profile_data: Option<HashMap<CustomProfileFieldId, ProfileFieldValue>>,
}

impl User {
    /// Normalize an empty profile-field map to the canonical absent form.
    pub(crate) fn canonicalize_profile_data(&mut self) {
        if self.profile_data.as_ref().is_some_and(HashMap::is_empty) {
            self.profile_data = None;
        }
    }
}

/// One entry in the mute list.
///
/// Mute state has a lifecycle independent of the user table: an identity may
/// be muted whether or not the user itself is currently known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutedUser {
    pub user_id: UserId,

    /// When the mute was created.
    pub timestamp: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(user_id: u64, full_name: &str) -> User {
        User {
            user_id: UserId(user_id),
            delivery_email: None,
            full_name: full_name.to_string(),
            avatar_url: None,
            avatar_version: 0,
            timezone: String::new(),
            is_active: true,
            is_billing_admin: false,
            is_bot: false,
            role: UserRole::Member,
            profile_data: None,
        }
    }

    #[test]
    fn test_event_id_navigation() {
        assert_eq!(EventId(5).next(), EventId(6));
        assert!(EventId(5) < EventId(6));
    }

    #[test]
    fn test_role_admin() {
        assert!(UserRole::Owner.is_admin());
        assert!(UserRole::Administrator.is_admin());
        assert!(!UserRole::Moderator.is_admin());
        assert!(!UserRole::Guest.is_admin());
    }

    #[test]
    fn test_profile_data_canonicalization() {
        let mut user = sample_user(1, "Alice");
        user.profile_data = Some(HashMap::new());
        user.canonicalize_profile_data();
        assert_eq!(user.profile_data, None);

        // Equality is form-independent once canonicalized.
        let mut other = sample_user(1, "Alice");
        other.profile_data = None;
        assert_eq!(user, other);
    }

    #[test]
    fn test_canonicalization_keeps_populated_map() {
        let mut user = sample_user(1, "Alice");
        user.profile_data = Some(HashMap::from([(
            7,
            ProfileFieldValue {
                value: "x".to_string(),
                rendered_value: None,
            },
        )]));
        user.canonicalize_profile_data();
        assert!(user.profile_data.is_some());
    }
}
