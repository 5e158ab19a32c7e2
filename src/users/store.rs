//! The user-store core: bootstrap from snapshot, apply events, serve queries.

use crate::error::{Result, StoreError};
use crate::events::{FieldUpdate, MutedUsersEvent, RealmUserEvent, UserUpdate};
use crate::snapshot::InitialSnapshot;
use crate::types::{MutedUser, Timestamp, User, UserId};
use crate::users::UserLookup;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// In-memory store of realm users and mute state for one account session.
///
/// Seeded entirely from the initial snapshot, then mutated only by applying
/// events in the order received. Exactly one logical path calls the apply
/// methods; each application is atomic with respect to readers, so queries
/// between applications always observe a consistent state.
#[derive(Debug)]
pub struct UserStore {
    /// The account's own identity. Always present in `users`.
    self_user_id: UserId,

    /// All known users, active and not, keyed by identity.
    users: HashMap<UserId, User>,

    /// Authoritative mute set, with the time each mute was created.
    muted: HashMap<UserId, Timestamp>,
}

impl UserStore {
    /// Build the store from the initial snapshot.
    ///
    /// The user table is the union of the snapshot's three lists, keyed by
    /// identity. A collision between lists is a server bug: fatal in debug
    /// builds, first-list-wins in release. Returns an error if the
    /// account's own user is missing from the union.
    pub fn from_snapshot(snapshot: &InitialSnapshot) -> Result<Self> {
        let lists = [
            &snapshot.realm_users,
            &snapshot.realm_non_active_users,
            &snapshot.cross_realm_bots,
        ];

        let mut users: HashMap<UserId, User> =
            HashMap::with_capacity(lists.iter().map(|l| l.len()).sum());
        for list in lists {
            for user in list {
                match users.entry(user.user_id) {
                    Entry::Vacant(slot) => {
                        let mut user = user.clone();
                        user.canonicalize_profile_data();
                        slot.insert(user);
                    }
                    // Earlier lists win; a collision is a server bug.
                    Entry::Occupied(_) => {
                        debug_assert!(
                            false,
                            "user id {} appears in more than one snapshot list",
                            user.user_id,
                        );
                        warn!(
                            user_id = user.user_id.0,
                            "duplicate user across snapshot lists, keeping first"
                        );
                    }
                }
            }
        }

        if !users.contains_key(&snapshot.self_user_id) {
            return Err(StoreError::SelfUserMissing(snapshot.self_user_id));
        }

        let muted = snapshot
            .muted_users
            .iter()
            .map(|m| (m.user_id, m.timestamp))
            .collect();

        Ok(Self {
            self_user_id: snapshot.self_user_id,
            users,
            muted,
        })
    }

    /// Number of known users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Number of muted identities.
    pub fn mute_count(&self) -> usize {
        self.muted.len()
    }

    /// When `user_id` was muted, if it is.
    pub fn muted_since(&self, user_id: UserId) -> Option<Timestamp> {
        self.muted.get(&user_id).copied()
    }

    // --- Event Application ---

    /// Apply one user lifecycle event.
    ///
    /// Never fails: events referencing unknown identities are logged and
    /// dropped, because fetch-vs-event races routinely produce references
    /// to users not yet (or no longer) present.
    pub fn apply_realm_user_event(&mut self, event: RealmUserEvent) {
        match event {
            RealmUserEvent::Add(mut user) => {
                user.canonicalize_profile_data();
                if self.users.insert(user.user_id, user).is_some() {
                    debug!("add event overwrote existing user");
                }
            }

            RealmUserEvent::Remove { user_id } => {
                // Removing an absent identity is a silent no-op.
                self.users.remove(&user_id);
            }

            RealmUserEvent::Update { user_id, update } => {
                let Some(user) = self.users.get_mut(&user_id) else {
                    warn!(user_id = user_id.0, "update event for unknown user, skipping");
                    return;
                };
                Self::apply_update(user, update);
            }
        }
    }

    fn apply_update(user: &mut User, update: UserUpdate) {
        update.full_name.apply_to("full_name", &mut user.full_name);
        update.delivery_email.apply_to_opt(&mut user.delivery_email);
        update.avatar_url.apply_to_opt(&mut user.avatar_url);
        update
            .avatar_version
            .apply_to("avatar_version", &mut user.avatar_version);
        update.timezone.apply_to("timezone", &mut user.timezone);
        update.is_active.apply_to("is_active", &mut user.is_active);
        update
            .is_billing_admin
            .apply_to("is_billing_admin", &mut user.is_billing_admin);
        update.role.apply_to("role", &mut user.role);

        if let Some(change) = update.custom_profile_field {
            match change.value {
                FieldUpdate::Set(value) => {
                    user.profile_data
                        .get_or_insert_with(HashMap::new)
                        .insert(change.id, value);
                }
                FieldUpdate::Clear => {
                    if let Some(fields) = user.profile_data.as_mut() {
                        fields.remove(&change.id);
                    }
                    user.canonicalize_profile_data();
                }
                FieldUpdate::Unchanged => {}
            }
        }
    }

    /// Apply a mute-list event: wholesale replacement, not a diff.
    ///
    /// Prior membership has no effect on the result; identities need not be
    /// known users.
    pub fn apply_muted_users_event(&mut self, event: MutedUsersEvent) {
        self.muted.clear();
        self.muted.extend(
            event
                .muted_users
                .iter()
                .map(|m| (m.user_id, m.timestamp)),
        );
    }

    /// The current mute list, as mute entries.
    pub fn muted_users(&self) -> impl Iterator<Item = MutedUser> + '_ {
        self.muted.iter().map(|(&user_id, &timestamp)| MutedUser {
            user_id,
            timestamp,
        })
    }
}

impl UserLookup for UserStore {
    fn get_user(&self, user_id: UserId) -> Option<&User> {
        self.users.get(&user_id)
    }

    fn all_users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    fn self_user_id(&self) -> UserId {
        self.self_user_id
    }

    fn is_user_muted_in(&self, user_id: UserId, candidate: Option<&HashSet<UserId>>) -> bool {
        match candidate {
            Some(set) => set.contains(&user_id),
            None => self.muted.contains_key(&user_id),
        }
    }
}
