//! The realm-user store: users, mute state, and lookups.

mod store;

pub use store::UserStore;

use crate::types::{User, UserId};
use std::collections::HashSet;

/// Read-only capability set over the user store.
///
/// Sibling facets and the display layer depend on this trait rather than on
/// [`UserStore`] directly; only the store itself can mutate the collections.
pub trait UserLookup {
    /// Look up a user by identity. Unknown identities are not an error.
    fn get_user(&self, user_id: UserId) -> Option<&User>;

    /// Iterate over every known user, in no particular order.
    ///
    /// The collection routinely holds tens of thousands of entries; callers
    /// should not scan it in per-frame paths.
    fn all_users(&self) -> impl Iterator<Item = &User>;

    /// The identity of the account this store belongs to.
    fn self_user_id(&self) -> UserId;

    /// Whether `user_id` is muted.
    ///
    /// When `candidate` is supplied, membership is tested against it instead
    /// of the authoritative set. Callers with work in flight against a
    /// not-yet-applied mute-list replacement pass the pending membership
    /// here.
    fn is_user_muted_in(&self, user_id: UserId, candidate: Option<&HashSet<UserId>>) -> bool;

    /// Whether `user_id` is muted, per the authoritative set.
    fn is_user_muted(&self, user_id: UserId) -> bool {
        self.is_user_muted_in(user_id, None)
    }

    /// This account's own user record.
    ///
    /// Bootstrap guarantees presence; absence here means the store was
    /// corrupted and is treated as fatal.
    fn self_user(&self) -> &User {
        self.get_user(self.self_user_id())
            .expect("self user must be present in the user store")
    }
}
