//! Per-account store facade tying the domain facets together.

use crate::display::{self, Localizations, SenderRef};
use crate::error::Result;
use crate::events::{Event, EventKind};
use crate::settings::{UserSettings, UserSettingsStore};
use crate::snapshot::InitialSnapshot;
use crate::types::{EventId, UserId};
use crate::users::UserStore;
use tracing::{debug, error};

/// All client-side state for one account session.
///
/// Built once from the initial snapshot after authentication, advanced by
/// applying events in server order, and dropped when the session ends
/// (logout, account switch, teardown). Sibling facets read each other
/// through `&self` accessors; only [`apply_event`](Self::apply_event)
/// mutates anything.
pub struct AccountStore {
    users: UserStore,
    settings: UserSettingsStore,

    /// Highest event id applied so far; the transport resumes from here
    /// after a reconnect.
    last_event_id: EventId,
}

impl AccountStore {
    /// Build every facet from the initial snapshot.
    pub fn from_snapshot(snapshot: &InitialSnapshot) -> Result<Self> {
        Ok(Self {
            users: UserStore::from_snapshot(snapshot)?,
            settings: UserSettingsStore::from_snapshot(snapshot.user_settings),
            last_event_id: snapshot.last_event_id,
        })
    }

    /// The user facet.
    pub fn users(&self) -> &UserStore {
        &self.users
    }

    /// The settings facet.
    pub fn settings(&self) -> &UserSettings {
        self.settings.settings()
    }

    /// The resume cursor for the event transport.
    pub fn last_event_id(&self) -> EventId {
        self.last_event_id
    }

    /// Apply one server event, dispatching to the owning facet.
    ///
    /// Events must arrive in server order. A non-increasing event id means
    /// the transport replayed or reordered its stream: fatal in debug
    /// builds, a logged skip in release.
    pub fn apply_event(&mut self, event: Event) {
        if event.id <= self.last_event_id {
            debug_assert!(
                false,
                "event id {} not past cursor {}",
                event.id, self.last_event_id,
            );
            error!(
                event_id = event.id.0,
                last_event_id = self.last_event_id.0,
                "out-of-order event, skipping"
            );
            return;
        }
        self.last_event_id = event.id;

        debug!(event_id = event.id.0, "applying event");
        match event.kind {
            EventKind::RealmUser(event) => self.users.apply_realm_user_event(event),
            EventKind::MutedUsers(event) => self.users.apply_muted_users_event(event),
            EventKind::UserSettings(update) => self.settings.apply_update_event(update),
        }
    }

    // --- Display Conveniences ---

    /// [`display::user_display_name`] over this store's user facet.
    pub fn user_display_name(
        &self,
        localizations: &impl Localizations,
        user_id: UserId,
        replace_if_muted: bool,
    ) -> String {
        display::user_display_name(&self.users, localizations, user_id, replace_if_muted)
    }

    /// [`display::sender_display_name`] over this store's user facet.
    pub fn sender_display_name(
        &self,
        localizations: &impl Localizations,
        sender: &impl SenderRef,
        replace_if_muted: bool,
    ) -> String {
        display::sender_display_name(&self.users, localizations, sender, replace_if_muted)
    }
}
