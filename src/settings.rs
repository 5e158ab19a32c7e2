//! Per-account settings store.
//!
//! The smallest instance of the domain-store pattern: seeded from the
//! snapshot, mutated one property at a time by settings events, read
//! synchronously by the UI.

use crate::events::UserSettingsUpdate;
use serde::{Deserialize, Serialize};

/// This account's own settings, as known to the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserSettings {
    pub twenty_four_hour_time: bool,
    pub display_emoji_reaction_users: bool,
    pub presence_enabled: bool,
}

/// Store for this account's settings.
pub struct UserSettingsStore {
    settings: UserSettings,
}

impl UserSettingsStore {
    pub fn from_snapshot(settings: UserSettings) -> Self {
        Self { settings }
    }

    /// Current settings values.
    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    /// Apply one settings event. Each event updates exactly one property.
    pub fn apply_update_event(&mut self, update: UserSettingsUpdate) {
        match update {
            UserSettingsUpdate::TwentyFourHourTime(value) => {
                self.settings.twenty_four_hour_time = value;
            }
            UserSettingsUpdate::DisplayEmojiReactionUsers(value) => {
                self.settings.display_emoji_reaction_users = value;
            }
            UserSettingsUpdate::PresenceEnabled(value) => {
                self.settings.presence_enabled = value;
            }
        }
    }
}
