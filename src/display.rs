//! UI-facing display strings derived from store state.
//!
//! Pure functions over a [`UserLookup`] plus a caller-supplied localization
//! lookup. No state is kept here; everything is recomputed per call, and
//! nothing in this module panics on identities absent from the store.

use crate::types::UserId;
use crate::users::UserLookup;
use std::borrow::Cow;

/// Localized placeholder strings the display layer needs.
///
/// Injected by the host application; the store never reaches into an
/// ambient translation catalog.
pub trait Localizations {
    /// Shown for an identity the store does not know.
    fn unknown_user_name(&self) -> Cow<'_, str>;

    /// Shown in place of a muted user's name.
    fn muted_user_name(&self) -> Cow<'_, str>;
}

/// Untranslated English strings, for tests and hosts without a catalog.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishLocalizations;

impl Localizations for EnglishLocalizations {
    fn unknown_user_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("(unknown user)")
    }

    fn muted_user_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Muted user")
    }
}

/// Something message-like that names a sender: carries the sender's identity
/// plus the display name that was embedded when it was sent.
pub trait SenderRef {
    fn sender_id(&self) -> UserId;

    /// The sender's name as recorded in the object itself. Used as the
    /// fallback when the sender is not in the store, which beats the
    /// generic unknown-user placeholder.
    fn sender_full_name(&self) -> &str;
}

/// The name to show for `user_id`.
///
/// Muted users get the muted placeholder (unless `replace_if_muted` is
/// false), unknown users the unknown-user placeholder.
pub fn user_display_name(
    store: &impl UserLookup,
    localizations: &impl Localizations,
    user_id: UserId,
    replace_if_muted: bool,
) -> String {
    if replace_if_muted && store.is_user_muted(user_id) {
        return localizations.muted_user_name().into_owned();
    }
    match store.get_user(user_id) {
        Some(user) => user.full_name.clone(),
        None => localizations.unknown_user_name().into_owned(),
    }
}

/// The name to show for the sender of a message-like object.
///
/// Same muting rule as [`user_display_name`], but an unknown sender falls
/// back to the name embedded in the object rather than the generic
/// placeholder.
pub fn sender_display_name(
    store: &impl UserLookup,
    localizations: &impl Localizations,
    sender: &impl SenderRef,
    replace_if_muted: bool,
) -> String {
    let sender_id = sender.sender_id();
    if replace_if_muted && store.is_user_muted(sender_id) {
        return localizations.muted_user_name().into_owned();
    }
    match store.get_user(sender_id) {
        Some(user) => user.full_name.clone(),
        None => sender.sender_full_name().to_string(),
    }
}
