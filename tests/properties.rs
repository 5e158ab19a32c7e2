//! Property tests for the store's merge and replacement rules.

use proptest::prelude::*;
use realm_store::{
    EventId, FieldUpdate, InitialSnapshot, MutedUser, MutedUsersEvent, RealmUserEvent, Timestamp,
    User, UserId, UserLookup, UserRole, UserSettings, UserStore, UserUpdate,
};
use std::collections::HashSet;

fn user(user_id: u64, full_name: String) -> User {
    User {
        user_id: UserId(user_id),
        delivery_email: None,
        full_name,
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

fn snapshot_of(lists: [Vec<User>; 3]) -> InitialSnapshot {
    let [realm_users, realm_non_active_users, cross_realm_bots] = lists;
    InitialSnapshot {
        self_user_id: UserId(0),
        last_event_id: EventId(0),
        realm_users,
        realm_non_active_users,
        cross_realm_bots,
        muted_users: Vec::new(),
        user_settings: UserSettings::default(),
    }
}

/// Distinct user ids split across the three snapshot lists, with id 0
/// (the self user) always present in the first.
fn arb_snapshot() -> impl Strategy<Value = InitialSnapshot> {
    proptest::collection::hash_set(1u64..500, 0..40).prop_flat_map(|ids| {
        let ids: Vec<u64> = ids.into_iter().collect();
        let len = ids.len();
        proptest::collection::vec(0usize..3, len).prop_map(move |slots| {
            let mut lists: [Vec<User>; 3] = Default::default();
            lists[0].push(user(0, "Self".to_string()));
            for (&id, &slot) in ids.iter().zip(&slots) {
                lists[slot].push(user(id, format!("User {id}")));
            }
            snapshot_of(lists)
        })
    })
}

fn arb_field(present: bool, value: String) -> FieldUpdate<String> {
    if present {
        FieldUpdate::Set(value)
    } else {
        FieldUpdate::Unchanged
    }
}

proptest! {
    /// Every identity in any snapshot list is queryable with its exact
    /// field values after bootstrap.
    #[test]
    fn bootstrap_preserves_every_user(snapshot in arb_snapshot()) {
        let store = UserStore::from_snapshot(&snapshot).unwrap();

        let all = [
            &snapshot.realm_users,
            &snapshot.realm_non_active_users,
            &snapshot.cross_realm_bots,
        ];
        let expected: usize = all.iter().map(|l| l.len()).sum();
        prop_assert_eq!(store.len(), expected);

        for listed in all.into_iter().flatten() {
            prop_assert_eq!(store.get_user(listed.user_id), Some(listed));
        }
    }

    /// Full-replacement updates are idempotent, and fields the event does
    /// not carry keep their prior values.
    #[test]
    fn update_is_idempotent_and_touches_only_present_fields(
        set_name in any::<bool>(),
        set_timezone in any::<bool>(),
        name in "[A-Za-z ]{1,20}",
        timezone in "[A-Za-z/]{1,20}",
    ) {
        let snapshot = snapshot_of([vec![user(0, "Self".to_string()), user(1, "Alice".to_string())], vec![], vec![]]);
        let mut store = UserStore::from_snapshot(&snapshot).unwrap();
        let before = store.get_user(UserId(1)).unwrap().clone();

        let update = UserUpdate {
            full_name: arb_field(set_name, name.clone()),
            timezone: arb_field(set_timezone, timezone.clone()),
            ..UserUpdate::default()
        };

        store.apply_realm_user_event(RealmUserEvent::Update {
            user_id: UserId(1),
            update: update.clone(),
        });
        let once = store.get_user(UserId(1)).unwrap().clone();

        store.apply_realm_user_event(RealmUserEvent::Update {
            user_id: UserId(1),
            update,
        });
        let twice = store.get_user(UserId(1)).unwrap().clone();

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(&once.full_name, if set_name { &name } else { &before.full_name });
        prop_assert_eq!(&once.timezone, if set_timezone { &timezone } else { &before.timezone });
        prop_assert_eq!(once.is_active, before.is_active);
        prop_assert_eq!(once.role, before.role);
    }

    /// After a mute-list event, membership is exactly the event's list; the
    /// prior set contributes nothing.
    #[test]
    fn mute_replacement_is_wholesale(
        before in proptest::collection::hash_set(0u64..100, 0..20),
        after in proptest::collection::hash_set(0u64..100, 0..20),
    ) {
        let mut snapshot = snapshot_of([vec![user(0, "Self".to_string())], vec![], vec![]]);
        snapshot.muted_users = before
            .iter()
            .map(|&id| MutedUser { user_id: UserId(id), timestamp: Timestamp(0) })
            .collect();
        let mut store = UserStore::from_snapshot(&snapshot).unwrap();

        store.apply_muted_users_event(MutedUsersEvent {
            muted_users: after
                .iter()
                .map(|&id| MutedUser { user_id: UserId(id), timestamp: Timestamp(1) })
                .collect(),
        });

        let muted: HashSet<u64> = store.muted_users().map(|m| m.user_id.0).collect();
        prop_assert_eq!(muted, after);
    }

    /// Update events for unknown identities never change the collection.
    #[test]
    fn unknown_update_is_noop(unknown_id in 100u64..1000) {
        let snapshot = snapshot_of([vec![user(0, "Self".to_string()), user(1, "Alice".to_string())], vec![], vec![]]);
        let mut store = UserStore::from_snapshot(&snapshot).unwrap();

        store.apply_realm_user_event(RealmUserEvent::Update {
            user_id: UserId(unknown_id),
            update: UserUpdate {
                full_name: FieldUpdate::Set("X".to_string()),
                ..UserUpdate::default()
            },
        });

        prop_assert_eq!(store.len(), 2);
        prop_assert!(store.get_user(UserId(unknown_id)).is_none());
    }
}
