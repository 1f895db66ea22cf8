mod profile_creator;

use crate::{GateSnapshot, ProfileStore, SessionGate, StoreState};

use pd_core::{ColorTag, Profile, Session, SessionUser, UserMetadata};

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

pub(crate) const USER_ID: &str = "6b1c3c9e-8a5e-4c1e-9f44-3f1f0d6f2a10";

const WAIT: Duration = Duration::from_secs(2);

pub(crate) fn user_id() -> Uuid {
    Uuid::parse_str(USER_ID).unwrap()
}

pub(crate) fn created(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap() + chrono::Duration::minutes(minutes)
}

pub(crate) fn profile(id: i64, name: &str) -> Profile {
    Profile {
        id,
        name: name.to_string(),
        url: format!("https://example.com/{id}"),
        color: ColorTag::default(),
        owner_id: Some(user_id()),
        created_at: created(id),
    }
}

pub(crate) fn session(full_name: &str) -> Session {
    Session {
        user: SessionUser {
            id: user_id(),
            email: Some(String::from("ada@example.com")),
            metadata: UserMetadata {
                full_name: Some(full_name.to_string()),
            },
        },
        access_token: String::from("jwt"),
        refresh_token: None,
        token_type: String::from("bearer"),
        expires_at: None,
    }
}

pub(crate) async fn wait_for_gate(
    gate: &SessionGate,
    predicate: impl FnMut(&GateSnapshot) -> bool,
) -> GateSnapshot {
    let mut rx = gate.watch();
    tokio::time::timeout(WAIT, rx.wait_for(predicate))
        .await
        .expect("gate did not reach the expected state")
        .unwrap()
        .clone()
}

pub(crate) async fn wait_for_store(
    store: &ProfileStore,
    predicate: impl FnMut(&StoreState) -> bool,
) -> StoreState {
    let mut rx = store.watch();
    tokio::time::timeout(WAIT, rx.wait_for(predicate))
        .await
        .expect("store did not reach the expected state")
        .unwrap()
        .clone()
}
