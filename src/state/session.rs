//! Persisted session state and its hydration contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session record is the only state mutated by more than one logical
//! actor: the sign-in flow writes it, sign-out clears it, and hydration
//! seeds it. Every mutation is a full replacement, so the last `set_user`
//! wins and synchronously supersedes prior reads; there is no merge path.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::persist;

/// localStorage key holding the serialized [`PersistedSession`].
pub const SESSION_STORAGE_KEY: &str = "vestibule_session";

/// An authenticated user's profile as reported at sign-in.
///
/// Provider-specific attributes beyond the known fields are carried opaquely
/// in `extra` so they survive a persist/hydrate round trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SessionUser {
    /// A present record must carry non-empty `id`, `name`, and `email`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty() && !self.email.is_empty()
    }
}

/// Durable layout: a single key holding `{ "user": <record|null> }`.
///
/// The hydration flag is never persisted; it is recomputed as `false` at
/// every process start.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub user: Option<SessionUser>,
}

/// In-memory session state: the current user plus the one-shot hydration
/// flag. Absence of a record means no authenticated session is known to
/// this client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    user: Option<SessionUser>,
    hydrated: bool,
}

impl SessionState {
    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Replace the whole record.
    pub fn set_user(&mut self, user: Option<SessionUser>) {
        self.user = user;
    }

    /// Monotonic hydration: the first call takes the transition, later calls
    /// are no-ops and never un-set. Returns whether this call transitioned,
    /// so callers can avoid duplicate notifications.
    pub fn mark_hydrated(&mut self) -> bool {
        let transitioned = !self.hydrated;
        self.hydrated = true;
        transitioned
    }
}

/// Replace the session user on `session` and schedule the durable write.
///
/// The write is fire-and-forget: storage failures degrade to an in-memory
/// session and are never reported to the caller.
pub fn store_user(session: RwSignal<SessionState>, user: Option<SessionUser>) {
    session.update(|state| state.set_user(user.clone()));
    persist::save_json(SESSION_STORAGE_KEY, &PersistedSession { user });
}

/// One-shot hydration of `session` from durable storage.
///
/// ERROR HANDLING
/// ==============
/// Unreadable, missing, corrupt, or invalid storage all hydrate to "no prior
/// session"; hydration completion is signaled in every case so the load gate
/// can never hang on a storage failure.
pub fn hydrate_session(session: RwSignal<SessionState>) {
    if session.with_untracked(SessionState::is_hydrated) {
        return;
    }
    let restored = persist::load_json::<PersistedSession>(SESSION_STORAGE_KEY)
        .unwrap_or_default()
        .user
        .filter(SessionUser::is_valid);
    session.update(|state| {
        state.set_user(restored);
        state.mark_hydrated();
    });
}
