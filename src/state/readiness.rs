//! Convergence of session hydration and adapter status into load readiness.
//!
//! DESIGN
//! ======
//! A pure projection with no mutable state of its own: re-derived
//! synchronously whenever either input changes, with no debounce and no
//! timeout. If the adapter never leaves a busy status the aggregate stays
//! incomplete, which fails safe (protected content is never shown while
//! identity state is unknown); any liveness timeout belongs to the
//! surrounding system.

#[cfg(test)]
#[path = "readiness_test.rs"]
mod readiness_test;

use leptos::prelude::*;

use super::identity::{IdentityAdapter, IdentityState};
use super::session::SessionState;

/// Readiness booleans exposed to the surrounding UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Readiness {
    /// Hydration finished and the adapter is idle; gates the first render.
    pub initial_load_complete: bool,
    /// The adapter is mid-operation (login, redirect handling, silent renew).
    pub auth_in_progress: bool,
    /// Persisted session state has not been loaded yet.
    pub session_hydrating: bool,
}

impl Readiness {
    /// Derive the aggregate from its two inputs.
    ///
    /// Redirect settling is deliberately not an input here: it concerns
    /// per-navigation redirects after the initial load and is consumed by
    /// the auth gate alone.
    #[must_use]
    pub fn derive(session: &SessionState, identity: &IdentityState) -> Self {
        Self {
            initial_load_complete: session.is_hydrated() && !identity.status.is_busy(),
            auth_in_progress: identity.status.is_busy(),
            session_hydrating: !session.is_hydrated(),
        }
    }
}

/// Reactive projection over the session and identity contexts.
pub fn use_readiness() -> Memo<Readiness> {
    let session = expect_context::<RwSignal<SessionState>>();
    let adapter = expect_context::<IdentityAdapter>();
    Memo::new(move |_| Readiness::derive(&session.get(), &adapter.state.get()))
}
