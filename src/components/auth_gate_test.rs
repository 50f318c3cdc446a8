use super::*;
use crate::state::identity::{Account, IdentityState};
use crate::state::readiness::Readiness;
use crate::state::session::{SessionState, SessionUser};

// =============================================================
// Guard derivation
// =============================================================

#[test]
fn idle_without_account_is_unauthenticated() {
    assert_eq!(
        gate_status(InteractionStatus::None, false, false),
        GateStatus::Unauthenticated
    );
}

#[test]
fn idle_with_account_is_authenticated() {
    assert_eq!(
        gate_status(InteractionStatus::None, false, true),
        GateStatus::Authenticated
    );
}

#[test]
fn redirect_handling_resolves_without_navigation() {
    assert_eq!(
        gate_status(InteractionStatus::HandleRedirect, false, false),
        GateStatus::Resolving
    );
}

#[test]
fn settling_suppresses_the_idle_no_account_redirect() {
    assert_eq!(
        gate_status(InteractionStatus::None, true, false),
        GateStatus::Resolving
    );
}

#[test]
fn busy_adapter_resolves_even_with_an_account() {
    assert_eq!(
        gate_status(InteractionStatus::AcquireToken, false, true),
        GateStatus::Resolving
    );
}

// =============================================================
// End to end: stale persisted session
// =============================================================

#[test]
fn stale_persisted_session_still_lands_on_login() {
    // Hydration restores a user, but the provider reports zero accounts
    // (revoked elsewhere): the load gate opens and the guard redirects.
    let mut session = SessionState::default();
    session.set_user(Some(SessionUser {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: None,
        extra: std::collections::BTreeMap::new(),
    }));
    session.mark_hydrated();
    let identity = IdentityState::default();

    let readiness = Readiness::derive(&session, &identity);
    assert!(readiness.initial_load_complete);
    assert_eq!(
        gate_status(identity.status, false, identity.has_account()),
        GateStatus::Unauthenticated
    );
}

#[test]
fn freshly_redirected_account_renders_content() {
    let identity = IdentityState {
        status: InteractionStatus::None,
        accounts: vec![Account { id: "u1".to_owned(), username: "alice".to_owned() }],
    };
    assert_eq!(
        gate_status(identity.status, false, identity.has_account()),
        GateStatus::Authenticated
    );
}
