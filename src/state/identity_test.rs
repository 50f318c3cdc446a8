use super::*;

#[test]
fn only_none_is_idle() {
    assert!(!InteractionStatus::None.is_busy());
}

#[test]
fn every_other_status_is_busy() {
    let busy = [
        InteractionStatus::Startup,
        InteractionStatus::Login,
        InteractionStatus::Logout,
        InteractionStatus::AcquireToken,
        InteractionStatus::HandleRedirect,
        InteractionStatus::SsoSilent,
    ];
    for status in busy {
        assert!(status.is_busy(), "{status:?} should be busy");
    }
}

#[test]
fn default_identity_state_is_idle_with_no_account() {
    let state = IdentityState::default();
    assert!(!state.status.is_busy());
    assert!(!state.has_account());
}

#[test]
fn any_account_counts_as_authenticated_context() {
    let state = IdentityState {
        status: InteractionStatus::None,
        accounts: vec![Account { id: "u1".to_owned(), username: "alice".to_owned() }],
    };
    assert!(state.has_account());
}
