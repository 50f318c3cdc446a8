//! Identity-provider adapter boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider client (token acquisition, popup/redirect protocol, token
//! cache) lives outside this crate. This module only mirrors what it
//! reports: an interaction status and the known accounts. The status is
//! owned and mutated exclusively by the adapter bridge; this core reads it.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use leptos::prelude::*;

/// What the identity-provider client is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionStatus {
    #[default]
    None,
    Startup,
    Login,
    Logout,
    AcquireToken,
    HandleRedirect,
    SsoSilent,
}

impl InteractionStatus {
    /// Anything other than `None` counts as busy.
    #[must_use]
    pub fn is_busy(self) -> bool {
        self != Self::None
    }
}

/// A provider-reported credential record. A non-empty account list means a
/// user has authenticated in this client context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub username: String,
}

/// Read-side projection of the adapter: status plus known accounts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdentityState {
    pub status: InteractionStatus,
    pub accounts: Vec<Account>,
}

impl IdentityState {
    #[must_use]
    pub fn has_account(&self) -> bool {
        !self.accounts.is_empty()
    }
}

/// Context handle wiring the external adapter into the shell.
///
/// `state` is written only by the adapter bridge. `begin_sign_in` starts the
/// provider's interactive flow and is invoked only by the login page.
#[derive(Clone, Copy)]
pub struct IdentityAdapter {
    pub state: RwSignal<IdentityState>,
    pub begin_sign_in: Callback<()>,
}

impl IdentityAdapter {
    #[must_use]
    pub fn new(state: RwSignal<IdentityState>, begin_sign_in: Callback<()>) -> Self {
        Self { state, begin_sign_in }
    }

    /// Handle with no provider bridge installed: sign-in attempts log and do
    /// nothing. Used until the host application wires the real adapter.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(
            RwSignal::new(IdentityState::default()),
            Callback::new(|()| {
                #[cfg(feature = "hydrate")]
                log::warn!("sign-in requested with no identity bridge installed");
            }),
        )
    }
}
