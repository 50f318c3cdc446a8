//! Per-route guard for subtrees that require an authenticated session.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod auth_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::identity::{IdentityAdapter, InteractionStatus};
use crate::util::redirect::use_redirect_settling;

/// Route for the public login entry point.
pub const LOGIN_PATH: &str = "/login";

/// Continuously re-derived guard state; nothing here is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateStatus {
    /// The adapter is mid-operation or a redirect callback is settling.
    Resolving,
    /// Adapter idle, not settling, an account exists.
    Authenticated,
    /// Adapter idle, not settling, no account. Triggers the login redirect.
    Unauthenticated,
}

/// Derive the guard state for one render.
///
/// Settling may expire while the adapter is still finishing redirect
/// processing; the brief `Unauthenticated` that can result is a known,
/// bounded race (the definitive "redirect finished" event that would close
/// it does not exist at this boundary).
#[must_use]
pub fn gate_status(status: InteractionStatus, settling: bool, has_account: bool) -> GateStatus {
    if status.is_busy() || settling {
        GateStatus::Resolving
    } else if has_account {
        GateStatus::Authenticated
    } else {
        GateStatus::Unauthenticated
    }
}

/// Wrap a subtree that must only render with an authenticated account.
///
/// Unauthenticated visits are replaced (not pushed) to the login route, so
/// the back button cannot return to the guarded page pre-authentication.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let adapter = expect_context::<IdentityAdapter>();
    let settling = use_redirect_settling();
    let navigate = use_navigate();

    let status = Memo::new(move |_| {
        let identity = adapter.state.get();
        gate_status(identity.status, settling.get(), identity.has_account())
    });

    Effect::new(move || {
        if status.get() == GateStatus::Unauthenticated {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        {move || match status.get() {
            GateStatus::Authenticated => children().into_any(),
            // Unauthenticated keeps the interim view up while the
            // replacement navigation takes effect.
            GateStatus::Resolving | GateStatus::Unauthenticated => {
                view! {
                    <div class="auth-gate">
                        <p class="auth-gate__message">"Authenticating..."</p>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
