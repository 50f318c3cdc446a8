//! Public login entry point.

use leptos::prelude::*;

use crate::state::identity::IdentityAdapter;

/// Login page; the button hands off to the provider's interactive flow via
/// the adapter bridge. Everything past that handoff (popup vs. redirect,
/// token exchange) happens outside this crate.
#[component]
pub fn LoginPage() -> impl IntoView {
    let adapter = expect_context::<IdentityAdapter>();
    let busy = Memo::new(move |_| adapter.state.get().status.is_busy());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Vestibule"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <button
                    class="login-button"
                    disabled=move || busy.get()
                    on:click=move |_| adapter.begin_sign_in.run(())
                >
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </div>
        </div>
    }
}
