//! Protected landing page showing the signed-in session.

use leptos::prelude::*;

use crate::state::session::{SessionState, store_user};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_sign_out = move |_| {
        // Clearing the record persists the absence; the provider's own
        // logout round-trip is handled by the adapter bridge.
        store_user(session, None);
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Vestibule"</h1>
                <button class="btn" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>
            <section class="home-page__session">
                {move || {
                    let state = session.get();
                    state.user().map_or_else(
                        || view! { <p>"No session profile on record."</p> }.into_any(),
                        |user| {
                            view! {
                                <dl class="session-card">
                                    <dt>"Name"</dt>
                                    <dd>{user.name.clone()}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{user.email.clone()}</dd>
                                </dl>
                            }
                            .into_any()
                        },
                    )
                }}
            </section>
        </div>
    }
}
