//! Root application component with routing, context providers, and gating.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_gate::AuthGate;
use crate::components::load_gate::LoadGate;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::identity::IdentityAdapter;
use crate::state::session::{SessionState, hydrate_session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session signal and identity adapter handle as contexts,
/// kicks off session hydration once, and keeps the whole route tree behind
/// the load gate. A host that wires a real provider bridge supplies its own
/// `IdentityAdapter` context above this component; otherwise a detached
/// handle is installed.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let adapter = use_context::<IdentityAdapter>().unwrap_or_else(IdentityAdapter::detached);
    provide_context(session);
    provide_context(adapter);

    // Seed the session from durable storage once per process start.
    Effect::new(move || {
        hydrate_session(session);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/vestibule.css"/>
        <Title text="Vestibule"/>

        <Router>
            <LoadGate>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("")
                        view=|| {
                            view! {
                                <AuthGate>
                                    <HomePage/>
                                </AuthGate>
                            }
                        }
                    />
                </Routes>
            </LoadGate>
        </Router>
    }
}
