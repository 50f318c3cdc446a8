//! Full-screen gate for the application's first paint.

#[cfg(test)]
#[path = "load_gate_test.rs"]
mod load_gate_test;

use leptos::prelude::*;

use crate::state::readiness::use_readiness;

/// One-way latch for the boot placeholder.
///
/// The first observed completion takes the `Loading → Ready` transition;
/// later inputs are ignored. Interaction-status flips during logout or
/// silent renewal therefore cannot re-trigger the full-screen loading
/// state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadLatch {
    ready: bool,
}

impl LoadLatch {
    #[must_use]
    pub fn is_ready(self) -> bool {
        self.ready
    }

    /// Observe the readiness aggregate. Returns the resulting state.
    pub fn observe(&mut self, initial_load_complete: bool) -> bool {
        self.ready = self.ready || initial_load_complete;
        self.ready
    }
}

/// Render the boot placeholder until the initial load completes, then the
/// children, exactly once per process lifetime.
///
/// Children stay unmounted while loading so none of their effects can fire
/// before identity state is known.
#[component]
pub fn LoadGate(children: ChildrenFn) -> impl IntoView {
    let readiness = use_readiness();
    let latch = RwSignal::new(LoadLatch::default());

    Effect::new(move || {
        if !latch.get_untracked().is_ready() && readiness.get().initial_load_complete {
            latch.update(|state| {
                state.observe(true);
            });
        }
    });

    view! {
        <Show
            when=move || latch.get().is_ready()
            fallback=|| {
                view! {
                    <div class="load-gate">
                        <div class="load-gate__spinner" aria-label="Loading"></div>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
