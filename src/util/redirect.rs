//! Detection of an in-flight OAuth redirect callback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider's own busy/idle status can flip to idle in the window
//! between receiving the redirect fragment and finishing processing it.
//! Without this independent signal the auth gate can momentarily see
//! "idle + no account" and bounce an already-authenticated user to login.
//! Settling is a timer-driven decay, not a latch cleared by another
//! component: once armed it reverts on its own after [`SETTLE_DELAY_MS`].

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Quiescence delay before settling decays, in milliseconds.
pub const SETTLE_DELAY_MS: u32 = 700;

/// Whether a location fragment carries an authorization callback marker.
///
/// Parameters are matched key-wise (`state` or `code`), not by substring, so
/// a fragment like `#estate=1` does not qualify. A coincidental true match
/// is still possible; its impact is bounded by the settling timer.
#[must_use]
pub fn fragment_has_auth_markers(fragment: &str) -> bool {
    fragment
        .trim_start_matches('#')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, _)| key == "state" || key == "code")
}

/// Settling state machine, kept clock-free so the timer can be injected.
///
/// Each qualifying observation bumps a generation and returns it; only an
/// expiry carrying the current generation clears the flag. Re-observation
/// therefore restarts the delay instead of stacking timers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settling {
    settling: bool,
    generation: u64,
}

impl Settling {
    #[must_use]
    pub fn is_settling(self) -> bool {
        self.settling
    }

    /// Feed a location observation. Returns the generation to arm a timer
    /// for when the location qualifies, `None` otherwise.
    pub fn observe(&mut self, has_markers: bool) -> Option<u64> {
        if !has_markers {
            return None;
        }
        self.settling = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Timer expiry for `generation`. Expiries superseded by a later
    /// observation are ignored.
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.settling = false;
        }
    }
}

/// Track whether a redirect callback is currently settling.
///
/// Recomputed on every location change. The pending timeout is cancelled
/// when the owning scope is torn down, so no callback fires after disposal.
pub fn use_redirect_settling() -> Signal<bool> {
    let location = use_location();
    let settling = RwSignal::new(Settling::default());

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        let pending = StoredValue::new_local(None::<Timeout>);
        Effect::new(move || {
            let fragment = location.hash.get();
            let armed = settling
                .try_update(|state| state.observe(fragment_has_auth_markers(&fragment)))
                .flatten();
            let Some(generation) = armed else {
                return;
            };
            let timeout = Timeout::new(SETTLE_DELAY_MS, move || {
                settling.update(|state| state.expire(generation));
            });
            // Replacing the previous timeout drops and cancels it.
            pending.set_value(Some(timeout));
        });
        on_cleanup(move || pending.set_value(None));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &location;
    }

    Signal::derive(move || settling.get().is_settling())
}
