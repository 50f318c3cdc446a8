//! Browser localStorage helpers for durable session persistence.
//!
//! Client-side (hydrate): real storage access via `web-sys`.
//! Server-side (SSR): inert fallbacks, since storage only exists in the
//! browser. Failures degrade to `None`/no-op; the caller decides what a
//! missing value means.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Load and deserialize a JSON value from `localStorage` for `key`.
///
/// Returns `None` when storage is unavailable, the key is absent, or the
/// payload fails to parse; corrupt payloads are logged and discarded.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("discarding corrupt payload under {key}: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Serialize and save a JSON value to `localStorage` for `key`.
///
/// Fire-and-forget: serialization or storage errors are logged, never
/// returned.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("failed to persist value under {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
