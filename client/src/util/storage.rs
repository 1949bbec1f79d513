//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session access token is the only thing the dashboard persists. These
//! helpers keep the hydrate-only web-sys glue out of the API and auth code.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// `localStorage` key holding the backend access token.
pub const SESSION_STORAGE_KEY: &str = "tutorme.session";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

pub fn load_session_token() -> Option<String> {
    load_json::<String>(SESSION_STORAGE_KEY).filter(|t| !t.is_empty())
}

pub fn save_session_token(token: &str) {
    save_json(SESSION_STORAGE_KEY, &token);
}

pub fn clear_session_token() {
    remove(SESSION_STORAGE_KEY);
}
