//! Persisted login session and the storage seam behind it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page reads the session on mount to skip the form for users who
//! already signed in, and writes it after a successful login. Pages receive a
//! [`SharedSessionStore`] through Leptos context instead of touching
//! `localStorage` directly, so tests can swap in [`MemorySessionStore`].
//!
//! STORAGE LAYOUT
//! ==============
//! `token` holds the raw token string, `userData` holds the JSON user object.
//! A session exists iff `token` is present.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::net::api::AuthError;
use crate::net::types::{LoginResponse, Role, UserProfile};

pub const TOKEN_KEY: &str = "token";
pub const USER_DATA_KEY: &str = "userData";

/// Authenticated identity persisted across page loads.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role
    }
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self { token: resp.token, user: resp.user }
    }
}

/// Load/save/clear access to the persisted session.
pub trait SessionStore: Send + Sync {
    /// Read the stored session, if any. A corrupt or missing `userData` blob
    /// next to a token is reported as `Err` so callers can decide to clear it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] when storage is unreachable and
    /// [`AuthError::Decode`] when `userData` cannot be decoded.
    fn load(&self) -> Result<Option<Session>, AuthError>;

    /// Persist `session`, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] when a write is rejected.
    fn save(&self, session: &Session) -> Result<(), AuthError>;

    /// Remove both session keys. Best effort.
    fn clear(&self);
}

/// Session store handle provided through Leptos context.
pub type SharedSessionStore = Arc<dyn SessionStore>;

/// Rebuild a session from the two raw storage values.
fn decode_session(token: Option<String>, user_data: Option<String>) -> Result<Option<Session>, AuthError> {
    let Some(token) = token else {
        return Ok(None);
    };
    let raw = user_data.ok_or_else(|| AuthError::Decode(format!("{USER_DATA_KEY} missing")))?;
    let user = serde_json::from_str(&raw).map_err(|e| AuthError::Decode(e.to_string()))?;
    Ok(Some(Session { token, user }))
}

fn encode_user(session: &Session) -> Result<String, AuthError> {
    serde_json::to_string(&session.user).map_err(|e| AuthError::Decode(e.to_string()))
}

/// Read the stored session, dropping it when it cannot be decoded.
///
/// Storage failures and corrupt blobs are logged and treated as "signed out".
pub fn load_or_clear(store: &dyn SessionStore) -> Option<Session> {
    match store.load() {
        Ok(session) => session,
        Err(AuthError::Decode(e)) => {
            leptos::logging::warn!("discarding stored session: {e}");
            store.clear();
            None
        }
        Err(e) => {
            leptos::logging::warn!("session load failed: {e}");
            None
        }
    }
}

/// [`SessionStore`] over the browser's `localStorage`.
///
/// Outside the browser every read is empty and every write fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSessionStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, AuthError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| AuthError::Storage("localStorage unavailable".to_owned()))
}

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Result<Option<Session>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            let token = storage.get_item(TOKEN_KEY).ok().flatten();
            let user_data = storage.get_item(USER_DATA_KEY).ok().flatten();
            decode_session(token, user_data)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        let user_data = encode_user(session)?;
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage
                .set_item(TOKEN_KEY, &session.token)
                .map_err(|e| AuthError::Storage(format!("{e:?}")))?;
            storage
                .set_item(USER_DATA_KEY, &user_data)
                .map_err(|e| AuthError::Storage(format!("{e:?}")))?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_data;
            Err(AuthError::Unavailable)
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Ok(storage) = local_storage() else {
                return;
            };
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_DATA_KEY);
        }
    }
}

/// In-memory [`SessionStore`] using the same key layout as `localStorage`.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value stored under `key`.
    pub fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    /// Write a raw value, bypassing encoding.
    pub fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, AuthError> {
        decode_session(self.get_item(TOKEN_KEY), self.get_item(USER_DATA_KEY))
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        let user_data = encode_user(session)?;
        let mut items = self
            .items
            .lock()
            .map_err(|_| AuthError::Storage("memory store poisoned".to_owned()))?;
        items.insert(TOKEN_KEY.to_owned(), session.token.clone());
        items.insert(USER_DATA_KEY.to_owned(), user_data);
        Ok(())
    }

    fn clear(&self) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(TOKEN_KEY);
            items.remove(USER_DATA_KEY);
        }
    }
}
