// ============================================================================
// SESSION STORE - token + username persisted in origin storage
// ============================================================================
// Single writer for the session. Every set/clear bumps the generation so
// responses dispatched under an older session can be discarded.
// ============================================================================

use std::cell::Cell;

use crate::error::ApiError;
use crate::router::Route;
use crate::utils::{
    token_expired, KeyValueStorage, LocalStorage, StorageError, STORAGE_KEY_AUTH_TOKEN,
    STORAGE_KEY_USERNAME,
};

/// Credentials of a logged-in user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub username: Option<String>,
}

impl Session {
    pub fn new(token: &str, username: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            username: Some(username.to_string()),
        }
    }

    /// Active iff both fields are present and non-empty
    pub fn is_active(&self) -> bool {
        self.token().is_some() && self.username().is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.is_empty())
    }
}

pub struct SessionStore<S: KeyValueStorage = LocalStorage> {
    storage: S,
    generation: Cell<u64>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            generation: Cell::new(0),
        }
    }

    pub fn get(&self) -> Session {
        Session {
            token: self.storage.get_item(STORAGE_KEY_AUTH_TOKEN),
            username: self.storage.get_item(STORAGE_KEY_USERNAME),
        }
    }

    pub fn set(&self, token: &str, username: &str) -> Result<(), StorageError> {
        self.bump();
        self.storage.set_item(STORAGE_KEY_AUTH_TOKEN, token)?;
        self.storage.set_item(STORAGE_KEY_USERNAME, username)?;
        log::info!("🔐 [SESSION] Session stored for {}", username);
        Ok(())
    }

    /// Removes both keys; both removals are attempted even if the first fails
    pub fn clear(&self) -> Result<(), StorageError> {
        self.bump();
        let token = self.storage.remove_item(STORAGE_KEY_AUTH_TOKEN);
        let username = self.storage.remove_item(STORAGE_KEY_USERNAME);
        log::info!("👋 [SESSION] Session cleared");
        token.and(username)
    }

    fn bump(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// A response dispatched at `generation` may still be applied
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation && self.get().is_active()
    }

    /// Clears the session when the stored token is missing, undecodable or past `exp`.
    /// Returns true when the session was cleared.
    pub fn expire_if_stale(&self, now_secs: i64) -> bool {
        let stale = match self.get().token() {
            Some(token) => token_expired(token, now_secs),
            None => true,
        };
        if stale {
            log::warn!("⏰ [SESSION] Token missing or expired");
            if let Err(e) = self.clear() {
                log::error!("❌ [SESSION] Could not clear session: {}", e);
            }
        }
        stale
    }

    /// 401/403 always end the session; the caller navigates to the returned route
    pub fn apply_failure(&self, error: &ApiError) -> Option<Route> {
        if !error.is_auth_failure() {
            return None;
        }
        log::warn!("🚫 [SESSION] {} - logging out", error);
        if let Err(e) = self.clear() {
            log::error!("❌ [SESSION] Could not clear session: {}", e);
        }
        Some(Route::Login)
    }
}

impl Default for SessionStore<LocalStorage> {
    fn default() -> Self {
        Self::new(LocalStorage)
    }
}
