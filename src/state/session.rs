//! Per-browser-session credential and profile storage.
//!
//! DESIGN
//! ======
//! The session pair (bearer token + user profile) lives in `sessionStorage`
//! in the browser and in an in-memory map in native builds and tests. All
//! mutation goes through [`SessionStore`], and every access is a read or a
//! whole-value overwrite, so readers can never observe a partially written
//! session. There is no encryption and no client-side expiry tracking;
//! expiry is inferred from server-issued 401 responses.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Storage key for the opaque bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-encoded user profile.
pub const USER_KEY: &str = "user";

/// Role values gating access to restricted routes.
///
/// The service encodes roles as numbers (`1` = admin, anything else =
/// standard), so (de)serialization goes through the numeric form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserType {
    #[default]
    Standard,
    Admin,
}

impl Serialize for UserType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(match self {
            Self::Standard => 0,
            Self::Admin => 1,
        })
    }
}

impl<'de> Deserialize<'de> for UserType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(1) => Ok(Self::Admin),
                Some(_) => Ok(Self::Standard),
                None => Err(D::Error::custom("expected integer user type")),
            },
            _ => Err(D::Error::custom("expected numeric user type")),
        }
    }
}

/// The signed-in user as stored alongside the credential.
///
/// Fields other than the role default when absent so older stored profiles
/// keep parsing; only structurally invalid JSON counts as malformed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    #[serde(default)]
    pub id: i32,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Login email address.
    #[serde(default)]
    pub email: String,
    /// Role deciding access to admin-gated routes.
    #[serde(rename = "userType", default)]
    pub user_type: UserType,
}

impl UserProfile {
    /// Whether this profile may enter admin-gated routes.
    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }
}

/// Credential + profile pair for the current browser session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

/// Session read failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A profile value is stored but does not parse as profile JSON.
    #[error("stored user profile is not valid JSON: {0}")]
    MalformedProfile(String),
}

/// Key-value storage behind [`SessionStore`], mirroring the Web Storage API.
pub trait SessionBackend {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// In-memory backend for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl SessionBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// `sessionStorage` backend for the browser; values vanish with the tab.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct WebStorage;

#[cfg(feature = "hydrate")]
impl WebStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.session_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl SessionBackend for WebStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Owner of the session pair; injected into the interceptors and the guard.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    /// Store over the browser's per-tab `sessionStorage`.
    #[cfg(feature = "hydrate")]
    pub fn browser() -> Self {
        Self::new(Rc::new(WebStorage))
    }

    /// Store over an in-memory map (native builds and tests).
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::default()))
    }

    /// Read the whole session.
    ///
    /// Missing keys are a valid absent state, never an error; only a
    /// present-but-unparseable profile yields
    /// [`SessionError::MalformedProfile`].
    pub fn get(&self) -> Result<Session, SessionError> {
        let token = self.backend.get_item(TOKEN_KEY);
        let user = match self.backend.get_item(USER_KEY) {
            None => None,
            Some(raw) => Some(
                serde_json::from_str(&raw)
                    .map_err(|e| SessionError::MalformedProfile(e.to_string()))?,
            ),
        };
        Ok(Session { token, user })
    }

    /// Credential read without touching the stored profile.
    pub fn token(&self) -> Option<String> {
        self.backend.get_item(TOKEN_KEY)
    }

    /// Overwrite both keys with `session`. Absent fields remove their keys.
    pub fn set(&self, session: &Session) {
        match &session.token {
            Some(token) => self.backend.set_item(TOKEN_KEY, token),
            None => self.backend.remove_item(TOKEN_KEY),
        }
        match &session.user {
            Some(user) => {
                if let Ok(raw) = serde_json::to_string(user) {
                    self.backend.set_item(USER_KEY, &raw);
                }
            }
            None => self.backend.remove_item(USER_KEY),
        }
    }

    /// Remove both keys. Clearing an already-cleared session is a no-op.
    pub fn clear(&self) {
        self.backend.remove_item(TOKEN_KEY);
        self.backend.remove_item(USER_KEY);
    }

    /// Remove only the stored profile, keeping the credential key untouched.
    pub fn remove_user(&self) {
        self.backend.remove_item(USER_KEY);
    }
}
