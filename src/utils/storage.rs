// ============================================================================
// STORAGE - cookie-backed credential + localStorage preferences
// ============================================================================

use std::cell::RefCell;

use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::models::{Role, SessionCredential};
use crate::utils::constants::{COOKIE_ROLE, COOKIE_TOKEN};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("browser storage is not available")]
    Unavailable,
    #[error("could not write to storage: {0}")]
    Write(String),
}

/// Where the session credential lives between page loads
pub trait CredentialStore {
    fn load(&self) -> Option<SessionCredential>;
    fn save(&self, credential: &SessionCredential) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// `document.cookie` store. Read synchronously, no expiry tracking.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieCredentialStore;

impl CookieCredentialStore {
    fn document() -> Result<HtmlDocument, StorageError> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .ok_or(StorageError::Unavailable)
    }

    fn write(assignment: &str) -> Result<(), StorageError> {
        Self::document()?
            .set_cookie(assignment)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

impl CredentialStore for CookieCredentialStore {
    fn load(&self) -> Option<SessionCredential> {
        let cookies = Self::document().ok()?.cookie().ok()?;
        credential_from_cookies(&cookies)
    }

    fn save(&self, credential: &SessionCredential) -> Result<(), StorageError> {
        Self::write(&cookie_assignment(COOKIE_TOKEN, &credential.token, None))?;
        Self::write(&cookie_assignment(COOKIE_ROLE, credential.role.as_str(), None))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Self::write(&cookie_assignment(COOKIE_TOKEN, "", Some(0)))?;
        Self::write(&cookie_assignment(COOKIE_ROLE, "", Some(0)))
    }
}

/// In-memory store, used by tests and as a fallback when cookies are blocked
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    credential: RefCell<Option<SessionCredential>>,
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<SessionCredential> {
        self.credential.borrow().clone()
    }

    fn save(&self, credential: &SessionCredential) -> Result<(), StorageError> {
        *self.credential.borrow_mut() = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.credential.borrow_mut() = None;
        Ok(())
    }
}

/// Value of cookie `name` in a `document.cookie` string
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() != name {
            return None;
        }
        let value = urlencoding::decode(value.trim()).ok()?.into_owned();
        Some(value).filter(|v| !v.is_empty())
    })
}

pub fn credential_from_cookies(cookies: &str) -> Option<SessionCredential> {
    let token = read_cookie(cookies, COOKIE_TOKEN)?;
    let role = read_cookie(cookies, COOKIE_ROLE)?.parse::<Role>().ok()?;
    Some(SessionCredential::new(token, role))
}

/// `Max-Age=0` deletes the cookie; `None` keeps it for the browser session
pub fn cookie_assignment(name: &str, value: &str, max_age: Option<i64>) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; SameSite=Lax",
        name,
        urlencoding::encode(value)
    );
    if let Some(age) = max_age {
        cookie.push_str(&format!("; Max-Age={}", age));
    }
    cookie
}

pub fn load_preference<T: DeserializeOwned>(key: &str) -> Option<T> {
    LocalStorage::get(key).ok()
}

pub fn save_preference<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    LocalStorage::set(key, value).map_err(|e| StorageError::Write(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_cookie_among_others() {
        let cookies = "theme=dark; token=abc%2E123; role=faculty";
        assert_eq!(read_cookie(cookies, "token").as_deref(), Some("abc.123"));
        assert_eq!(read_cookie(cookies, "role").as_deref(), Some("faculty"));
        assert_eq!(read_cookie(cookies, "missing"), None);
    }

    #[test]
    fn empty_cookie_counts_as_missing() {
        assert_eq!(read_cookie("token=; role=student", "token"), None);
    }

    #[test]
    fn credential_needs_token_and_known_role() {
        let credential = credential_from_cookies("token=t1; role=student").unwrap();
        assert_eq!(credential, SessionCredential::new("t1", Role::Student));

        assert!(credential_from_cookies("token=t1").is_none());
        assert!(credential_from_cookies("token=t1; role=admin").is_none());
    }

    #[test]
    fn cookie_assignment_encodes_and_expires() {
        assert_eq!(
            cookie_assignment("token", "a b", None),
            "token=a%20b; Path=/; SameSite=Lax"
        );
        assert_eq!(
            cookie_assignment("role", "", Some(0)),
            "role=; Path=/; SameSite=Lax; Max-Age=0"
        );
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryCredentialStore::default();
        assert!(store.load().is_none());
        store
            .save(&SessionCredential::new("t", Role::Faculty))
            .unwrap();
        assert_eq!(store.load().map(|c| c.role), Some(Role::Faculty));
        store.clear().unwrap();
        assert!(store.load().is_none());
    }
}
