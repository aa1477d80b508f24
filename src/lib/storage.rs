//! Durable session persistence. The signed-in identity lives under the
//! `auth.user` key (JSON) and the bearer credential under `auth.token`;
//! absence of either means logged out, and unreadable data is treated the
//! same way rather than surfacing an error.
//!
//! Writes are synchronous: a commit is visible to the next read in the same
//! update cycle, which the route guards rely on. On non-wasm targets the
//! browser storage is replaced by a process-local map so the session store
//! can be exercised natively.

use crate::features::auth::types::User;

const USER_KEY: &str = "auth.user";
const TOKEN_KEY: &str = "auth.token";

/// Reads the persisted session, if any. Corrupt or partial entries read as
/// logged out.
pub fn load_session() -> Option<(User, String)> {
    let user = read(USER_KEY).and_then(|raw| decode_user(&raw))?;
    let token = read(TOKEN_KEY).filter(|token| !token.trim().is_empty())?;
    Some((user, token))
}

/// Persists the session under both keys. An unserializable user leaves
/// storage untouched.
pub fn store_session(user: &User, token: &str) {
    let Some(encoded) = encode_user(user) else {
        return;
    };
    write(USER_KEY, &encoded);
    write(TOKEN_KEY, token);
}

/// Removes both persisted entries. Safe when nothing is stored.
pub fn clear_session() {
    remove(USER_KEY);
    remove(TOKEN_KEY);
}

pub fn encode_user(user: &User) -> Option<String> {
    serde_json::to_string(user).ok()
}

pub fn decode_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

#[cfg(target_arch = "wasm32")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
}

#[cfg(target_arch = "wasm32")]
fn read(key: &str) -> Option<String> {
    storage().and_then(|storage| storage.get_item(key).ok()).flatten()
}

#[cfg(target_arch = "wasm32")]
fn write(key: &str, value: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(target_arch = "wasm32")]
fn remove(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn read(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn write(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn remove(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
use native::{read, remove, write};

#[cfg(test)]
mod tests {
    use super::{clear_session, decode_user, load_session, store_session};
    use crate::features::auth::types::User;

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "a@b.com".to_string(),
            role: "user".to_string(),
        }
    }

    #[test]
    fn decode_user_rejects_corrupt_json() {
        assert!(decode_user("{not json").is_none());
        assert!(decode_user(r#"{"unexpected":"shape"}"#).is_none());
    }

    #[test]
    fn store_then_load_round_trips() {
        clear_session();
        store_session(&sample_user(), "tok");

        let (user, token) = load_session().expect("session persisted");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(token, "tok");

        clear_session();
        assert!(load_session().is_none());
    }

    #[test]
    fn empty_token_reads_as_logged_out() {
        clear_session();
        store_session(&sample_user(), "  ");
        assert!(load_session().is_none());
        clear_session();
    }
}
