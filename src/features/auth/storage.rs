//! Key/value persistence behind the session cache. The browser implementation
//! uses `sessionStorage`, so a session ends when the tab closes.

use crate::app_lib::AppError;

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "auth_user";

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str);
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserSessionStore;

#[cfg(target_arch = "wasm32")]
impl BrowserSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage = Self::storage()
            .ok_or_else(|| AppError::Config("Session storage is unavailable.".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|_| AppError::Config("Unable to write session storage.".to_string()))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
