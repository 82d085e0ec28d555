//! Browser Preference Storage
//!
//! `PreferenceStore` backed by `window.localStorage`.

use fitscore_domain::{DomainError, DomainResult, PreferenceStore};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        let storage = window
            .local_storage()
            .map_err(|e| format!("{:?}", e))?
            .ok_or_else(|| "localStorage unavailable".to_string())?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| DomainError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| DomainError::Storage(format!("{:?}", e)))
    }
}
