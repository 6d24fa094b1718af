use crate::core::prefs::{PreferenceStore, StoreError};
use web_sys as web;

/// `window.localStorage`. Every access can throw (private browsing, disabled
/// cookies, quota), so each call re-acquires the handle and maps failures to
/// [`StoreError`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Result<web::Storage, StoreError> {
        let window = web::window().ok_or(StoreError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StoreError::Access(format!("{:?}", e)))?
            .ok_or(StoreError::Unavailable)
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Access(format!("{:?}", e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Access(format!("{:?}", e)))
    }
}
