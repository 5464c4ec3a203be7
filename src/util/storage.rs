//! `localStorage` as an [`interact::buckets::KeyValueStore`].

use interact::buckets::{KeyValueStore, StoreError};

/// The window's `localStorage`, looked up on every call so a storage that
/// appears late (or disappears) is handled without caching a dead handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StoreError::Unavailable),
            Err(e) => Err(StoreError::Read(format!("{e:?}"))),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(|e| StoreError::Read(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}
