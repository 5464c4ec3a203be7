//! Bucket id cache in client storage.
//!
//! The server owns the bucket list; the client keeps a JSON copy under
//! [`BUCKETS_STORAGE_KEY`] so it can offer the list back on the next load.
//! Nothing on this path is allowed to fail loudly: every storage or parse
//! problem is logged and swallowed.

#[cfg(test)]
#[path = "buckets_test.rs"]
mod buckets_test;

use serde_json::Value;

use crate::consts::BUCKETS_STORAGE_KEY;
use crate::event::{Command, bucket_slot};

/// Error from a [`KeyValueStore`] or from decoding its content.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage is available (private mode, disabled, or not a browser).
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    /// Stored content is not a JSON array of ids.
    #[error("malformed bucket list: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Minimal string key/value storage, implemented over `localStorage` in the
/// browser.
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing storage rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Decode a stored bucket list.
///
/// # Errors
///
/// Returns [`StoreError::Malformed`] unless `raw` is a JSON array.
pub fn decode(raw: &str) -> Result<Vec<Option<String>>, StoreError> {
    let slots: Vec<Value> = serde_json::from_str(raw)?;
    Ok(slots.iter().map(bucket_slot).collect())
}

/// Encode a bucket list, nulling out empty slots.
///
/// # Errors
///
/// Returns [`StoreError::Malformed`] if serialization fails.
pub fn encode(buckets: &[Option<String>]) -> Result<String, StoreError> {
    let slots: Vec<Option<&str>> =
        buckets.iter().map(|slot| slot.as_deref().filter(|id| !id.is_empty())).collect();
    Ok(serde_json::to_string(&slots)?)
}

/// Read the cached list and build the `restore_buckets` command for it.
///
/// Returns `None` (after logging) when nothing usable is stored.
pub fn restore<S: KeyValueStore + ?Sized>(store: &S) -> Option<Command> {
    let raw = match store.get(BUCKETS_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("buckets: nothing cached under {BUCKETS_STORAGE_KEY}");
            return None;
        }
        Err(e) => {
            log::warn!("buckets: failed to read cache: {e}");
            return None;
        }
    };
    match decode(&raw) {
        Ok(bucket_ids) => Some(Command::RestoreBuckets { bucket_ids }),
        Err(e) => {
            log::warn!("buckets: ignoring cached list: {e}");
            None
        }
    }
}

/// Write the list back to storage. Returns whether the write succeeded.
pub fn persist<S: KeyValueStore + ?Sized>(store: &S, buckets: &[Option<String>]) -> bool {
    let result = encode(buckets).and_then(|raw| store.set(BUCKETS_STORAGE_KEY, &raw));
    if let Err(e) = result {
        log::warn!("buckets: failed to save cache: {e}");
        return false;
    }
    true
}
