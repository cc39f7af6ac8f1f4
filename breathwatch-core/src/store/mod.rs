//! Key-value persistence behind a single injected interface.
//!
//! Every logical collection (health profile, temperature history) lives under
//! one key as a versioned JSON document. Computation never touches storage
//! directly; it goes through [`load_json`] and [`save_json`], which is what
//! keeps the scorer and tracker testable against a [`MemoryStore`].

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::fmt::Debug;
use std::sync::Arc;

use breathwatch_types::Versioned;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::StoreError;

/// Key holding the serialized [`HealthProfile`](breathwatch_types::HealthProfile).
pub const PROFILE_KEY: &str = "health_profile";

/// Key holding the serialized [`TemperatureHistory`](breathwatch_types::TemperatureHistory).
pub const TEMPERATURE_HISTORY_KEY: &str = "temperature_history";

/// A string key-value store.
///
/// Implementations replace whole values; there is no partial update. Callers
/// are expected to be the only writer of a given key for the duration of a
/// read-modify-write cycle.
///
/// # Example
///
/// ```
/// use breathwatch_core::{KeyValueStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.set("greeting", "hello").unwrap();
/// assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
/// ```
pub trait KeyValueStore: Send + Sync + Debug {
    /// Fetch a value, or `None` if the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Load a versioned JSON value.
///
/// Missing keys, unreadable storage, malformed JSON and incompatible schema
/// versions all yield `None`; only the last three are logged.
pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "failed to read stored value, using default");
            return None;
        }
    };

    match serde_json::from_str::<Versioned<T>>(&raw) {
        Ok(envelope) => {
            let version = envelope.version;
            let data = envelope.into_compatible();
            if data.is_none() {
                warn!(
                    key,
                    major = version.major,
                    minor = version.minor,
                    "discarding stored value with incompatible schema version"
                );
            }
            data
        }
        Err(e) => {
            warn!(key, error = %e, "discarding malformed stored value");
            None
        }
    }
}

/// Store a value as versioned JSON, replacing whatever was there.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(&Versioned::current(value)).map_err(|source| {
        StoreError::Serialize {
            key: key.to_string(),
            source,
        }
    })?;
    store.set(key, &json)
}

/// Keys are restricted so every backend can use them as file names.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
