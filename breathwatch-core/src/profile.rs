//! Persistence for the patient's health profile.

use breathwatch_types::HealthProfile;

use crate::error::StoreError;
use crate::store::{load_json, save_json, KeyValueStore, PROFILE_KEY};

/// Loads and saves the single [`HealthProfile`] held in a store.
#[derive(Debug)]
pub struct ProfileRepository<S> {
    store: S,
}

impl<S: KeyValueStore> ProfileRepository<S> {
    /// Create a repository over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored profile, or `None` if absent or unreadable.
    pub fn load(&self) -> Option<HealthProfile> {
        load_json(&self.store, PROFILE_KEY)
    }

    /// Replace the stored profile.
    pub fn save(&self, profile: &HealthProfile) -> Result<(), StoreError> {
        save_json(&self.store, PROFILE_KEY, profile)
    }

    /// Delete the stored profile. Clearing an absent profile is not an error.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(PROFILE_KEY)
    }
}
