//! Settings persistence coordination.
//!
//! Values are stored in eframe's key-value storage as JSON strings.

use serde::{Deserialize, Serialize};

/// Coordinates persistence of serializable settings.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `T::default()`.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Loads a setting, falling back to `default`.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Loads a setting, returning `None` when it is missing or unreadable.
    ///
    /// Unreadable values are logged; they usually come from an older release.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, %err, "ignoring unreadable stored setting");
                None
            }
        }
    }

    /// Saves a setting and flushes the storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => tracing::warn!(key, %err, "failed to serialize setting"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::state::Route;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    pub(crate) struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        pub(crate) fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_route() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, "route", &Route::Map);

        let loaded: Route = SettingsCoordinator::load_setting(Some(&storage), "route");
        assert_eq!(loaded, Route::Map);
    }

    #[test]
    fn test_missing_key_uses_default() {
        let storage = MockStorage::new();
        let loaded: Route = SettingsCoordinator::load_setting(Some(&storage), "route");
        assert_eq!(loaded, Route::Home);

        let loaded = SettingsCoordinator::load_setting_or(Some(&storage), "route", Route::Login);
        assert_eq!(loaded, Route::Login);
    }

    #[test]
    fn test_unreadable_value_is_ignored() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(&mut storage, "route", "\"Spots\"".to_string());

        let result: Option<Route> = SettingsCoordinator::try_load_setting(Some(&storage), "route");
        assert_eq!(result, None);
    }
}
