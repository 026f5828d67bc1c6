//! # Preference Store
//!
//! The engine persists its preferences through the [PreferenceStore] trait, a
//! string-keyed, string-valued map that should outlive the process.
//!
//! The crate ships [MemoryPreferenceStore] for tests and ephemeral hosts; the
//! `kuper-services` crate provides a TOML file store.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::error::ThemeResult;

/// Key of the persisted [DisplayMode](crate::mode::DisplayMode).
pub const KEY_THEME_MODE: &str = "theme_mode";
/// Key of the persisted [UsageMode](crate::mode::UsageMode).
pub const KEY_USAGE_MODE: &str = "usage_mode";
/// Key of the persisted [ColorStyle](crate::mode::ColorStyle).
pub const KEY_COLOR_STYLE: &str = "color_style";
/// Default preference group name.
pub const DEFAULT_NAMESPACE: &str = "theme_prefs";

/// Durable string key/value storage.
pub trait PreferenceStore: Send + Sync {
    /// The value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or replace the value under `key`.
    fn put(&self, key: &str, value: &str) -> ThemeResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> ThemeResult<()>;

    /// Remove every key.
    fn clear(&self) -> ThemeResult<()>;
}

/// A [PreferenceStore] that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let values = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }

    /// A copy of everything stored.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values
            .read()
            .map(|values| values.clone())
            .unwrap_or_default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> ThemeResult<()> {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> ThemeResult<()> {
        if let Ok(mut values) = self.values.write() {
            values.remove(key);
        }
        Ok(())
    }

    fn clear(&self) -> ThemeResult<()> {
        if let Ok(mut values) = self.values.write() {
            values.clear();
        }
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> ThemeResult<()> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> ThemeResult<()> {
        (**self).remove(key)
    }

    fn clear(&self) -> ThemeResult<()> {
        (**self).clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.get(KEY_THEME_MODE), None);

        store.put(KEY_THEME_MODE, "DARK").unwrap();
        store.put(KEY_THEME_MODE, "AMOLED").unwrap();
        assert_eq!(store.get(KEY_THEME_MODE).as_deref(), Some("AMOLED"));

        store.remove(KEY_THEME_MODE).unwrap();
        store.remove(KEY_THEME_MODE).unwrap();
        assert_eq!(store.get(KEY_THEME_MODE), None);
    }

    #[test]
    fn test_with_entries_and_clear() {
        let store = MemoryPreferenceStore::with_entries([
            (KEY_USAGE_MODE, "STATIC"),
            (KEY_COLOR_STYLE, "PASTEL"),
        ]);
        assert_eq!(store.snapshot().len(), 2);

        store.clear().unwrap();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_shared_store_sees_writes() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let handle: Arc<dyn PreferenceStore> = store.clone();
        handle.put(KEY_COLOR_STYLE, "PASTEL").unwrap();
        assert_eq!(store.get(KEY_COLOR_STYLE).as_deref(), Some("PASTEL"));
    }
}
