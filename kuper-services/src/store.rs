// SPDX-License-Identifier: LGPL-3.0-only
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use kuper_theme::error::{ThemeError, ThemeResult};
use kuper_theme::store::PreferenceStore;

/// A [PreferenceStore] persisted as a flat TOML table.
///
/// Every write rewrites the whole file, so values survive a restart as soon
/// as `put` returns. A missing file is an empty store. A file that cannot be
/// parsed is also treated as empty, the same way a corrupt single value
/// falls back to its default.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FilePreferenceStore {
    /// Open the store at `path`, reading any existing values.
    pub fn open(path: impl Into<PathBuf>) -> ThemeResult<Self> {
        let path = path.into();
        let values = Self::load(&path)?;
        log::debug!("Opened preference store {:?} ({} values)", path, values.len());
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Open `<dir>/<namespace>.toml`.
    pub fn open_in(dir: impl AsRef<Path>, namespace: &str) -> ThemeResult<Self> {
        Self::open(dir.as_ref().join(format!("{namespace}.toml")))
    }

    /// The file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the file, discarding the in-memory copy.
    pub fn reload(&self) -> ThemeResult<()> {
        let loaded = Self::load(&self.path)?;
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        *values = loaded;
        Ok(())
    }

    fn load(path: &Path) -> ThemeResult<BTreeMap<String, String>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(ThemeError::store_read(path, e)),
        };

        match Self::parse(path, &content) {
            Ok(values) => Ok(values),
            Err(e) => {
                log::warn!("{}; starting with an empty store", e);
                Ok(BTreeMap::new())
            },
        }
    }

    fn parse(path: &Path, content: &str) -> ThemeResult<BTreeMap<String, String>> {
        let table = content
            .parse::<toml::Table>()
            .map_err(|e| ThemeError::store_parse(path, e.to_string()))?;

        let mut values = BTreeMap::new();
        for (key, value) in table {
            match value {
                toml::Value::String(value) => {
                    values.insert(key, value);
                },
                other => {
                    log::warn!(
                        "Ignoring non-string preference '{}' in {:?}: {}",
                        key,
                        path,
                        other
                    );
                },
            }
        }
        Ok(values)
    }

    fn save(&self, values: &BTreeMap<String, String>) -> ThemeResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ThemeError::store_write(parent, e))?;
            }
        }

        let content =
            toml::to_string(values).map_err(|e| ThemeError::Serialization(e.to_string()))?;
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, content).map_err(|e| ThemeError::store_write(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| ThemeError::store_write(&self.path, e))?;
        Ok(())
    }

    /// Apply a change and write it out. The in-memory values only change
    /// once the file has been written.
    fn update(&self, apply: impl FnOnce(&mut BTreeMap<String, String>)) -> ThemeResult<()> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        let mut updated = values.clone();
        apply(&mut updated);
        self.save(&updated)?;
        *values = updated;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> ThemeResult<()> {
        self.update(|values| {
            values.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> ThemeResult<()> {
        self.update(|values| {
            values.remove(key);
        })
    }

    fn clear(&self) -> ThemeResult<()> {
        self.update(BTreeMap::clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::open(dir.path().join("missing.toml")).unwrap();
        assert_eq!(store.get("theme_mode"), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_put_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::open_in(dir.path().join("nested"), "theme_prefs").unwrap();
        store.put("theme_mode", "AMOLED").unwrap();

        let written = fs::read_to_string(dir.path().join("nested/theme_prefs.toml")).unwrap();
        assert_eq!(written.trim(), "theme_mode = \"AMOLED\"");
        assert!(!dir.path().join("nested/theme_prefs.toml.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme_prefs.toml");
        fs::write(&path, "theme_mode = [unterminated").unwrap();

        let store = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(store.get("theme_mode"), None);
    }

    #[test]
    fn test_non_string_values_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme_prefs.toml");
        fs::write(&path, "theme_mode = 3\nusage_mode = \"STATIC\"\n").unwrap();

        let store = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(store.get("theme_mode"), None);
        assert_eq!(store.get("usage_mode").as_deref(), Some("STATIC"));
    }

    #[test]
    fn test_failed_write_keeps_previous_values() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        let store = FilePreferenceStore::open_in(&sub, "theme_prefs").unwrap();
        store.put("theme_mode", "AMOLED").unwrap();

        fs::remove_dir_all(&sub).unwrap();
        fs::write(&sub, "not a directory").unwrap();

        assert!(store.put("theme_mode", "DARK").is_err());
        assert_eq!(store.get("theme_mode").as_deref(), Some("AMOLED"));
        assert!(store.remove("theme_mode").is_err());
        assert!(store.clear().is_err());
        assert_eq!(store.get("theme_mode").as_deref(), Some("AMOLED"));
    }

    #[test]
    fn test_reload_picks_up_external_edits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme_prefs.toml");
        let store = FilePreferenceStore::open(&path).unwrap();
        store.put("color_style", "EMPHASIS").unwrap();

        fs::write(&path, "color_style = \"PASTEL\"\n").unwrap();
        store.reload().unwrap();
        assert_eq!(store.get("color_style").as_deref(), Some("PASTEL"));
    }
}
