// SPDX-License-Identifier: LGPL-3.0-only
use anyhow::Result;
use kuper_theme::error::ThemeError;
use kuper_theme::store::DEFAULT_NAMESPACE;
use serde::Deserialize;
use smol::fs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

use crate::store::FilePreferenceStore;

/// XDG prefix for all kuper files.
pub const XDG_PREFIX: &str = "kuper";
/// Explicit configuration file, loaded after the XDG locations.
pub const ENV_CONFIG: &str = "KUPER_CONFIG";
/// Overrides `[theme] namespace`.
pub const ENV_THEME_NAMESPACE: &str = "KUPER_THEME_NAMESPACE";
/// Overrides `[theme] store_dir`.
pub const ENV_THEME_STORE_DIR: &str = "KUPER_THEME_STORE_DIR";

/// The main configuration structure for the application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,
    /// Theme preference storage
    #[serde(default)]
    pub theme: ThemeSettings,
    /// Any other sections are captured here
    #[serde(flatten)]
    pub other: HashMap<String, toml::Value>,
}

/// Settings that apply to every kuper binary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralSettings {
    /// Shorthand for `log_level = "debug"`.
    pub debug: Option<bool>,
    /// Log filter in `env_logger` syntax, e.g. `"info"` or `"kuper_theme=debug"`.
    pub log_level: Option<String>,
}

impl GeneralSettings {
    /// The log filter to install: `log_level`, else `debug` when `debug` is
    /// set, else `info`.
    pub fn log_filter(&self) -> &str {
        match (&self.log_level, self.debug) {
            (Some(level), _) => level,
            (None, Some(true)) => "debug",
            (None, _) => "info",
        }
    }
}

/// Where theme preferences are persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeSettings {
    /// Preference group name; also the file stem of the store.
    pub namespace: Option<String>,
    /// Directory holding the store. Defaults to the XDG data home.
    pub store_dir: Option<PathBuf>,
}

impl ThemeSettings {
    /// The preference group name, `theme_prefs` unless configured.
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }
}

/// Registry for managing application settings.
pub struct SettingsRegistry {
    config: Config,
}

impl SettingsRegistry {
    /// Create a new SettingsRegistry and load configuration from standard locations.
    pub async fn new() -> Result<Self> {
        let mut registry = Self::with_config(Config::default());
        registry.load().await?;
        Ok(registry)
    }

    /// Create a registry from an already-built configuration, without touching the disk.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Load configuration from standard locations in precedence order.
    ///
    /// Order (later overrides earlier):
    /// 1. System Data: /usr/share/kuper/config.toml (and XDG_DATA_DIRS)
    /// 2. System Config: /etc/xdg/kuper/config.toml (and XDG_CONFIG_DIRS)
    /// 3. User Config: ~/.config/kuper/config.toml (XDG_CONFIG_HOME)
    /// 4. The file named by `KUPER_CONFIG`
    /// 5. `KUPER_THEME_*` environment variables
    pub async fn load(&mut self) -> Result<()> {
        let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)?;

        self.load_config_type(&xdg_dirs, "config.toml").await;

        if let Ok(path) = std::env::var(ENV_CONFIG) {
            self.load_explicit(Path::new(&path)).await?;
        }

        self.apply_env_overrides(|name| std::env::var(name).ok());

        Ok(())
    }

    async fn load_config_type(&mut self, xdg_dirs: &BaseDirectories, filename: &str) {
        // 1. Load from system data directories
        for path in xdg_dirs.find_data_files(filename).rev() {
            self.load_file(&path).await;
        }

        // 2. Load from system config directories
        for path in xdg_dirs.find_config_files(filename).rev() {
            self.load_file(&path).await;
        }

        // 3. Load from user config directory
        let user_config_path = xdg_dirs.get_config_home().join(filename);
        if user_config_path.exists() {
            self.load_file(&user_config_path).await;
        }
    }

    /// Load a file the user named explicitly. Unlike the XDG locations, a
    /// missing file is an error here.
    pub async fn load_explicit(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ThemeError::config_not_found(path).into());
        }
        self.load_file(path).await;
        Ok(())
    }

    async fn load_file(&mut self, path: &Path) {
        log::info!("Loading config from: {:?}", path);
        match fs::read_to_string(path).await {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(loaded_config) => {
                    self.merge(loaded_config);
                },
                Err(e) => {
                    log::error!("Failed to parse config file {:?}: {}", path, e);
                },
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
            },
        }
    }

    /// Apply `KUPER_THEME_*` overrides, reading variables through `lookup`.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(namespace) = lookup(ENV_THEME_NAMESPACE).filter(|s| !s.is_empty()) {
            self.config.theme.namespace = Some(namespace);
        }
        if let Some(dir) = lookup(ENV_THEME_STORE_DIR).filter(|s| !s.is_empty()) {
            self.config.theme.store_dir = Some(PathBuf::from(dir));
        }
    }

    /// Merge a loaded config into the current config.
    fn merge(&mut self, other: Config) {
        // General
        if let Some(debug) = other.general.debug {
            self.config.general.debug = Some(debug);
        }
        if other.general.log_level.is_some() {
            self.config.general.log_level = other.general.log_level;
        }

        // Theme
        if other.theme.namespace.is_some() {
            self.config.theme.namespace = other.theme.namespace;
        }
        if other.theme.store_dir.is_some() {
            self.config.theme.store_dir = other.theme.store_dir;
        }

        // Other
        self.config.other.extend(other.other);
    }

    /// Get the current configuration.
    pub fn get(&self) -> &Config {
        &self.config
    }

    /// Path of the theme preference store: `<store_dir>/<namespace>.toml`.
    pub fn theme_store_path(&self) -> Result<PathBuf> {
        let dir = match &self.config.theme.store_dir {
            Some(dir) => dir.clone(),
            None => BaseDirectories::with_prefix(XDG_PREFIX)?.get_data_home(),
        };
        Ok(dir.join(format!("{}.toml", self.config.theme.namespace())))
    }

    /// Open the configured theme preference store.
    pub fn open_theme_store(&self) -> Result<FilePreferenceStore> {
        let path = self.theme_store_path()?;
        Ok(FilePreferenceStore::open(path)?)
    }

    /// Load configuration from multiple custom paths asynchronously.
    pub async fn load_from_paths_async(&mut self, paths: Vec<PathBuf>) -> Vec<anyhow::Result<()>> {
        let mut results = Vec::new();

        for path in paths {
            let result = async {
                let content = fs::read_to_string(&path)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to read config file {:?}: {}", path, e))?;

                let loaded_config: Config = toml::from_str(&content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse config file {:?}: {}", path, e))?;

                self.merge(loaded_config);
                Ok::<(), anyhow::Error>(())
            }
            .await;

            results.push(result);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_set_values_only() {
        let mut registry = SettingsRegistry::with_config(Config {
            general: GeneralSettings {
                debug: Some(true),
                log_level: Some("info".to_string()),
            },
            theme: ThemeSettings {
                namespace: Some("custom".to_string()),
                store_dir: Some(PathBuf::from("/var/lib/kuper")),
            },
            other: HashMap::new(),
        });

        let new_config: Config = toml::from_str(
            r#"
            [general]
            debug = false

            [theme]
            store_dir = "/tmp/kuper"
            "#,
        )
        .unwrap();
        registry.merge(new_config);

        let config = registry.get();
        assert_eq!(config.general.debug, Some(false));
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(config.theme.namespace(), "custom");
        assert_eq!(config.theme.store_dir, Some(PathBuf::from("/tmp/kuper")));
    }

    #[test]
    fn test_log_filter() {
        let mut general = GeneralSettings::default();
        assert_eq!(general.log_filter(), "info");

        general.debug = Some(false);
        assert_eq!(general.log_filter(), "info");

        general.debug = Some(true);
        assert_eq!(general.log_filter(), "debug");

        general.log_level = Some("warn".to_string());
        assert_eq!(general.log_filter(), "warn");
    }

    #[test]
    fn test_unknown_sections_are_kept() {
        let config: Config = toml::from_str("[wallpaper]\nengine = \"klwp\"\n").unwrap();
        assert!(config.other.contains_key("wallpaper"));
        assert_eq!(config.theme.namespace(), DEFAULT_NAMESPACE);
    }

    #[test]
    fn test_env_overrides() {
        let mut registry = SettingsRegistry::with_config(Config::default());
        registry.apply_env_overrides(|name| match name {
            ENV_THEME_NAMESPACE => Some("ui_prefs".to_string()),
            ENV_THEME_STORE_DIR => Some("/srv/prefs".to_string()),
            _ => None,
        });

        assert_eq!(
            registry.theme_store_path().unwrap(),
            PathBuf::from("/srv/prefs/ui_prefs.toml")
        );
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut registry = SettingsRegistry::with_config(Config::default());
        registry.apply_env_overrides(|_| Some(String::new()));
        assert_eq!(registry.get().theme.namespace, None);
        assert_eq!(registry.get().theme.store_dir, None);
    }
}
