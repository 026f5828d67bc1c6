//! Builds a [ThemeEngine] from the user's settings.

use anyhow::Result;
use kuper_core::platform::{AppearanceDelegate, DesktopPlatform, WindowAppearance};
use kuper_services::SettingsRegistry;
use kuper_theme::engine::ThemeEngine;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A [ThemeEngine] over the configured file store and a [DesktopPlatform].
///
/// Dereferences to the [ThemeEngine], so preference accessors and resolvers
/// are called on it directly.
#[derive(Debug)]
pub struct Engine {
    theme: ThemeEngine,
    appearance: Arc<AppearanceDelegate>,
    store_path: PathBuf,
}

impl Engine {
    /// Load the settings from the standard locations and open the engine.
    pub async fn load() -> Result<Self> {
        let settings = SettingsRegistry::new().await?;
        Self::from_settings(&settings)
    }

    /// Open the engine on a new [DesktopPlatform] with its own
    /// [AppearanceDelegate].
    pub fn from_settings(settings: &SettingsRegistry) -> Result<Self> {
        let engine = Self::open(settings, DesktopPlatform::default())?;
        #[cfg(all(target_os = "linux", feature = "xdg-portal"))]
        engine.refresh_from_portal();
        Ok(engine)
    }

    /// Open the engine on the store configured in `settings`.
    ///
    /// The persisted display mode is handed to the platform right away, so
    /// the app's night mode matches the stored preference from the start.
    pub fn open(settings: &SettingsRegistry, platform: DesktopPlatform) -> Result<Self> {
        let store = settings.open_theme_store()?;
        let store_path = store.path().to_path_buf();
        let appearance = platform.delegate().clone();
        let theme = ThemeEngine::new(store, platform);

        theme.apply_system_appearance(theme.display_mode());
        log::info!(
            "Theme engine ready: {} ({})",
            theme.resolve_theme_resource_id(),
            store_path.display()
        );

        Ok(Self {
            theme,
            appearance,
            store_path,
        })
    }

    /// The underlying engine.
    pub fn theme(&self) -> &ThemeEngine {
        &self.theme
    }

    /// The appearance state shared with the platform.
    pub fn appearance(&self) -> &Arc<AppearanceDelegate> {
        &self.appearance
    }

    /// The file holding the preferences.
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Record a desktop appearance change.
    ///
    /// The cached color scheme is dropped, so `SYSTEM` mode picks up the new
    /// appearance on the next resolution.
    pub fn system_appearance_changed(&self, appearance: WindowAppearance) {
        if self.appearance.system_appearance() == appearance {
            return;
        }
        log::debug!("System appearance changed to {:?}", appearance);
        self.appearance.set_system_appearance(appearance);
        self.theme.clear_color_scheme_cache();
    }

    /// Read the desktop color scheme from the XDG Desktop Portal.
    #[cfg(all(target_os = "linux", feature = "xdg-portal"))]
    pub fn refresh_from_portal(&self) -> WindowAppearance {
        let appearance = kuper_core::platform::query_window_appearance();
        self.system_appearance_changed(appearance);
        appearance
    }
}

impl Deref for Engine {
    type Target = ThemeEngine;

    fn deref(&self) -> &Self::Target {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuper_services::settings::{Config, ThemeSettings};
    use kuper_theme::mode::DisplayMode;
    use kuper_theme::platform::NightMode;
    use kuper_theme::scheme::ColorScheme;

    fn settings(dir: &Path) -> SettingsRegistry {
        SettingsRegistry::with_config(Config {
            theme: ThemeSettings {
                namespace: None,
                store_dir: Some(dir.to_path_buf()),
            },
            ..Config::default()
        })
    }

    fn platform() -> DesktopPlatform {
        DesktopPlatform::with_delegate(33, Arc::new(AppearanceDelegate::new()))
    }

    #[test]
    fn test_open_uses_configured_store() {
        let dir = tempfile::tempdir().unwrap();
        let engine = Engine::open(&settings(dir.path()), platform()).unwrap();
        assert_eq!(engine.store_path(), dir.path().join("theme_prefs.toml"));
        assert_eq!(engine.display_mode(), DisplayMode::System);
    }

    #[test]
    fn test_open_applies_persisted_display_mode() {
        let dir = tempfile::tempdir().unwrap();
        {
            let engine = Engine::open(&settings(dir.path()), platform()).unwrap();
            engine.set_display_mode(DisplayMode::Amoled);
        }

        let engine = Engine::open(&settings(dir.path()), platform()).unwrap();
        assert_eq!(engine.appearance().default_night_mode(), NightMode::ForceDark);
        assert_eq!(*engine.resolve_color_scheme(), ColorScheme::AMOLED);
    }

    #[test]
    fn test_engines_do_not_share_appearance() {
        let dir = tempfile::tempdir().unwrap();
        let first = Engine::from_settings(&settings(dir.path())).unwrap();
        let second = Engine::from_settings(&settings(dir.path())).unwrap();
        assert!(!Arc::ptr_eq(first.appearance(), second.appearance()));

        first.set_display_mode(DisplayMode::Dark);
        assert_eq!(first.appearance().default_night_mode(), NightMode::ForceDark);
        assert_eq!(second.appearance().default_night_mode(), NightMode::FollowSystem);
    }

    #[test]
    fn test_system_appearance_change_drops_cache() {
        let dir = tempfile::tempdir().unwrap();
        let engine = Engine::open(&settings(dir.path()), platform()).unwrap();
        assert_eq!(*engine.resolve_color_scheme(), ColorScheme::LIGHT);

        engine.system_appearance_changed(WindowAppearance::Dark);
        assert_eq!(*engine.resolve_color_scheme(), ColorScheme::DARK);

        let cached = engine.resolve_color_scheme();
        engine.system_appearance_changed(WindowAppearance::Dark);
        assert!(Arc::ptr_eq(&cached, &engine.resolve_color_scheme()));
    }
}
