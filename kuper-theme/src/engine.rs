//! # Theme Engine
//!
//! [ThemeEngine] turns persisted preferences and platform facts into the
//! colors and theme declaration a view layer should use.
//!
//! ## Resolution
//!
//! - [ThemeEngine::resolve_color_scheme] picks one of the built-in
//!   [ColorScheme]s. `System` asks the platform whether it is in dark mode.
//!   The result is cached until a preference setter or
//!   [ThemeEngine::clear_color_scheme_cache] runs.
//! - [ThemeEngine::resolve_theme_resource_id] picks a [ThemeResourceId].
//!   `System` always maps to the light variant here (see [crate::resource]).
//!
//! ## Usage
//!
//! ```rust
//! use kuper_theme::engine::ThemeEngine;
//! use kuper_theme::mode::{DisplayMode, UsageMode};
//! use kuper_theme::platform::StaticPlatform;
//! use kuper_theme::scheme::ColorScheme;
//! use kuper_theme::store::MemoryPreferenceStore;
//!
//! let engine = ThemeEngine::new(MemoryPreferenceStore::new(), StaticPlatform::new(33));
//! engine.set_display_mode(DisplayMode::Amoled);
//! engine.set_usage_mode(UsageMode::Static);
//!
//! assert_eq!(*engine.resolve_color_scheme(), ColorScheme::AMOLED);
//! assert_eq!(engine.resolve_theme_resource_id().name(), "Theme.Base.Amoled");
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use crate::mode::{parse_or_default, ColorStyle, DisplayMode, UsageMode};
use crate::platform::{NightMode, Platform};
use crate::resource::ThemeResourceId;
use crate::scheme::ColorScheme;
use crate::store::{PreferenceStore, KEY_COLOR_STYLE, KEY_THEME_MODE, KEY_USAGE_MODE};

/// Everything that decides which scheme and theme declaration apply.
///
/// Derived on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeSelection {
    /// The stored display mode.
    pub display_mode: DisplayMode,
    /// The usage mode after the dynamic-color capability gate.
    pub usage_mode: UsageMode,
    /// The stored color style.
    pub color_style: ColorStyle,
    /// Whether the effective appearance is dark.
    pub is_dark: bool,
}

impl ThemeSelection {
    /// The built-in scheme for this selection.
    pub const fn color_scheme(&self) -> ColorScheme {
        ColorScheme::for_mode(self.display_mode, self.is_dark)
    }

    /// The theme declaration for this selection.
    pub const fn resource_id(&self) -> ThemeResourceId {
        // `usage_mode` is already gated: Dynamic implies platform support.
        let supports_dynamic = matches!(self.usage_mode, UsageMode::Dynamic);
        ThemeResourceId::resolve(
            self.display_mode,
            self.usage_mode,
            self.color_style,
            supports_dynamic,
        )
    }
}

/// Resolves and caches the app theme from stored preferences.
pub struct ThemeEngine {
    store: Box<dyn PreferenceStore>,
    platform: Box<dyn Platform + Send + Sync>,
    color_scheme_cache: RwLock<Option<Arc<ColorScheme>>>,
}

impl ThemeEngine {
    /// Create an engine over a preference store and a host platform.
    pub fn new<S, P>(store: S, platform: P) -> Self
    where
        S: PreferenceStore + 'static,
        P: Platform + Send + Sync + 'static,
    {
        log::debug!(
            "ThemeEngine initialized (os version {}, dynamic color: {})",
            platform.os_major_version(),
            platform.supports_dynamic_color()
        );
        Self {
            store: Box::new(store),
            platform: Box::new(platform),
            color_scheme_cache: RwLock::new(None),
        }
    }

    /// The stored display mode, or `System`.
    pub fn display_mode(&self) -> DisplayMode {
        let raw = self.store.get(KEY_THEME_MODE);
        parse_or_default(raw.as_deref(), DisplayMode::default())
    }

    /// Persist the display mode and tell the host which appearance to use.
    pub fn set_display_mode(&self, mode: DisplayMode) {
        self.persist(KEY_THEME_MODE, mode.as_str());
        log::debug!("Theme mode set to: {}", mode);
        self.clear_color_scheme_cache();
        self.apply_system_appearance(mode);
    }

    /// The usage mode, forced to `Static` when dynamic colors are unsupported.
    pub fn usage_mode(&self) -> UsageMode {
        if !self.supports_dynamic_color() {
            return UsageMode::Static;
        }
        let raw = self.store.get(KEY_USAGE_MODE);
        parse_or_default(raw.as_deref(), UsageMode::default())
    }

    /// Persist the usage mode.
    pub fn set_usage_mode(&self, mode: UsageMode) {
        self.persist(KEY_USAGE_MODE, mode.as_str());
        log::debug!("Usage mode set to: {}", mode);
        self.clear_color_scheme_cache();
    }

    /// The stored color style, or `Emphasis`.
    pub fn color_style(&self) -> ColorStyle {
        let raw = self.store.get(KEY_COLOR_STYLE);
        parse_or_default(raw.as_deref(), ColorStyle::default())
    }

    /// Persist the color style.
    pub fn set_color_style(&self, style: ColorStyle) {
        self.persist(KEY_COLOR_STYLE, style.as_str());
        log::debug!("Color style set to: {}", style);
        self.clear_color_scheme_cache();
    }

    /// Forget all three preferences, returning to first-run defaults.
    pub fn reset_preferences(&self) {
        for key in [KEY_THEME_MODE, KEY_USAGE_MODE, KEY_COLOR_STYLE] {
            if let Err(e) = self.store.remove(key) {
                log::warn!("Failed to remove preference '{}': {}", key, e);
            }
        }
        self.clear_color_scheme_cache();
        self.apply_system_appearance(DisplayMode::default());
    }

    /// Whether the platform can supply dynamic colors.
    pub fn supports_dynamic_color(&self) -> bool {
        self.platform.supports_dynamic_color()
    }

    /// Send the night-mode directive matching `mode` to the host.
    pub fn apply_system_appearance(&self, mode: DisplayMode) {
        let night_mode = NightMode::from(mode);
        log::debug!("Applying system night mode {:?} for {}", night_mode, mode);
        self.platform.set_default_night_mode(night_mode);
    }

    /// Whether the effective appearance is dark. `System` asks the platform.
    pub fn is_dark(&self) -> bool {
        self.effective_darkness(self.display_mode())
    }

    /// The current preferences, gated and combined with the platform state.
    pub fn selection(&self) -> ThemeSelection {
        let display_mode = self.display_mode();
        ThemeSelection {
            display_mode,
            usage_mode: self.usage_mode(),
            color_style: self.color_style(),
            is_dark: self.effective_darkness(display_mode),
        }
    }

    /// The color scheme for the current preferences.
    ///
    /// Repeated calls return the same `Arc` until the cache is cleared.
    pub fn resolve_color_scheme(&self) -> Arc<ColorScheme> {
        if let Some(scheme) = self.cached_color_scheme() {
            return scheme;
        }

        let mut cache = self
            .color_scheme_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(scheme) = cache.as_ref() {
            return Arc::clone(scheme);
        }

        let mode = self.display_mode();
        let is_dark = self.effective_darkness(mode);
        let scheme = Arc::new(ColorScheme::for_mode(mode, is_dark));
        log::debug!("Resolved color scheme for {} (dark: {})", mode, is_dark);
        *cache = Some(Arc::clone(&scheme));
        scheme
    }

    /// Like [ThemeEngine::resolve_color_scheme], logging which color source
    /// the platform allows.
    ///
    /// Dynamic palettes themselves come from the applied theme declaration;
    /// the returned data is always one of the built-in schemes.
    pub fn extract_dynamic_colors(&self) -> Arc<ColorScheme> {
        if self.supports_dynamic_color() {
            log::debug!("Using dynamic system colors");
        } else {
            log::debug!("Using preset color scheme");
        }
        self.resolve_color_scheme()
    }

    /// The theme declaration for the current preferences.
    pub fn resolve_theme_resource_id(&self) -> ThemeResourceId {
        let id = ThemeResourceId::resolve(
            self.display_mode(),
            self.usage_mode(),
            self.color_style(),
            self.supports_dynamic_color(),
        );
        log::debug!("Resolved theme resource: {}", id);
        id
    }

    /// Drop the cached color scheme.
    pub fn clear_color_scheme_cache(&self) {
        let mut cache = self
            .color_scheme_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *cache = None;
    }

    fn cached_color_scheme(&self) -> Option<Arc<ColorScheme>> {
        self.color_scheme_cache
            .read()
            .ok()
            .and_then(|cache| cache.as_ref().map(Arc::clone))
    }

    fn effective_darkness(&self, mode: DisplayMode) -> bool {
        mode.fixed_darkness()
            .unwrap_or_else(|| self.platform.is_night_mode())
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.store.put(key, value) {
            log::warn!("Failed to persist preference '{}': {}", key, e);
        }
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("cached", &self.cached_color_scheme().is_some())
            .finish_non_exhaustive()
    }
}
