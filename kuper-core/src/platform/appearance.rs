//! Process-wide appearance state.

use arc_swap::ArcSwap;
use kuper_theme::platform::NightMode;
use std::sync::Arc;

/// Window appearance preference (light or dark mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowAppearance {
    /// Light appearance (light theme).
    #[default]
    Light,
    /// Dark appearance (dark theme).
    Dark,
}

impl WindowAppearance {
    /// Returns true for [WindowAppearance::Dark].
    pub const fn is_dark(self) -> bool {
        matches!(self, WindowAppearance::Dark)
    }
}

/// Holds the app's default night mode and the last appearance reported by
/// the desktop.
///
/// Both values can be read and replaced from any thread. The host creates one
/// and shares it (behind an `Arc`) between the platform and whatever listens
/// for desktop changes.
#[derive(Debug)]
pub struct AppearanceDelegate {
    night_mode: ArcSwap<NightMode>,
    system: ArcSwap<WindowAppearance>,
}

impl AppearanceDelegate {
    /// Create a delegate following a light desktop.
    pub fn new() -> Self {
        Self {
            night_mode: ArcSwap::from_pointee(NightMode::default()),
            system: ArcSwap::from_pointee(WindowAppearance::default()),
        }
    }

    /// The night mode the app last asked for.
    pub fn default_night_mode(&self) -> NightMode {
        **self.night_mode.load()
    }

    /// Replace the app's default night mode.
    pub fn set_default_night_mode(&self, mode: NightMode) {
        let previous = self.night_mode.swap(Arc::new(mode));
        if *previous != mode {
            log::debug!("Default night mode changed: {:?} -> {:?}", previous, mode);
        }
    }

    /// What the desktop currently reports.
    pub fn system_appearance(&self) -> WindowAppearance {
        **self.system.load()
    }

    /// Record a new appearance reported by the desktop.
    pub fn set_system_appearance(&self, appearance: WindowAppearance) {
        self.system.store(Arc::new(appearance));
    }

    /// The appearance windows should use once the night mode is applied.
    pub fn effective_appearance(&self) -> WindowAppearance {
        match self.default_night_mode() {
            NightMode::ForceLight => WindowAppearance::Light,
            NightMode::ForceDark => WindowAppearance::Dark,
            NightMode::FollowSystem => self.system_appearance(),
        }
    }
}

impl Default for AppearanceDelegate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_delegate_follows_light_desktop() {
        let delegate = AppearanceDelegate::new();
        assert_eq!(delegate.default_night_mode(), NightMode::FollowSystem);
        assert_eq!(delegate.system_appearance(), WindowAppearance::Light);
        assert_eq!(delegate.effective_appearance(), WindowAppearance::Light);
    }

    #[test]
    fn test_effective_appearance() {
        let delegate = AppearanceDelegate::new();
        delegate.set_system_appearance(WindowAppearance::Dark);
        assert_eq!(delegate.effective_appearance(), WindowAppearance::Dark);

        delegate.set_default_night_mode(NightMode::ForceLight);
        assert_eq!(delegate.effective_appearance(), WindowAppearance::Light);
        assert_eq!(delegate.system_appearance(), WindowAppearance::Dark);

        delegate.set_system_appearance(WindowAppearance::Light);
        delegate.set_default_night_mode(NightMode::ForceDark);
        assert_eq!(delegate.effective_appearance(), WindowAppearance::Dark);
    }
}
