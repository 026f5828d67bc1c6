//! The desktop [Platform].

use kuper_theme::platform::{NightMode, Platform, DYNAMIC_COLOR_MIN_VERSION};
use std::sync::Arc;

use super::appearance::AppearanceDelegate;
#[cfg(all(target_os = "linux", feature = "xdg-portal"))]
use super::appearance::WindowAppearance;

/// A [Platform] backed by an [AppearanceDelegate].
///
/// Night mode queries answer with what the desktop reports, not with the
/// directive the app has set. Directives only change the delegate's default
/// night mode.
#[derive(Debug, Clone)]
pub struct DesktopPlatform {
    os_major_version: u32,
    delegate: Arc<AppearanceDelegate>,
}

impl DesktopPlatform {
    /// Create a platform with a fresh delegate following a light desktop.
    pub fn new(os_major_version: u32) -> Self {
        Self::with_delegate(os_major_version, Arc::new(AppearanceDelegate::new()))
    }

    /// Create a platform over a specific delegate.
    pub fn with_delegate(os_major_version: u32, delegate: Arc<AppearanceDelegate>) -> Self {
        Self {
            os_major_version,
            delegate,
        }
    }

    /// The delegate this platform reads and writes.
    pub fn delegate(&self) -> &Arc<AppearanceDelegate> {
        &self.delegate
    }

    /// Ask the XDG Desktop Portal for the color scheme and store it in the delegate.
    #[cfg(all(target_os = "linux", feature = "xdg-portal"))]
    pub fn refresh_from_portal(&self) -> WindowAppearance {
        let appearance = super::xdg_desktop_portal::query_window_appearance();
        self.delegate.set_system_appearance(appearance);
        appearance
    }
}

impl Default for DesktopPlatform {
    /// Desktops are treated as able to supply dynamic colors.
    fn default() -> Self {
        Self::new(DYNAMIC_COLOR_MIN_VERSION)
    }
}

impl Platform for DesktopPlatform {
    fn os_major_version(&self) -> u32 {
        self.os_major_version
    }

    fn is_night_mode(&self) -> bool {
        self.delegate.system_appearance().is_dark()
    }

    fn set_default_night_mode(&self, mode: NightMode) {
        self.delegate.set_default_night_mode(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::WindowAppearance;

    #[test]
    fn test_night_mode_reads_system_appearance() {
        let platform = DesktopPlatform::with_delegate(33, Arc::new(AppearanceDelegate::new()));
        assert!(!platform.is_night_mode());

        platform.delegate().set_system_appearance(WindowAppearance::Dark);
        assert!(platform.is_night_mode());

        platform.set_default_night_mode(NightMode::ForceLight);
        assert!(platform.is_night_mode());
        assert_eq!(
            platform.delegate().effective_appearance(),
            WindowAppearance::Light
        );
    }

    #[test]
    fn test_platforms_own_their_delegate() {
        let first = DesktopPlatform::default();
        let second = DesktopPlatform::default();
        assert!(!Arc::ptr_eq(first.delegate(), second.delegate()));

        first.set_default_night_mode(NightMode::ForceDark);
        assert_eq!(second.delegate().default_night_mode(), NightMode::FollowSystem);

        let shared = first.clone();
        assert!(Arc::ptr_eq(first.delegate(), shared.delegate()));
    }

    #[test]
    fn test_dynamic_color_cutoff() {
        let delegate = Arc::new(AppearanceDelegate::new());
        assert!(!DesktopPlatform::with_delegate(30, delegate.clone()).supports_dynamic_color());
        assert!(DesktopPlatform::with_delegate(31, delegate).supports_dynamic_color());
        assert!(DesktopPlatform::default().supports_dynamic_color());
    }
}
