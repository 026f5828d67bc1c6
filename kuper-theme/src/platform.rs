//! Host platform collaborators: capability probe, night-mode query and the
//! app-wide night-mode directive.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::mode::DisplayMode;

/// First OS major version with system dynamic colors (Android 12, API 31).
pub const DYNAMIC_COLOR_MIN_VERSION: u32 = 31;

/// Directive telling the host which appearance the app prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NightMode {
    /// Always light.
    ForceLight,
    /// Always dark.
    ForceDark,
    /// Whatever the host is currently using.
    #[default]
    FollowSystem,
}

impl From<DisplayMode> for NightMode {
    fn from(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => NightMode::ForceLight,
            DisplayMode::Dark | DisplayMode::Amoled => NightMode::ForceDark,
            DisplayMode::System => NightMode::FollowSystem,
        }
    }
}

/// Everything the engine needs to know about (and tell) the host platform.
///
/// These are local facilities that are assumed to always answer; an
/// implementation that cannot reach its host may panic.
pub trait Platform {
    /// Major version of the running OS.
    fn os_major_version(&self) -> u32;

    /// Whether the host is currently in dark mode. Queried live, never cached.
    fn is_night_mode(&self) -> bool;

    /// Hand a night-mode directive to the host. Fire-and-forget.
    fn set_default_night_mode(&self, mode: NightMode);

    /// Whether the OS can supply dynamic colors.
    fn supports_dynamic_color(&self) -> bool {
        self.os_major_version() >= DYNAMIC_COLOR_MIN_VERSION
    }
}

/// A [Platform] with fixed answers that records every directive it receives.
///
/// Used by headless hosts and tests.
#[derive(Debug)]
pub struct StaticPlatform {
    os_major_version: u32,
    night_mode: RwLock<bool>,
    directives: RwLock<Vec<NightMode>>,
}

impl StaticPlatform {
    /// Create a platform reporting `os_major_version` and a light host.
    pub fn new(os_major_version: u32) -> Self {
        Self {
            os_major_version,
            night_mode: RwLock::new(false),
            directives: RwLock::new(Vec::new()),
        }
    }

    /// Set whether the host reports dark mode.
    pub fn with_night_mode(self, night: bool) -> Self {
        self.set_night_mode(night);
        self
    }

    /// Change the host's dark-mode answer.
    pub fn set_night_mode(&self, night: bool) {
        if let Ok(mut current) = self.night_mode.write() {
            *current = night;
        }
    }

    /// Every directive received so far, oldest first.
    pub fn directives(&self) -> Vec<NightMode> {
        self.directives
            .read()
            .map(|directives| directives.clone())
            .unwrap_or_default()
    }

    /// The most recent directive, if any.
    pub fn last_directive(&self) -> Option<NightMode> {
        self.directives
            .read()
            .ok()
            .and_then(|directives| directives.last().copied())
    }
}

impl Default for StaticPlatform {
    fn default() -> Self {
        Self::new(DYNAMIC_COLOR_MIN_VERSION)
    }
}

impl Platform for StaticPlatform {
    fn os_major_version(&self) -> u32 {
        self.os_major_version
    }

    fn is_night_mode(&self) -> bool {
        self.night_mode.read().map(|night| *night).unwrap_or(false)
    }

    fn set_default_night_mode(&self, mode: NightMode) {
        if let Ok(mut directives) = self.directives.write() {
            directives.push(mode);
        }
    }
}

impl<P: Platform + ?Sized> Platform for std::sync::Arc<P> {
    fn os_major_version(&self) -> u32 {
        (**self).os_major_version()
    }

    fn is_night_mode(&self) -> bool {
        (**self).is_night_mode()
    }

    fn set_default_night_mode(&self, mode: NightMode) {
        (**self).set_default_night_mode(mode)
    }

    fn supports_dynamic_color(&self) -> bool {
        (**self).supports_dynamic_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_night_mode_mapping() {
        assert_eq!(NightMode::from(DisplayMode::Light), NightMode::ForceLight);
        assert_eq!(NightMode::from(DisplayMode::Dark), NightMode::ForceDark);
        assert_eq!(NightMode::from(DisplayMode::Amoled), NightMode::ForceDark);
        assert_eq!(NightMode::from(DisplayMode::System), NightMode::FollowSystem);
    }

    #[test]
    fn test_dynamic_color_cutoff() {
        assert!(!StaticPlatform::new(30).supports_dynamic_color());
        assert!(StaticPlatform::new(31).supports_dynamic_color());
        assert!(StaticPlatform::new(34).supports_dynamic_color());
    }

    #[test]
    fn test_static_platform_records_directives() {
        let platform = StaticPlatform::new(33).with_night_mode(true);
        assert!(platform.is_night_mode());
        assert_eq!(platform.last_directive(), None);

        platform.set_default_night_mode(NightMode::ForceDark);
        platform.set_default_night_mode(NightMode::FollowSystem);
        assert_eq!(
            platform.directives(),
            vec![NightMode::ForceDark, NightMode::FollowSystem]
        );
        assert_eq!(platform.last_directive(), Some(NightMode::FollowSystem));
    }
}
