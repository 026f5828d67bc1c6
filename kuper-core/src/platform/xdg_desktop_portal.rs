//! XDG Desktop Portal integration for the system color scheme.
//!
//! This module uses the [ashpd] crate to read `org.freedesktop.appearance
//! color-scheme` through the XDG Desktop Portal.

use ashpd::desktop::settings::{ColorScheme, Settings};
use std::thread;

use super::appearance::WindowAppearance;

impl WindowAppearance {
    /// Convert from XDG Desktop Portal ColorScheme.
    fn from_native(cs: ColorScheme) -> Self {
        match cs {
            ColorScheme::PreferDark => WindowAppearance::Dark,
            ColorScheme::PreferLight => WindowAppearance::Light,
            ColorScheme::NoPreference => WindowAppearance::Light,
        }
    }
}

/// Read the current color scheme from the portal.
pub async fn read_window_appearance() -> Result<WindowAppearance, ashpd::Error> {
    let settings = Settings::new().await?;
    let scheme = settings.color_scheme().await?;
    Ok(WindowAppearance::from_native(scheme))
}

/// Read the current color scheme, blocking the calling thread.
///
/// The query runs on its own thread with a current-thread tokio runtime, so
/// it may be called from inside another runtime. Falls back to
/// [WindowAppearance::Light] when the portal cannot be reached.
pub fn query_window_appearance() -> WindowAppearance {
    let query = thread::spawn(|| {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::warn!("XDG Desktop Portal: failed to start runtime: {}", e);
                return WindowAppearance::Light;
            },
        };

        match runtime.block_on(read_window_appearance()) {
            Ok(appearance) => appearance,
            Err(e) => {
                log::warn!("Failed to read color scheme from XDG Desktop Portal: {}", e);
                WindowAppearance::Light
            },
        }
    });

    match query.join() {
        Ok(appearance) => {
            log::debug!("XDG Desktop Portal color scheme: {:?}", appearance);
            appearance
        },
        Err(_) => {
            log::warn!("XDG Desktop Portal query thread panicked");
            WindowAppearance::Light
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_native() {
        assert_eq!(
            WindowAppearance::from_native(ColorScheme::PreferDark),
            WindowAppearance::Dark
        );
        assert_eq!(
            WindowAppearance::from_native(ColorScheme::PreferLight),
            WindowAppearance::Light
        );
        assert_eq!(
            WindowAppearance::from_native(ColorScheme::NoPreference),
            WindowAppearance::Light
        );
    }
}
