//! Platform abstraction for the desktop host.
//!
//! This module keeps track of what the desktop reports (light or dark) and
//! which night mode the app asked for, and exposes both to the theme engine.

/// Contains the [AppearanceDelegate](appearance::AppearanceDelegate).
pub mod appearance;

/// Contains the [DesktopPlatform](desktop::DesktopPlatform).
pub mod desktop;

#[cfg(all(target_os = "linux", feature = "xdg-portal"))]
pub mod xdg_desktop_portal;

// Re-export commonly used types
pub use appearance::{AppearanceDelegate, WindowAppearance};
pub use desktop::DesktopPlatform;

// Re-export xdg-portal functions
#[cfg(all(target_os = "linux", feature = "xdg-portal"))]
pub use xdg_desktop_portal::{query_window_appearance, read_window_appearance};
