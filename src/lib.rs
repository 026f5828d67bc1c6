#![warn(missing_docs)]

//! Theme resolution for the Kuper wallpaper app.
//!
//! Re-exports the workspace crates and wires them together: [Engine] loads
//! the settings, opens the preference store and attaches the desktop
//! platform.

pub use kuper_core as core;
pub use kuper_services as services;
pub use kuper_theme as theme;

/// Contains the [Engine](bootstrap::Engine) bootstrap helper.
pub mod bootstrap;

pub use bootstrap::Engine;

/// A "prelude" for users of kuper.
///
/// Importing this module brings into scope the types needed to resolve a
/// theme from persisted preferences.
///
/// ```rust
/// use kuper::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bootstrap::Engine;

    // Preferences
    pub use crate::theme::mode::{ColorStyle, DisplayMode, UsageMode};

    // Resolution
    pub use crate::theme::color::Argb;
    pub use crate::theme::engine::{ThemeEngine, ThemeSelection};
    pub use crate::theme::resource::{ThemeFamily, ThemeResourceId, ThemeVariant};
    pub use crate::theme::scheme::ColorScheme;

    // Collaborators
    pub use crate::theme::platform::{NightMode, Platform, StaticPlatform};
    pub use crate::theme::store::{MemoryPreferenceStore, PreferenceStore};
    pub use crate::core::platform::{AppearanceDelegate, DesktopPlatform, WindowAppearance};
    pub use crate::services::{FilePreferenceStore, SettingsRegistry};

    // Errors
    pub use crate::theme::error::{ThemeError, ThemeResult};
}
