//! # Theme Resources
//!
//! A [ThemeResourceId] names the theme declaration a view layer applies to
//! itself. There are three families, each with light, dark and AMOLED
//! variants:
//!
//! | family     | used when                                   |
//! |------------|---------------------------------------------|
//! | `Base`     | static usage, or no dynamic-color support   |
//! | `Emphasis` | dynamic usage with [ColorStyle::Emphasis]   |
//! | `Pastel`   | dynamic usage with [ColorStyle::Pastel]     |
//!
//! [DisplayMode::System] has no variant of its own and maps to the light
//! variant of the selected family. Theme declarations are static, so they
//! cannot follow the host setting; the color scheme resolver in
//! [crate::engine] asks the platform instead. Keep the two behaviors apart.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mode::{ColorStyle, DisplayMode, UsageMode};

/// The theme declaration families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeFamily {
    /// The app's built-in static theme.
    Base,
    /// Dynamic colors, emphasis style.
    Emphasis,
    /// Dynamic colors, pastel style.
    Pastel,
}

/// The brightness variant within a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeVariant {
    /// Light.
    Light,
    /// Dark.
    Dark,
    /// Dark on pure black.
    Amoled,
}

/// Identifies one concrete theme declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeResourceId {
    /// Which family the theme belongs to.
    pub family: ThemeFamily,
    /// Which brightness variant.
    pub variant: ThemeVariant,
}

impl ThemeFamily {
    /// Whether this family draws from platform dynamic colors.
    pub const fn is_dynamic(self) -> bool {
        !matches!(self, ThemeFamily::Base)
    }
}

impl ThemeVariant {
    /// The variant used for a display mode. `System` falls back to `Light`.
    pub const fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light | DisplayMode::System => ThemeVariant::Light,
            DisplayMode::Dark => ThemeVariant::Dark,
            DisplayMode::Amoled => ThemeVariant::Amoled,
        }
    }
}

impl ThemeResourceId {
    /// Create a resource id from its parts.
    pub const fn new(family: ThemeFamily, variant: ThemeVariant) -> Self {
        Self { family, variant }
    }

    /// Select the theme declaration for a set of preferences.
    ///
    /// `usage` is taken as stored; `supports_dynamic` re-applies the
    /// capability gate so the function is safe to call with raw values.
    pub const fn resolve(
        mode: DisplayMode,
        usage: UsageMode,
        style: ColorStyle,
        supports_dynamic: bool,
    ) -> Self {
        let family = match (usage, supports_dynamic, style) {
            (UsageMode::Static, _, _) | (UsageMode::Dynamic, false, _) => ThemeFamily::Base,
            (UsageMode::Dynamic, true, ColorStyle::Emphasis) => ThemeFamily::Emphasis,
            (UsageMode::Dynamic, true, ColorStyle::Pastel) => ThemeFamily::Pastel,
        };
        Self::new(family, ThemeVariant::for_mode(mode))
    }

    /// Stable dotted name, e.g. `Theme.Base.Amoled` or
    /// `Theme.Dynamic.Pastel.Light`.
    pub const fn name(self) -> &'static str {
        match (self.family, self.variant) {
            (ThemeFamily::Base, ThemeVariant::Light) => "Theme.Base.Light",
            (ThemeFamily::Base, ThemeVariant::Dark) => "Theme.Base.Dark",
            (ThemeFamily::Base, ThemeVariant::Amoled) => "Theme.Base.Amoled",
            (ThemeFamily::Emphasis, ThemeVariant::Light) => "Theme.Dynamic.Emphasis.Light",
            (ThemeFamily::Emphasis, ThemeVariant::Dark) => "Theme.Dynamic.Emphasis.Dark",
            (ThemeFamily::Emphasis, ThemeVariant::Amoled) => "Theme.Dynamic.Emphasis.Amoled",
            (ThemeFamily::Pastel, ThemeVariant::Light) => "Theme.Dynamic.Pastel.Light",
            (ThemeFamily::Pastel, ThemeVariant::Dark) => "Theme.Dynamic.Pastel.Dark",
            (ThemeFamily::Pastel, ThemeVariant::Amoled) => "Theme.Dynamic.Pastel.Amoled",
        }
    }
}

impl fmt::Display for ThemeResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
