//! The built-in color schemes.

use serde::{Deserialize, Serialize};

use crate::color::Argb;
use crate::mode::DisplayMode;

/// The twelve colors a view layer needs to paint itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Main accent.
    pub primary: Argb,
    /// Content drawn on `primary`.
    pub on_primary: Argb,
    /// Tinted container for primary content.
    pub primary_container: Argb,
    /// Content drawn on `primary_container`.
    pub on_primary_container: Argb,
    /// Secondary accent.
    pub secondary: Argb,
    /// Content drawn on `secondary`.
    pub on_secondary: Argb,
    /// Tinted container for secondary content.
    pub secondary_container: Argb,
    /// Content drawn on `secondary_container`.
    pub on_secondary_container: Argb,
    /// Cards, sheets and menus.
    pub surface: Argb,
    /// Content drawn on `surface`.
    pub on_surface: Argb,
    /// Window background.
    pub background: Argb,
    /// Content drawn on `background`.
    pub on_background: Argb,
}

impl ColorScheme {
    /// Default light scheme.
    pub const LIGHT: ColorScheme = ColorScheme {
        primary: Argb(0xFF6750A4),
        on_primary: Argb(0xFFFFFFFF),
        primary_container: Argb(0xFFEADDFF),
        on_primary_container: Argb(0xFF21005D),
        secondary: Argb(0xFF625B71),
        on_secondary: Argb(0xFFFFFFFF),
        secondary_container: Argb(0xFFE8DEF8),
        on_secondary_container: Argb(0xFF1D192B),
        surface: Argb(0xFFFEF7FF),
        on_surface: Argb(0xFF1D1B20),
        background: Argb(0xFFFEF7FF),
        on_background: Argb(0xFF1D1B20),
    };

    /// Default dark scheme.
    pub const DARK: ColorScheme = ColorScheme {
        primary: Argb(0xFFD0BCFF),
        on_primary: Argb(0xFF381E72),
        primary_container: Argb(0xFF4F378B),
        on_primary_container: Argb(0xFFEADDFF),
        secondary: Argb(0xFFCCC2DC),
        on_secondary: Argb(0xFF332D41),
        secondary_container: Argb(0xFF4A4458),
        on_secondary_container: Argb(0xFFE8DEF8),
        surface: Argb(0xFF1D1B20),
        on_surface: Argb(0xFFE6E0E9),
        background: Argb(0xFF1D1B20),
        on_background: Argb(0xFFE6E0E9),
    };

    /// [ColorScheme::DARK] with surface and background forced to pure black.
    pub const AMOLED: ColorScheme = ColorScheme {
        surface: Argb::PURE_BLACK,
        background: Argb::PURE_BLACK,
        ..ColorScheme::DARK
    };

    /// Pick the built-in scheme for a display mode once darkness is known.
    ///
    /// `is_dark` is ignored for [DisplayMode::Amoled], which is always the
    /// AMOLED scheme.
    pub const fn for_mode(mode: DisplayMode, is_dark: bool) -> ColorScheme {
        match mode {
            DisplayMode::Amoled => ColorScheme::AMOLED,
            _ if is_dark => ColorScheme::DARK,
            _ => ColorScheme::LIGHT,
        }
    }

    /// All twelve colors in field order.
    pub const fn colors(&self) -> [Argb; 12] {
        [
            self.primary,
            self.on_primary,
            self.primary_container,
            self.on_primary_container,
            self.secondary,
            self.on_secondary,
            self.secondary_container,
            self.on_secondary_container,
            self.surface,
            self.on_surface,
            self.background,
            self.on_background,
        ]
    }

    /// Whether every color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.colors().iter().all(|color| color.is_opaque())
    }

    /// Whether the background reads as dark (luma below 128).
    pub fn is_dark(&self) -> bool {
        self.background.luma() < 128
    }
}
