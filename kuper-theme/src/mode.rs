//! # Theme Preferences
//!
//! The three user-facing preferences that drive theme resolution:
//!
//! - **[DisplayMode]**: light, dark, follow-the-system, or AMOLED pure black
//! - **[UsageMode]**: platform dynamic colors or the built-in static palette
//! - **[ColorStyle]**: which dynamic-color family to use
//!
//! Each preference is persisted under its upper-case name (`"AMOLED"`,
//! `"STATIC"`, ...). Reading back a value that is not one of those names is
//! not an error: [parse_or_default] substitutes the documented default, which
//! makes a corrupt store indistinguishable from a first run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned by the `FromStr` impls when a name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    /// The preference being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

/// Parse a stored preference, falling back to `default` when it is missing
/// or unrecognized.
pub fn parse_or_default<T: FromStr>(raw: Option<&str>, default: T) -> T {
    match raw {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Ignoring unrecognized preference value '{}'", raw);
                default
            },
        },
        None => default,
    }
}

macro_rules! preference_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The name this value is persisted under.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

preference_enum! {
    /// The user's light/dark choice.
    DisplayMode, "display mode", default = System {
        /// Always light.
        Light => "LIGHT",
        /// Always dark.
        Dark => "DARK",
        /// Follow the host's current light/dark setting.
        System => "SYSTEM",
        /// Dark with pure black surface and background.
        Amoled => "AMOLED",
    }
}

preference_enum! {
    /// Where theme colors come from.
    UsageMode, "usage mode", default = Dynamic {
        /// Platform-provided dynamic colors, when supported.
        Dynamic => "DYNAMIC",
        /// The app's built-in palette.
        Static => "STATIC",
    }
}

preference_enum! {
    /// Palette family used with [UsageMode::Dynamic].
    ColorStyle, "color style", default = Emphasis {
        /// Saturated accents.
        Emphasis => "EMPHASIS",
        /// Muted accents.
        Pastel => "PASTEL",
    }
}

impl DisplayMode {
    /// Whether this mode is dark regardless of the host setting.
    ///
    /// Returns `None` for [DisplayMode::System], which has to ask the platform.
    pub const fn fixed_darkness(self) -> Option<bool> {
        match self {
            DisplayMode::Light => Some(false),
            DisplayMode::Dark | DisplayMode::Amoled => Some(true),
            DisplayMode::System => None,
        }
    }
}
