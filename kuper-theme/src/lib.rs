#![warn(missing_docs)]

//! # Kuper Theme Engine
//!
//! Resolves the app theme from a handful of user preferences and what the
//! host platform can do.
//!
//! ## Overview
//!
//! - **[ThemeEngine](engine::ThemeEngine)**: preference accessors, the cached
//!   color scheme resolver and the theme resource resolver
//! - **[DisplayMode](mode::DisplayMode)**, **[UsageMode](mode::UsageMode)**,
//!   **[ColorStyle](mode::ColorStyle)**: the persisted preferences
//! - **[ColorScheme](scheme::ColorScheme)**: the built-in light, dark and
//!   AMOLED schemes
//! - **[ThemeResourceId](resource::ThemeResourceId)**: which theme
//!   declaration the view layer applies
//! - **[PreferenceStore](store::PreferenceStore)** and
//!   **[Platform](platform::Platform)**: the collaborators a host provides
//!
//! ## Quick Start
//!
//! ```rust
//! use kuper_theme::engine::ThemeEngine;
//! use kuper_theme::mode::DisplayMode;
//! use kuper_theme::platform::StaticPlatform;
//! use kuper_theme::store::MemoryPreferenceStore;
//!
//! let engine = ThemeEngine::new(MemoryPreferenceStore::new(), StaticPlatform::new(34));
//! engine.set_display_mode(DisplayMode::Dark);
//!
//! let scheme = engine.resolve_color_scheme();
//! assert!(scheme.is_dark());
//! ```
//!
//! Corrupt stored values never produce errors: the engine falls back to
//! `SYSTEM`, `DYNAMIC` and `EMPHASIS`, the same as on a first run.

/// Contains the [color::Argb] packed color type.
pub mod color;
/// Contains the [engine::ThemeEngine].
pub mod engine;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the persisted preference enums.
pub mod mode;
/// Contains the [platform::Platform] trait and [platform::StaticPlatform].
pub mod platform;
/// Contains the [resource::ThemeResourceId] selection logic.
pub mod resource;
/// Contains the built-in [scheme::ColorScheme]s.
pub mod scheme;
/// Contains the [store::PreferenceStore] trait and an in-memory store.
pub mod store;
