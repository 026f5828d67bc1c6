// SPDX-License-Identifier: LGPL-3.0-only
pub mod settings;
pub mod store;

// Re-export commonly used types from settings and store
pub use settings::{Config, SettingsRegistry, ThemeSettings};
pub use store::FilePreferenceStore;
