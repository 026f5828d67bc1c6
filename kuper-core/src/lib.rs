#![warn(missing_docs)]

//! Desktop platform adapters for kuper => See `kuper` crate.
//!
//! Contains the process-wide appearance state and a
//! [Platform](kuper_theme::platform::Platform) backed by it.

/// Contains the desktop [Platform](kuper_theme::platform::Platform) implementation.
pub mod platform;
