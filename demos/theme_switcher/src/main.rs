//! Reads and changes the persisted theme preferences from the command line.
//!
//! ```text
//! theme_switcher [--dark-desktop] [--reset] [DISPLAY_MODE] [USAGE_MODE] [COLOR_STYLE]
//! ```
//!
//! Values are the persisted names (`AMOLED`, `STATIC`, `PASTEL`, ...) and may
//! be given in any order. The log filter comes from `RUST_LOG`, else from
//! `[general] log_level` in `config.toml`.

use kuper::prelude::*;
use std::str::FromStr;

fn apply_argument(engine: &Engine, arg: &str) -> bool {
    let name = arg.to_uppercase();
    if let Ok(mode) = DisplayMode::from_str(&name) {
        engine.set_display_mode(mode);
    } else if let Ok(usage) = UsageMode::from_str(&name) {
        engine.set_usage_mode(usage);
    } else if let Ok(style) = ColorStyle::from_str(&name) {
        engine.set_color_style(style);
    } else {
        return false;
    }
    true
}

fn print_scheme(scheme: &ColorScheme) {
    let names = [
        "primary",
        "on_primary",
        "primary_container",
        "on_primary_container",
        "secondary",
        "on_secondary",
        "secondary_container",
        "on_secondary_container",
        "surface",
        "on_surface",
        "background",
        "on_background",
    ];
    for (name, color) in names.iter().zip(scheme.colors()) {
        println!("  {:<24} {}", name, color);
    }
}

fn main() {
    let settings = match smol::block_on(SettingsRegistry::new()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {:#}", e);
            std::process::exit(1);
        },
    };

    let filter = settings.get().general.log_filter();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let engine = match Engine::from_settings(&settings) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Failed to start the theme engine: {:#}", e);
            std::process::exit(1);
        },
    };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--dark-desktop" => engine.system_appearance_changed(WindowAppearance::Dark),
            "--reset" => engine.reset_preferences(),
            other => {
                if !apply_argument(&engine, other) {
                    log::warn!("Ignoring unknown argument '{}'", other);
                }
            },
        }
    }

    let selection = engine.selection();
    println!("store:          {}", engine.store_path().display());
    println!("display mode:   {}", selection.display_mode);
    println!("usage mode:     {}", selection.usage_mode);
    println!("color style:    {}", selection.color_style);
    println!("dynamic colors: {}", engine.supports_dynamic_color());
    println!("night mode:     {:?}", engine.appearance().default_night_mode());
    println!("theme:          {}", engine.resolve_theme_resource_id());
    println!("color scheme:");
    print_scheme(&engine.extract_dynamic_colors());
}
