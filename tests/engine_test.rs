use kuper::prelude::*;
use std::fs;
use std::sync::Arc;

fn desktop(dark: bool) -> DesktopPlatform {
    let delegate = Arc::new(AppearanceDelegate::new());
    if dark {
        delegate.set_system_appearance(WindowAppearance::Dark);
    }
    DesktopPlatform::with_delegate(33, delegate)
}

#[tokio::test]
async fn test_engine_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[theme]\nnamespace = \"wallpaper_theme\"\nstore_dir = {:?}\n",
            dir.path().to_string_lossy()
        ),
    )
    .unwrap();

    let mut settings = SettingsRegistry::with_config(Default::default());
    for result in settings.load_from_paths_async(vec![config_path]).await {
        result.unwrap();
    }

    let engine = Engine::open(&settings, desktop(false)).unwrap();
    engine.set_color_style(ColorStyle::Pastel);
    assert_eq!(engine.store_path(), dir.path().join("wallpaper_theme.toml"));

    let written = fs::read_to_string(engine.store_path()).unwrap();
    assert!(written.contains("color_style = \"PASTEL\""));
}

#[test]
fn test_amoled_static_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = SettingsRegistry::with_config(Default::default());
    settings.apply_env_overrides(|name| match name {
        "KUPER_THEME_STORE_DIR" => Some(dir.path().to_string_lossy().into_owned()),
        _ => None,
    });

    let engine = Engine::open(&settings, desktop(false)).unwrap();
    engine.set_display_mode(DisplayMode::Amoled);
    engine.set_usage_mode(UsageMode::Static);

    let scheme = engine.resolve_color_scheme();
    assert_eq!(scheme.surface, Argb::PURE_BLACK);
    assert_eq!(scheme.background, Argb::PURE_BLACK);
    assert_eq!(scheme.primary, ColorScheme::DARK.primary);
    assert_eq!(engine.resolve_theme_resource_id().name(), "Theme.Base.Amoled");
    assert_eq!(engine.appearance().default_night_mode(), NightMode::ForceDark);
}

#[test]
fn test_system_mode_on_dark_desktop_diverges() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = SettingsRegistry::with_config(Default::default());
    settings.apply_env_overrides(|name| match name {
        "KUPER_THEME_STORE_DIR" => Some(dir.path().to_string_lossy().into_owned()),
        _ => None,
    });

    let engine = Engine::open(&settings, desktop(true)).unwrap();
    engine.set_display_mode(DisplayMode::System);

    assert_eq!(*engine.resolve_color_scheme(), ColorScheme::DARK);
    assert_eq!(
        engine.resolve_theme_resource_id(),
        ThemeResourceId::new(ThemeFamily::Emphasis, ThemeVariant::Light)
    );
    assert_eq!(engine.appearance().default_night_mode(), NightMode::FollowSystem);
}
