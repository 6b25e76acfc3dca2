use contrast_check::color::ColorValue;
use contrast_check::palette::{PaletteRegistry, RegistryError, ThemeVariant};

fn color(hex: &str) -> ColorValue {
    ColorValue::parse(hex).unwrap()
}

#[test]
fn test_register_and_resolve() {
    let mut registry = PaletteRegistry::new();
    registry
        .register("background", color("#FAFAFA"), Some(color("#09090B")))
        .unwrap();

    assert_eq!(
        registry.resolve("background", ThemeVariant::Light).unwrap(),
        color("#FAFAFA")
    );
    assert_eq!(
        registry.resolve("background", ThemeVariant::Dark).unwrap(),
        color("#09090B")
    );
}

#[test]
fn test_duplicate_registration_fails() {
    let mut registry = PaletteRegistry::new();
    registry.register("accent", color("#CA8A04"), None).unwrap();

    let err = registry
        .register("accent", color("#FACC15"), None)
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateToken("accent".to_string()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_unknown_token_fails() {
    let registry = PaletteRegistry::new();
    let err = registry.resolve("missing", ThemeVariant::Light).unwrap_err();
    assert_eq!(err, RegistryError::UnknownToken("missing".to_string()));
}

#[test]
fn test_light_only_token_has_no_dark_variant() {
    let mut registry = PaletteRegistry::new();
    registry
        .register("accent-surface", color("#FACC15"), None)
        .unwrap();

    // Light resolves; dark is an explicit error, never a silent fallback
    assert!(registry.resolve("accent-surface", ThemeVariant::Light).is_ok());
    let err = registry
        .resolve("accent-surface", ThemeVariant::Dark)
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::MissingVariant {
            token: "accent-surface".to_string(),
            variant: ThemeVariant::Dark,
        }
    );
}

#[test]
fn test_get_returns_token() {
    let mut registry = PaletteRegistry::new();
    registry
        .register("text-muted", color("#71717A"), Some(color("#71717A")))
        .unwrap();

    let token = registry.get("text-muted").unwrap();
    assert_eq!(token.name, "text-muted");
    assert_eq!(token.light, color("#71717A"));
    assert!(registry.get("other").is_none());
}

#[test]
fn test_error_messages_name_the_token() {
    let registry = PaletteRegistry::new();
    let err = registry.resolve("brand", ThemeVariant::Dark).unwrap_err();
    assert!(err.to_string().contains("brand"));
}
