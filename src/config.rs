//! TOML configuration for a contrast audit.
//!
//! A configuration names the palette tokens, the ordered check list, and the
//! ordered alternative-candidate list. The built-in configuration reproduces
//! the site's zinc/yellow design tokens and is used when no file is given.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::ColorValue;
use crate::palette::{PaletteRegistry, RegistryError, ThemeVariant};
use crate::report::CheckSpec;
use crate::scan::Candidate;
use crate::wcag::TextClass;

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Invalid color format
    InvalidColor(String),
    /// Token registration failed
    Registry(RegistryError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "TOML parse error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::InvalidColor(s) => write!(f, "Invalid color: {}", s),
            Self::Registry(e) => write!(f, "Palette error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<RegistryError> for ConfigError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}

/// A token's per-variant hex values as written in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenEntry {
    /// Light-mode value (#RRGGBB)
    pub light: String,
    /// Dark-mode value; omit for tokens that only exist in light mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
}

/// One contrast check as written in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckEntry {
    /// Human-readable description
    pub label: String,
    /// Foreground token name
    pub foreground: String,
    /// Background token name
    pub background: String,
    /// Text class (normal or large); defaults to normal
    #[serde(default)]
    pub text_class: TextClass,
    /// Restrict the check to one theme variant; runs in both when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<ThemeVariant>,
}

/// One alternative candidate for the suggestion scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeEntry {
    pub name: String,
    pub hex: String,
}

/// Root configuration structure for TOML audit files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Palette tokens by name
    pub tokens: BTreeMap<String, TokenEntry>,
    /// Ordered check list
    pub checks: Vec<CheckEntry>,
    /// Ordered alternative candidates, ranked by preference
    pub alternatives: Vec<AlternativeEntry>,
}

fn parse_hex(input: &str) -> Result<ColorValue, ConfigError> {
    ColorValue::parse(input).map_err(|e| ConfigError::InvalidColor(e.to_string()))
}

impl AuditConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the palette registry from the token table.
    ///
    /// Every hex value is validated here; a malformed static configuration
    /// is fatal to the whole run.
    pub fn build_registry(&self) -> Result<PaletteRegistry, ConfigError> {
        let mut registry = PaletteRegistry::new();
        for (name, entry) in &self.tokens {
            let light = parse_hex(&entry.light)?;
            let dark = entry.dark.as_deref().map(parse_hex).transpose()?;
            registry.register(name, light, dark)?;
        }
        Ok(registry)
    }

    /// The check specs that apply to one theme variant, in config order.
    pub fn check_specs(&self, variant: ThemeVariant) -> Vec<CheckSpec> {
        self.checks
            .iter()
            .filter(|check| check.variant.is_none_or(|v| v == variant))
            .map(|check| CheckSpec {
                label: check.label.clone(),
                foreground: check.foreground.clone(),
                background: check.background.clone(),
                text_class: check.text_class,
            })
            .collect()
    }

    /// The alternative candidates, parsed, in config order.
    pub fn candidates(&self) -> Result<Vec<Candidate>, ConfigError> {
        self.alternatives
            .iter()
            .map(|alt| Ok(Candidate::new(alt.name.clone(), parse_hex(&alt.hex)?)))
            .collect()
    }

    /// The built-in audit: the site's zinc/yellow tokens and check list.
    pub fn builtin() -> Self {
        let token = |light: &str, dark: Option<&str>| TokenEntry {
            light: light.to_string(),
            dark: dark.map(str::to_string),
        };
        let check = |label: &str,
                     foreground: &str,
                     background: &str,
                     text_class: TextClass,
                     variant: Option<ThemeVariant>| CheckEntry {
            label: label.to_string(),
            foreground: foreground.to_string(),
            background: background.to_string(),
            text_class,
            variant,
        };
        let alternative = |name: &str, hex: &str| AlternativeEntry {
            name: name.to_string(),
            hex: hex.to_string(),
        };

        let tokens = BTreeMap::from([
            // zinc-50 / zinc-950
            ("background".to_string(), token("#FAFAFA", Some("#09090B"))),
            // zinc-900 / zinc-100
            (
                "text-primary".to_string(),
                token("#18181B", Some("#F4F4F5")),
            ),
            // zinc-600 / zinc-400
            (
                "text-secondary".to_string(),
                token("#52525B", Some("#A1A1AA")),
            ),
            // zinc-500 in both variants
            ("text-muted".to_string(), token("#71717A", Some("#71717A"))),
            // yellow-600 / yellow-400
            ("accent".to_string(), token("#CA8A04", Some("#FACC15"))),
            // yellow-400 button surface, light mode only
            ("accent-surface".to_string(), token("#FACC15", None)),
            // labels on the accent surface (zinc-900 / zinc-100)
            ("button-label-dark".to_string(), token("#18181B", None)),
            ("button-label-light".to_string(), token("#F4F4F5", None)),
        ]);

        let checks = vec![
            check(
                "primary text",
                "text-primary",
                "background",
                TextClass::Normal,
                None,
            ),
            check(
                "secondary text",
                "text-secondary",
                "background",
                TextClass::Normal,
                None,
            ),
            check(
                "muted text",
                "text-muted",
                "background",
                TextClass::Normal,
                None,
            ),
            check(
                "accent text",
                "accent",
                "background",
                TextClass::Normal,
                None,
            ),
            check(
                "accent large text / UI",
                "accent",
                "background",
                TextClass::Large,
                None,
            ),
            check(
                "accent button surface",
                "accent-surface",
                "background",
                TextClass::Large,
                Some(ThemeVariant::Light),
            ),
            check(
                "button label (dark)",
                "button-label-dark",
                "accent-surface",
                TextClass::Normal,
                Some(ThemeVariant::Light),
            ),
            check(
                "button label (light)",
                "button-label-light",
                "accent-surface",
                TextClass::Normal,
                Some(ThemeVariant::Light),
            ),
            check(
                "link hover",
                "accent",
                "background",
                TextClass::Normal,
                None,
            ),
        ];

        let alternatives = vec![
            alternative("yellow-700", "#A16207"),
            alternative("yellow-800", "#854D0E"),
            alternative("amber-600", "#D97706"),
            alternative("amber-700", "#B45309"),
            alternative("amber-800", "#92400E"),
        ];

        Self {
            tokens,
            checks,
            alternatives,
        }
    }
}
