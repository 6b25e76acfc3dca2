//! Named color tokens with light/dark variants.
//!
//! The registry is populated once from configuration and treated as
//! read-only for the lifetime of a reporting run.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::ColorValue;

/// Theme variant a token value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    Light,
    Dark,
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// A named palette entry with per-variant color values.
///
/// A token without an explicit dark value is not implicitly reused for dark
/// mode; resolving the missing variant is an error. Implicit fallback would
/// silently hide contrast regressions when tokens are remapped per theme.
#[derive(Debug, Clone)]
pub struct ColorToken {
    pub name: String,
    pub light: ColorValue,
    pub dark: Option<ColorValue>,
}

/// Error type for registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A token name was registered twice
    DuplicateToken(String),
    /// A check referenced a token name that was never registered
    UnknownToken(String),
    /// A check requested a variant the token does not define
    MissingVariant {
        token: String,
        variant: ThemeVariant,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateToken(name) => write!(f, "duplicate token '{name}'"),
            Self::UnknownToken(name) => write!(f, "unknown token '{name}'"),
            Self::MissingVariant { token, variant } => {
                write!(f, "token '{token}' has no {variant} value")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

impl serde::Serialize for RegistryError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Mapping from token name to [`ColorToken`], built once at startup.
#[derive(Debug, Clone, Default)]
pub struct PaletteRegistry {
    tokens: HashMap<String, ColorToken>,
}

impl PaletteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token. Names are unique; re-registering one is an error.
    pub fn register(
        &mut self,
        name: &str,
        light: ColorValue,
        dark: Option<ColorValue>,
    ) -> Result<(), RegistryError> {
        if self.tokens.contains_key(name) {
            return Err(RegistryError::DuplicateToken(name.to_string()));
        }
        self.tokens.insert(
            name.to_string(),
            ColorToken {
                name: name.to_string(),
                light,
                dark,
            },
        );
        Ok(())
    }

    /// Resolve a token name to its color for the requested variant.
    pub fn resolve(&self, name: &str, variant: ThemeVariant) -> Result<ColorValue, RegistryError> {
        let token = self
            .tokens
            .get(name)
            .ok_or_else(|| RegistryError::UnknownToken(name.to_string()))?;

        match variant {
            ThemeVariant::Light => Ok(token.light),
            ThemeVariant::Dark => token.dark.ok_or_else(|| RegistryError::MissingVariant {
                token: token.name.clone(),
                variant,
            }),
        }
    }

    /// Look up a token by name without resolving a variant.
    pub fn get(&self, name: &str) -> Option<&ColorToken> {
        self.tokens.get(name)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
