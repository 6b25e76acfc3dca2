//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::palette::ThemeVariant;

/// Theme variant selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Audit the light palette only
    Light,
    /// Audit the dark palette only
    Dark,
    /// Audit both palettes
    #[default]
    Both,
}

impl VariantArg {
    /// The theme variants to run, in report order.
    pub fn variants(self) -> Vec<ThemeVariant> {
        match self {
            Self::Light => vec![ThemeVariant::Light],
            Self::Dark => vec![ThemeVariant::Dark],
            Self::Both => vec![ThemeVariant::Light, ThemeVariant::Dark],
        }
    }
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Grouped console text
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// WCAG AA contrast auditor for design-token palettes.
#[derive(Parser, Debug)]
#[command(name = "contrast-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Audit configuration file (TOML). Uses the built-in palette when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Theme variant(s) to audit
    #[arg(long, value_enum, default_value_t = VariantArg::Both)]
    pub variant: VariantArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Scan the candidate list for compliant alternatives on failing checks
    #[arg(short, long)]
    pub suggest: bool,

    /// Exit non-zero if any check fails or errors
    #[arg(long)]
    pub strict: bool,

    /// Log file path (default: contrast-check.log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}
