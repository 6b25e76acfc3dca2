//! WCAG AA contrast auditing for design-token palettes.
//!
//! The crate is layered leaf to root: [`color`] parses hex tokens into sRGB
//! values, [`wcag`] computes relative luminance, contrast ratios, and AA
//! verdicts, [`palette`] holds named tokens with light/dark variants,
//! [`report`] runs an ordered batch of checks into an immutable report, and
//! [`scan`] searches a candidate list for compliant replacements of a
//! failing color. [`config`], [`cli`], and [`render`] form the surrounding
//! tool: TOML input, argument parsing, and console/JSON output.

pub mod cli;
pub mod color;
pub mod config;
pub mod logging;
pub mod palette;
pub mod render;
pub mod report;
pub mod scan;
pub mod wcag;
