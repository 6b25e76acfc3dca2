//! sRGB color parsing and representation.
//!
//! Colors enter the system as 6-hex-digit strings (design-token values) and
//! are held as `palette::Srgb<u8>` for the rest of their lifetime.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;

/// Error for a string that is not a 6-hex-digit color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFormatError {
    input: String,
}

impl ColorFormatError {
    /// The offending input string.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid color '{}': expected 6 hex digits, optionally prefixed with '#'",
            self.input
        )
    }
}

impl std::error::Error for ColorFormatError {}

/// An immutable sRGB color parsed from a hex string.
///
/// # Example
///
/// ```
/// use contrast_check::color::ColorValue;
///
/// let zinc_900: ColorValue = "#18181B".parse().unwrap();
/// assert_eq!(zinc_900.channels(), (24, 24, 27));
/// assert_eq!(zinc_900.to_string(), "#18181B");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorValue {
    rgb: Srgb<u8>,
}

impl ColorValue {
    /// Parse a strict `#RRGGBB` or `RRGGBB` string, case-insensitive.
    ///
    /// Anything else (shorthand `#RGB`, alpha channels, named colors) is a
    /// `ColorFormatError`; token values are never coerced.
    pub fn parse(input: &str) -> Result<Self, ColorFormatError> {
        let err = || ColorFormatError {
            input: input.to_string(),
        };

        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| err());
        let red = channel(0..2)?;
        let green = channel(2..4)?;
        let blue = channel(4..6)?;

        Ok(Self {
            rgb: Srgb::new(red, green, blue),
        })
    }

    /// Construct directly from 8-bit channels.
    pub fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self {
            rgb: Srgb::new(red, green, blue),
        }
    }

    /// The underlying `palette` color.
    pub fn srgb(&self) -> Srgb<u8> {
        self.rgb
    }

    /// 8-bit channels as `(R, G, B)`.
    pub fn channels(&self) -> (u8, u8, u8) {
        (self.rgb.red, self.rgb.green, self.rgb.blue)
    }
}

impl FromStr for ColorValue {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}",
            self.rgb.red, self.rgb.green, self.rgb.blue
        )
    }
}

impl serde::Serialize for ColorValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
