//! WCAG 2.1 relative luminance, contrast ratio, and AA classification.
//!
//! Implements the contrast model from the WCAG 2.1 specification: sRGB
//! channels are gamma-linearized, weighted into a relative luminance in
//! [0, 1], and two luminances combine into a contrast ratio in [1, 21].

use serde::{Deserialize, Serialize};

use crate::color::ColorValue;

/// WCAG luminance coefficients for sRGB D65
const COEF_R: f64 = 0.2126;
const COEF_G: f64 = 0.7152;
const COEF_B: f64 = 0.0722;

/// Linearization knee: channels at or below this stay on the linear segment
const LINEAR_KNEE: f64 = 0.03928;
const LINEAR_DIVISOR: f64 = 12.92;
const GAMMA_OFFSET: f64 = 0.055;
const GAMMA_SCALE: f64 = 1.055;
const GAMMA_EXPONENT: f64 = 2.4;

/// Flare term added to both luminances in the ratio
const FLARE: f64 = 0.05;

/// Gamma-linearize a single 8-bit sRGB channel.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= LINEAR_KNEE {
        c / LINEAR_DIVISOR
    } else {
        ((c + GAMMA_OFFSET) / GAMMA_SCALE).powf(GAMMA_EXPONENT)
    }
}

/// Linearized channels as `[R, G, B]`, each in [0, 1].
pub fn linearized(color: ColorValue) -> [f64; 3] {
    let (r, g, b) = color.channels();
    [linearize(r), linearize(g), linearize(b)]
}

/// WCAG 2.1 relative luminance of a color, in [0, 1].
///
/// `#000000` maps to exactly 0.0 and `#FFFFFF` to exactly 1.0.
pub fn relative_luminance(color: ColorValue) -> f64 {
    let [r, g, b] = linearized(color);
    COEF_R * r + COEF_G * g + COEF_B * b
}

/// WCAG contrast ratio between two colors, in [1, 21].
///
/// Symmetric in its arguments: the lighter color contributes the numerator
/// regardless of which is foreground.
///
/// # Example
///
/// ```
/// use contrast_check::color::ColorValue;
/// use contrast_check::wcag::contrast_ratio;
///
/// let black = ColorValue::from_channels(0, 0, 0);
/// let white = ColorValue::from_channels(255, 255, 255);
///
/// let ratio = contrast_ratio(black, white);
/// assert!((ratio - 21.0).abs() < 1e-6);
/// assert_eq!(ratio, contrast_ratio(white, black));
/// ```
pub fn contrast_ratio(a: ColorValue, b: ColorValue) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + FLARE) / (darker + FLARE)
}

/// Text class determining which AA threshold applies.
///
/// `Large` also covers graphical objects and UI components, which share the
/// 3:1 requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextClass {
    /// Body text below the large-text size cutoff
    #[default]
    Normal,
    /// Large/bold text and UI components/graphics
    Large,
}

impl TextClass {
    /// Minimum AA contrast ratio for this class.
    pub fn threshold(self) -> f64 {
        match self {
            Self::Normal => 4.5,
            Self::Large => 3.0,
        }
    }
}

impl std::fmt::Display for TextClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Large => write!(f, "large"),
        }
    }
}

/// Pass/fail outcome of an AA classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Classify a contrast ratio against the AA threshold for a text class.
///
/// Total over all finite ratios; meeting the threshold exactly passes.
pub fn classify(ratio: f64, class: TextClass) -> Verdict {
    if ratio >= class.threshold() {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}
