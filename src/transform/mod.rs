//! Intensity transforms.
//!
//! The free functions in this module are the transform library proper.
//! [`Transform`] pairs each of them with its parameters so a caller can
//! run a fixed list of transforms and label the results.

mod point;

pub use point::{binary, gamma, logarithmic, negative, solarize};

use crate::error::Result;
use crate::image::BrightnessGrid;

/// Default threshold for binarization and solarization.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Default gamma value.
pub const DEFAULT_GAMMA: f64 = 2.2;

/// A transform together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Leaves the image unchanged
    Original,
    /// Black and white at a threshold
    Binary { threshold: u8 },
    /// Inverted brightness
    Negative,
    /// Logarithmic dynamic range compression
    Logarithmic,
    /// Power-law correction
    Gamma { gamma: f64 },
    /// Negative above a threshold only
    Solarize { threshold: u8 },
}

impl Transform {
    /// The six transforms shown by the report, in display order.
    pub fn standard_set(threshold: u8, gamma: f64) -> Vec<Transform> {
        vec![
            Transform::Original,
            Transform::Binary { threshold },
            Transform::Negative,
            Transform::Logarithmic,
            Transform::Gamma { gamma },
            Transform::Solarize { threshold },
        ]
    }

    /// Apply the transform to `img`, returning a new grid.
    ///
    /// # Errors
    /// Propagates parameter validation errors (currently only from gamma).
    pub fn apply(&self, img: &BrightnessGrid) -> Result<BrightnessGrid> {
        match *self {
            Transform::Original => Ok(img.clone()),
            Transform::Binary { threshold } => Ok(binary(img, threshold)),
            Transform::Negative => Ok(negative(img)),
            Transform::Logarithmic => Ok(logarithmic(img)),
            Transform::Gamma { gamma: g } => gamma(img, g),
            Transform::Solarize { threshold } => Ok(solarize(img, threshold)),
        }
    }

    /// Short lowercase identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Original => "original",
            Transform::Binary { .. } => "binary",
            Transform::Negative => "negative",
            Transform::Logarithmic => "logarithmic",
            Transform::Gamma { .. } => "gamma",
            Transform::Solarize { .. } => "solarize",
        }
    }

    /// Uppercase heading, including parameters where the transform has any.
    pub fn title(&self) -> String {
        match self {
            Transform::Original => "ORIGINAL".to_string(),
            Transform::Binary { threshold } => format!("BINARY (T={})", threshold),
            Transform::Negative => "NEGATIVE".to_string(),
            Transform::Logarithmic => "LOGARITHMIC".to_string(),
            Transform::Gamma { gamma } => format!("GAMMA CORRECTION (gamma={})", gamma),
            Transform::Solarize { threshold } => format!("SOLARIZATION (T={})", threshold),
        }
    }

    /// One-line explanation of what the transform does.
    pub fn description(&self) -> &'static str {
        match self {
            Transform::Original => "Original - the synthetic test image, unchanged",
            Transform::Binary { .. } => "Binarization - black and white split at a threshold",
            Transform::Negative => "Negative - inverts pixel brightness",
            Transform::Logarithmic => "Logarithmic - brings out detail in dark areas",
            Transform::Gamma { .. } => {
                "Gamma correction - adjusts brightness (gamma<1 darker, gamma>1 brighter)"
            }
            Transform::Solarize { .. } => "Solarization - partial inversion of bright pixels",
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
