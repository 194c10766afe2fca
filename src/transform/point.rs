//! Point-wise intensity transforms.
//!
//! Every function takes a grid by reference and returns a new grid of the
//! same shape. Numeric transforms compute in `f64`, round half away from
//! zero and then clip to [0, 255].

use crate::error::{ImageError, Result};
use crate::image::BrightnessGrid;

/// Round then clip a floating-point intensity to a pixel value.
#[inline]
fn to_pixel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Threshold to pure black and white: 255 where `v > threshold`, else 0.
pub fn binary(img: &BrightnessGrid, threshold: u8) -> BrightnessGrid {
    img.map(|v| if v > threshold { 255 } else { 0 })
}

/// Invert brightness: `255 - v`.
pub fn negative(img: &BrightnessGrid) -> BrightnessGrid {
    img.map(|v| 255 - v)
}

/// Logarithmic mapping `c * ln(1 + v)` with `c = 255 / ln(1 + max)`.
///
/// Expands dark tones and compresses bright ones. The brightest input pixel
/// always maps to 255. An all-black image has no scale and stays black.
pub fn logarithmic(img: &BrightnessGrid) -> BrightnessGrid {
    let max = img.max();
    if max == 0 {
        log::debug!("logarithmic transform on an all-zero image, returning zeros");
        return img.map(|_| 0);
    }

    let c = 255.0 / (1.0 + f64::from(max)).ln();
    img.map(|v| to_pixel(c * (1.0 + f64::from(v)).ln()))
}

/// Gamma correction `255 * (v / 255)^(1 / gamma_value)`.
///
/// `gamma_value > 1` brightens, `gamma_value < 1` darkens, `1` is identity.
///
/// # Errors
/// Returns `InvalidParameter` unless `gamma_value` is finite and positive.
pub fn gamma(img: &BrightnessGrid, gamma_value: f64) -> Result<BrightnessGrid> {
    if !gamma_value.is_finite() || gamma_value <= 0.0 {
        return Err(ImageError::InvalidParameter(format!(
            "gamma must be a positive finite number, got {}",
            gamma_value
        )));
    }

    let exponent = 1.0 / gamma_value;
    // 256 possible inputs, so compute each once
    let mut lut = [0u8; 256];
    for (v, slot) in lut.iter_mut().enumerate() {
        *slot = to_pixel(255.0 * (v as f64 / 255.0).powf(exponent));
    }
    Ok(img.map(|v| lut[v as usize]))
}

/// Partial negative: `255 - v` where `v > threshold`, unchanged elsewhere.
pub fn solarize(img: &BrightnessGrid, threshold: u8) -> BrightnessGrid {
    img.map(|v| if v > threshold { 255 - v } else { v })
}
