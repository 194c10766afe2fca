//! Brightness to character mapping.

use super::charset::CharSet;

/// Ramp index for a mean brightness on a ramp of `levels` characters.
///
/// Each character covers an equal `255 / levels` slice of the brightness
/// range, so the standard 10-level ramp uses `floor(mean / 25.5)`. The
/// result is clamped to the last character. `levels` must be at least 1.
#[inline]
pub fn ramp_index(mean: f64, levels: usize) -> usize {
    let step = 255.0 / levels as f64;
    let idx = (mean / step).floor().max(0.0) as usize;
    idx.min(levels - 1)
}

/// Map a mean brightness to a character of `charset`.
#[inline]
pub fn map_to_char(mean: f64, charset: CharSet) -> char {
    charset.chars()[ramp_index(mean, charset.levels())]
}
