//! ASCII renderer for brightness grids.
//!
//! Rendering is a two-step pipeline:
//!
//! 1. **Downsampling** - average integer-sized pixel blocks down to the
//!    character grid
//! 2. **Character mapping** - pick a ramp character for each block mean
//!
//! # Character Sets
//!
//! [`to_ascii`] always uses the 10-level standard ramp `" .:-=+*#%@"`.
//! [`to_ascii_with`] accepts any [`CharSet`].

mod charset;
mod downsample;
mod mapping;

use std::fmt;

use crate::error::{ImageError, Result};
use crate::image::BrightnessGrid;

pub use charset::{CharSet, BLOCKS_CHARSET, MINIMAL_CHARSET, STANDARD_CHARSET};
pub use downsample::{block_size, downsample};
pub use mapping::{map_to_char, ramp_index};

/// Rendered ASCII art, one string per text row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsciiGrid {
    rows: Vec<String>,
}

impl AsciiGrid {
    /// Text rows, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of text rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length in characters of the widest row.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AsciiGrid {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Render `img` as ASCII art of at most `width` x `height` characters
/// using the standard ramp.
///
/// # Errors
/// Returns `InvalidParameter` if `width` or `height` is zero.
///
/// # Example
/// ```
/// use intensity_lab::ascii::to_ascii;
/// use intensity_lab::image::BrightnessGrid;
///
/// let img = BrightnessGrid::filled(4, 2, 255).unwrap();
/// let art = to_ascii(&img, 4, 2).unwrap();
/// assert_eq!(art.rows(), &["@@@@", "@@@@"]);
/// ```
pub fn to_ascii(img: &BrightnessGrid, width: usize, height: usize) -> Result<AsciiGrid> {
    to_ascii_with(img, width, height, CharSet::Standard)
}

/// Render `img` as ASCII art with the given character set.
///
/// See [`downsample`] for how pixels are grouped into characters.
pub fn to_ascii_with(
    img: &BrightnessGrid,
    width: usize,
    height: usize,
    charset: CharSet,
) -> Result<AsciiGrid> {
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidParameter(format!(
            "ASCII target size must be at least 1x1, got {}x{}",
            width, height
        )));
    }

    let rows = downsample(img, width, height)
        .into_iter()
        .map(|means| {
            means
                .into_iter()
                .map(|m| map_to_char(m, charset))
                .collect::<String>()
        })
        .collect();

    Ok(AsciiGrid { rows })
}
