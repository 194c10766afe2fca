//! Deterministic synthetic test image.
//!
//! The layout below is fixed: golden-output tests depend on these exact
//! coordinates. Rows and columns are half-open ranges and are clipped when
//! the requested image is smaller than the layout.

use std::ops::Range;

use crate::error::Result;

use super::BrightnessGrid;

/// Default image width in pixels.
pub const DEFAULT_WIDTH: usize = 40;

/// Default image height in pixels.
pub const DEFAULT_HEIGHT: usize = 20;

/// A rectangle filled with a single brightness value.
struct Region {
    rows: Range<usize>,
    cols: Range<usize>,
    value: u8,
}

const DARK: Region = Region {
    rows: 2..8,
    cols: 5..15,
    value: 50,
};

const MID: Region = Region {
    rows: 2..8,
    cols: 20..30,
    value: 128,
};

const BRIGHT: Region = Region {
    rows: 2..8,
    cols: 32..38,
    value: 200,
};

/// Horizontal gradient: column `i` is set to `i * 4`.
const GRADIENT_ROWS: Range<usize> = 12..16;
const GRADIENT_COLS: Range<usize> = 10..30;
const GRADIENT_STEP: u8 = 4;

/// Drawn last, so it overwrites the dark block and the gradient where they overlap.
const STRIPE: Region = Region {
    rows: 5..15,
    cols: 10..12,
    value: 150,
};

/// Build the test image of `height` rows by `width` columns.
///
/// The background is black, with a dark, a mid-gray and a bright block, a
/// horizontal gradient strip and a vertical stripe.
///
/// # Errors
/// Returns `InvalidParameter` if either dimension is zero or the pixel
/// count overflows `usize`.
///
/// # Example
/// ```
/// use intensity_lab::image::create_image;
/// let img = create_image(40, 20).unwrap();
/// assert_eq!(img.shape(), (20, 40));
/// assert_eq!(img.get(5, 2), 50);
/// ```
pub fn create_image(width: usize, height: usize) -> Result<BrightnessGrid> {
    let mut img = BrightnessGrid::new(width, height)?;

    for region in [&DARK, &MID, &BRIGHT] {
        img.fill_rect(region.rows.clone(), region.cols.clone(), region.value);
    }

    for i in GRADIENT_COLS {
        // i < 30, so i * 4 stays below 255
        let value = i as u8 * GRADIENT_STEP;
        img.fill_rect(GRADIENT_ROWS, i..i + 1, value);
    }

    img.fill_rect(STRIPE.rows.clone(), STRIPE.cols.clone(), STRIPE.value);

    Ok(img)
}
