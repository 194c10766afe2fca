//! The brightness grid value type.

use crate::error::{ImageError, Result};

use super::stats::GridStats;

/// A grayscale image: `height` rows of `width` brightness values in [0, 255].
///
/// Pixels are stored row-major. The shape is fixed at construction and both
/// dimensions are at least 1. Transforms never modify a grid in place; they
/// build a new one with the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrightnessGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BrightnessGrid {
    /// Create an all-black grid of the given size.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, 0)
    }

    /// Create a grid where every pixel has the same value.
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Wrap existing row-major pixel data.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if a dimension is zero, `width * height`
    /// overflows, or `data.len()` is not `width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let len = pixel_count(width, height)?;
        if data.len() != len {
            return Err(ImageError::InvalidParameter(format!(
                "pixel data has {} values, expected {}x{} = {}",
                data.len(),
                width,
                height,
                len
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid from a list of equally long rows.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|r| r.len() != width) {
            return Err(ImageError::InvalidParameter(format!(
                "row {} has {} values, expected {}",
                bad,
                rows[bad].len(),
                width
            )));
        }
        Self::from_vec(width, height, rows.concat())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`, matching the row-major layout.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; grids have at least one pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pixel at column `x`, row `y`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    /// One row of pixels.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width)
    }

    /// Apply `f` to every pixel and return the result as a new grid.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(u8) -> u8,
    {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Minimum, maximum and mean brightness.
    pub fn stats(&self) -> GridStats {
        GridStats::from_pixels(&self.data)
    }

    /// Largest pixel value.
    pub fn max(&self) -> u8 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Set every pixel in rows `rows` and columns `cols` to `value`.
    ///
    /// Ranges are half-open and silently clipped to the grid.
    pub(crate) fn fill_rect(
        &mut self,
        rows: std::ops::Range<usize>,
        cols: std::ops::Range<usize>,
        value: u8,
    ) {
        let col_end = cols.end.min(self.width);
        for y in rows.start..rows.end.min(self.height) {
            for x in cols.start..col_end {
                self.data[y * self.width + x] = value;
            }
        }
    }
}

/// Number of pixels in a `width` x `height` grid, rejecting empty or
/// unaddressable sizes.
fn pixel_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidParameter(format!(
            "grid dimensions must be at least 1x1, got {}x{}",
            width, height
        )));
    }
    width.checked_mul(height).ok_or_else(|| {
        ImageError::InvalidParameter(format!(
            "grid dimensions {}x{} are too large",
            width, height
        ))
    })
}
