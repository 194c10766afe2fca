//! Brightness histograms and their ASCII bar rendering.

use crate::error::{ImageError, Result};
use crate::image::BrightnessGrid;

/// Default number of bins.
pub const DEFAULT_BINS: usize = 10;

/// Default value range, covering every 8-bit brightness.
pub const DEFAULT_RANGE: (u8, u8) = (0, 255);

/// Largest accepted bin count: one bin per 8-bit brightness value.
pub const MAX_BINS: usize = 256;

/// Default maximum bar length in characters.
pub const DEFAULT_BAR_WIDTH: usize = 50;

/// Largest accepted bar length.
pub const MAX_BAR_WIDTH: usize = 1000;

/// Character used to draw bars.
pub const BAR_CHAR: char = '█';

/// One histogram bucket: values in `[lower, upper)`, or `[lower, upper]` for the last bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Pixel counts over equal-width bins.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<Bin>,
}

impl Histogram {
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Count of each bin, in order.
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|b| b.count).collect()
    }

    /// Sum of all bin counts.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Render one line per bin: range label, bar, and count.
    ///
    /// Bars are scaled so the fullest bin is `bar_width` characters long.
    ///
    /// # Example
    /// ```
    /// use intensity_lab::histogram::histogram;
    /// use intensity_lab::image::BrightnessGrid;
    ///
    /// let img = BrightnessGrid::filled(2, 2, 0).unwrap();
    /// let lines = histogram(&img, 2, (0, 255)).unwrap().render(4);
    /// assert_eq!(lines[0], "  0.0-127.5: ████ (4 pixels)");
    /// assert_eq!(lines[1], "127.5-255.0:  (0 pixels)");
    /// ```
    pub fn render(&self, bar_width: usize) -> Vec<String> {
        let max_count = self.max_count();
        self.bins
            .iter()
            .map(|bin| {
                let bar_length = if max_count > 0 {
                    (bin.count as f64 / max_count as f64 * bar_width as f64).round() as usize
                } else {
                    0
                };
                let bar: String = std::iter::repeat(BAR_CHAR).take(bar_length).collect();
                format!(
                    "{:5.1}-{:5.1}: {} ({} pixels)",
                    bin.lower, bin.upper, bar, bin.count
                )
            })
            .collect()
    }
}

/// Count pixels of `img` into `bins` equal-width bins over `range`.
///
/// Bin `i` covers `[lo + i*w, lo + (i+1)*w)` with `w = (hi - lo) / bins`;
/// the last bin also includes `hi`. Pixels outside `range` are counted in
/// the first or last bin, so the counts always sum to the pixel count.
///
/// # Errors
/// - `InvalidParameter` if `bins` is zero or above [`MAX_BINS`], or `lo > hi`
/// - `DegenerateInput` if `lo == hi`
pub fn histogram(img: &BrightnessGrid, bins: usize, range: (u8, u8)) -> Result<Histogram> {
    let (lo, hi) = range;
    if bins == 0 || bins > MAX_BINS {
        return Err(ImageError::InvalidParameter(format!(
            "histogram bins must be between 1 and {}, got {}",
            MAX_BINS, bins
        )));
    }
    if lo > hi {
        return Err(ImageError::InvalidParameter(format!(
            "histogram range ({}, {}) is reversed",
            lo, hi
        )));
    }
    if lo == hi {
        return Err(ImageError::DegenerateInput(format!(
            "histogram range ({}, {}) is empty",
            lo, hi
        )));
    }

    let span = usize::from(hi - lo);
    let mut counts = vec![0usize; bins];
    let mut clamped = 0usize;

    for &v in img.pixels() {
        let idx = if v < lo {
            clamped += 1;
            0
        } else if v > hi {
            clamped += 1;
            bins - 1
        } else {
            // v >= lo + i*span/bins  <=>  (v - lo) * bins >= i * span
            (usize::from(v - lo) * bins / span).min(bins - 1)
        };
        counts[idx] += 1;
    }

    if clamped > 0 {
        log::debug!(
            "{} pixels outside histogram range ({}, {}) counted in the end bins",
            clamped,
            lo,
            hi
        );
    }

    let width = f64::from(hi - lo) / bins as f64;
    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            lower: f64::from(lo) + i as f64 * width,
            upper: f64::from(lo) + (i + 1) as f64 * width,
            count,
        })
        .collect();

    Ok(Histogram { bins })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_edges() {
        let img = BrightnessGrid::new(1, 1).unwrap();
        let hist = histogram(&img, DEFAULT_BINS, DEFAULT_RANGE).unwrap();
        let bins = hist.bins();
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0].lower, 0.0);
        assert_eq!(bins[0].upper, 25.5);
        assert_eq!(bins[9].lower, 229.5);
        assert_eq!(bins[9].upper, 255.0);
    }

    #[test]
    fn test_half_open_boundaries() {
        // 25 stays in bin 0, 26 crosses the 25.5 edge
        let img = BrightnessGrid::from_vec(4, 1, vec![25, 26, 51, 229]).unwrap();
        let hist = histogram(&img, 10, (0, 255)).unwrap();
        assert_eq!(hist.counts(), vec![1, 1, 1, 0, 0, 0, 0, 0, 1, 0]);
    }

    #[test]
    fn test_top_bin_is_closed() {
        let img = BrightnessGrid::from_vec(3, 1, vec![0, 0, 255]).unwrap();
        let hist = histogram(&img, 10, (0, 255)).unwrap();
        assert_eq!(hist.bins().len(), 10);
        assert_eq!(hist.bins()[9].count, 1);
        assert_eq!(hist.bins()[0].count, 2);
    }

    #[test]
    fn test_one_bin_per_value() {
        let img = BrightnessGrid::from_vec(3, 1, vec![0, 254, 255]).unwrap();
        let hist = histogram(&img, MAX_BINS, (0, 255)).unwrap();
        assert_eq!(hist.bins().len(), 256);
        assert_eq!(hist.bins()[0].count, 1);
        assert_eq!(hist.bins()[254].count, 1);
        assert_eq!(hist.bins()[255].count, 1);
        assert_eq!(hist.total(), 3);
    }

    #[test]
    fn test_values_outside_range_clamped() {
        let img = BrightnessGrid::from_vec(4, 1, vec![0, 10, 100, 255]).unwrap();
        let hist = histogram(&img, 2, (10, 100)).unwrap();
        assert_eq!(hist.counts(), vec![2, 2]);
        assert_eq!(hist.total(), 4);
    }

    #[test]
    fn test_invalid_configurations() {
        let img = BrightnessGrid::new(2, 2).unwrap();
        assert!(matches!(
            histogram(&img, 0, (0, 255)),
            Err(ImageError::InvalidParameter(_))
        ));
        assert!(matches!(
            histogram(&img, MAX_BINS + 1, (0, 255)),
            Err(ImageError::InvalidParameter(_))
        ));
        assert!(matches!(
            histogram(&img, 10, (200, 100)),
            Err(ImageError::InvalidParameter(_))
        ));
        assert!(matches!(
            histogram(&img, 10, (50, 50)),
            Err(ImageError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_render_scales_bars() {
        let img = BrightnessGrid::from_vec(4, 1, vec![0, 0, 0, 255]).unwrap();
        let lines = histogram(&img, 2, (0, 255)).unwrap().render(10);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("  0.0-127.5: {} (3 pixels)", "█".repeat(10)));
        // 1/3 * 10 = 3.33 rounds to 3
        assert_eq!(lines[1], format!("127.5-255.0: {} (1 pixels)", "█".repeat(3)));
    }

    #[test]
    fn test_render_rounds_half_up() {
        let img = BrightnessGrid::from_vec(3, 1, vec![0, 0, 255]).unwrap();
        let lines = histogram(&img, 2, (0, 255)).unwrap().render(5);
        // 1/2 * 5 = 2.5 rounds to 3
        assert!(lines[1].contains(&"█".repeat(3)));
        assert!(!lines[1].contains(&"█".repeat(4)));
    }
}
