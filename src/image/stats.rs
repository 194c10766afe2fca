//! Summary statistics for brightness grids.

use std::fmt;

/// Minimum, maximum and mean brightness of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStats {
    pub min: u8,
    pub max: u8,
    pub mean: f64,
}

impl GridStats {
    /// `pixels` is never empty: grids are at least 1x1.
    pub(crate) fn from_pixels(pixels: &[u8]) -> Self {
        let mut min = u8::MAX;
        let mut max = u8::MIN;
        let mut sum = 0u64;
        for &v in pixels {
            min = min.min(v);
            max = max.max(v);
            sum += u64::from(v);
        }

        Self {
            min,
            max,
            mean: sum as f64 / pixels.len() as f64,
        }
    }
}

impl fmt::Display for GridStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Min: {:3} | Max: {:3} | Mean: {:5.1}",
            self.min, self.max, self.mean
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_of_mixed_pixels() {
        let stats = GridStats::from_pixels(&[0, 50, 100, 250]);
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 250);
        assert!((stats.mean - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_display_format() {
        let stats = GridStats {
            min: 0,
            max: 200,
            mean: 33.21,
        };
        assert_eq!(stats.to_string(), "Min:   0 | Max: 200 | Mean:  33.2");
    }
}
