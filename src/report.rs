//! Console report: ASCII art, statistics and histograms for each transform.
//!
//! The report computes every transformed grid once in [`Report::build`] and
//! then writes sections to any [`std::io::Write`], so tests can capture the
//! output in a `Vec<u8>`.

use std::io::{self, Write};

use crate::ascii::{to_ascii_with, CharSet};
use crate::config::Settings;
use crate::error::ImageError;
use crate::histogram::histogram;
use crate::image::{create_image, BrightnessGrid};
use crate::transform::Transform;

/// Width of the `=` banner rules.
const BANNER_WIDTH: usize = 60;

/// Width of the `-` rule under each transform title.
const SECTION_RULE_WIDTH: usize = 40;

/// Errors that can occur while producing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Image(#[from] ImageError),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Which parts of the report to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sections {
    /// Everything: transformations, histograms and descriptions
    All,
    /// ASCII art, statistics and legend
    Ascii,
    /// Histograms only
    Histograms,
}

/// A test image together with all of its transformed versions.
pub struct Report<'a> {
    settings: &'a Settings,
    results: Vec<(Transform, BrightnessGrid)>,
}

impl<'a> Report<'a> {
    /// Create the test image and apply every configured transform.
    pub fn build(settings: &'a Settings) -> Result<Self, ImageError> {
        settings.validate()?;
        let original = create_image(settings.image_width, settings.image_height)?;

        let mut results = Vec::new();
        for transform in settings.transforms() {
            log::debug!("Applying {}", transform.name());
            let grid = transform.apply(&original)?;
            results.push((transform, grid));
        }

        Ok(Self { settings, results })
    }

    /// Transformed grids in display order.
    pub fn results(&self) -> &[(Transform, BrightnessGrid)] {
        &self.results
    }

    /// Write the requested sections.
    pub fn write<W: Write>(&self, out: &mut W, sections: Sections) -> Result<(), ReportError> {
        match sections {
            Sections::All => {
                self.write_transformations(out)?;
                self.write_histograms(out)?;
                self.write_descriptions(out)?;
            }
            Sections::Ascii => self.write_transformations(out)?,
            Sections::Histograms => self.write_histograms(out)?,
        }
        Ok(())
    }

    /// ASCII art and statistics for each transform, then the character legend.
    pub fn write_transformations<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        write_banner(out, "IMAGE TRANSFORMATION COMPARISON")?;

        for (transform, grid) in &self.results {
            writeln!(out)?;
            writeln!(out, "{}:", transform.title())?;
            writeln!(out, "{}", "-".repeat(SECTION_RULE_WIDTH))?;

            let art = to_ascii_with(
                grid,
                self.settings.ascii_width,
                self.settings.ascii_height,
                self.settings.charset,
            )?;
            for row in &art {
                writeln!(out, "{}", row)?;
            }

            writeln!(out, "Stats: {}", grid.stats())?;
        }

        writeln!(out)?;
        write_legend(out, self.settings.charset)?;
        Ok(())
    }

    /// One histogram per transform.
    pub fn write_histograms<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        writeln!(out)?;
        write_banner(out, "BRIGHTNESS HISTOGRAMS")?;

        for (transform, grid) in &self.results {
            let hist = histogram(grid, self.settings.bins, (0, 255))?;
            writeln!(out)?;
            writeln!(out, "HISTOGRAM: {}", transform.name().to_uppercase())?;
            let rule_width = self.settings.bar_width.saturating_add(10);
            writeln!(out, "{}", "-".repeat(rule_width))?;
            for line in hist.render(self.settings.bar_width) {
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }

    /// Numbered one-line description of each transform.
    pub fn write_descriptions<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        writeln!(out)?;
        write_banner(out, "TRANSFORM DESCRIPTIONS:")?;

        let described = self
            .results
            .iter()
            .map(|(t, _)| t)
            .filter(|t| **t != Transform::Original);
        for (i, transform) in described.enumerate() {
            writeln!(out, "{}. {}", i + 1, transform.description())?;
        }
        writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
        Ok(())
    }
}

fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))
}

/// Explain which brightness band each ramp character stands for.
fn write_legend<W: Write>(out: &mut W, charset: CharSet) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(out, "CHARACTER LEGEND (dark to bright):")?;

    let levels = charset.levels();
    for (i, ch) in charset.chars().iter().enumerate() {
        let lower = i * 100 / levels;
        let upper = (i + 1) * 100 / levels;
        writeln!(out, "  '{}'  {:>3}% - {:>3}%", ch, lower, upper)?;
    }
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(settings: &Settings, sections: Sections) -> String {
        let report = Report::build(settings).unwrap();
        let mut out = Vec::new();
        report.write(&mut out, sections).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_build_applies_all_transforms() {
        let settings = Settings::default();
        let report = Report::build(&settings).unwrap();
        assert_eq!(report.results().len(), 6);
        for (_, grid) in report.results() {
            assert_eq!(grid.shape(), (20, 40));
        }
    }

    #[test]
    fn test_build_rejects_invalid_settings() {
        let settings = Settings {
            gamma: -1.0,
            ..Settings::default()
        };
        assert!(Report::build(&settings).is_err());
    }

    #[test]
    fn test_build_rejects_oversized_histogram() {
        let settings = Settings {
            bins: 100_000_000_000,
            ..Settings::default()
        };
        assert!(matches!(
            Report::build(&settings),
            Err(ImageError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_ascii_section_contents() {
        let text = render(&Settings::default(), Sections::Ascii);
        assert!(text.starts_with(&"=".repeat(60)));
        assert!(text.contains("ORIGINAL:\n"));
        assert!(text.contains("BINARY (T=128):\n"));
        assert!(text.contains("GAMMA CORRECTION (gamma=2.2):\n"));
        assert!(text.contains("Stats: Min:   0 | Max: 200 | Mean:  33.2"));
        assert!(text.contains("CHARACTER LEGEND (dark to bright):"));
        assert!(text.contains("  '@'   90% - 100%"));
        assert!(!text.contains("HISTOGRAM:"));
    }

    #[test]
    fn test_histogram_section_contents() {
        let text = render(&Settings::default(), Sections::Histograms);
        assert!(text.contains("HISTOGRAM: ORIGINAL\n"));
        assert!(text.contains("HISTOGRAM: SOLARIZE\n"));
        assert!(text.contains(&"-".repeat(60)));
        // Background dominates the original image
        assert!(text.contains(&format!("  0.0- 25.5: {} (556 pixels)", "█".repeat(50))));
        assert!(!text.contains("ORIGINAL:\n"));
    }

    #[test]
    fn test_full_report_descriptions() {
        let text = render(&Settings::default(), Sections::All);
        assert!(text.contains("1. Binarization"));
        assert!(text.contains("5. Solarization"));
        assert!(!text.contains("Original - the synthetic"));
    }

    #[test]
    fn test_only_restricts_output() {
        let settings = Settings {
            only: Some("negative".to_string()),
            ..Settings::default()
        };
        let text = render(&settings, Sections::All);
        assert!(text.contains("NEGATIVE:\n"));
        assert!(!text.contains("ORIGINAL:\n"));
        assert!(text.contains("1. Negative"));
    }
}
