//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharacterSet, TransformName};
use crate::config::Settings;
use crate::report::Sections;

/// Apply intensity transforms to a synthetic image and render them as ASCII art
#[derive(Parser, Debug)]
#[command(name = "intensity-lab")]
#[command(version, about = "Intensity transforms rendered as ASCII art and histograms", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Test image width in pixels
    #[arg(long, global = true)]
    pub width: Option<usize>,

    /// Test image height in pixels
    #[arg(long, global = true)]
    pub height: Option<usize>,

    /// ASCII art width in characters
    #[arg(long, global = true)]
    pub ascii_width: Option<usize>,

    /// ASCII art height in characters
    #[arg(long, global = true)]
    pub ascii_height: Option<usize>,

    /// Threshold for binarization and solarization (0-255)
    #[arg(long, short, global = true)]
    pub threshold: Option<u8>,

    /// Gamma value for gamma correction
    #[arg(long, short, global = true)]
    pub gamma: Option<f64>,

    /// Number of histogram bins
    #[arg(long, global = true)]
    pub bins: Option<usize>,

    /// Length of the longest histogram bar
    #[arg(long, global = true)]
    pub bar_width: Option<usize>,

    /// ASCII character set
    #[arg(long, global = true)]
    pub charset: Option<CharacterSet>,

    /// Show only this transform
    #[arg(long, global = true)]
    pub only: Option<TransformName>,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Full report: ASCII art, histograms and descriptions (default)
    Report,
    /// ASCII art and statistics only
    Ascii,
    /// Histograms only
    Histogram,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show resolved settings
    Show,
    /// Create default config file
    Init,
}

impl Args {
    /// Report sections the subcommand asks for. `None` for `config`.
    pub fn sections(&self) -> Option<Sections> {
        match &self.command {
            None | Some(Command::Report) => Some(Sections::All),
            Some(Command::Ascii) => Some(Sections::Ascii),
            Some(Command::Histogram) => Some(Sections::Histograms),
            Some(Command::Config { .. }) => None,
        }
    }

    /// Overlay command-line values on `settings`. Flags win over the config file.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(w) = self.width {
            settings.image_width = w;
        }
        if let Some(h) = self.height {
            settings.image_height = h;
        }
        if let Some(w) = self.ascii_width {
            settings.ascii_width = w;
        }
        if let Some(h) = self.ascii_height {
            settings.ascii_height = h;
        }
        if let Some(t) = self.threshold {
            settings.threshold = t;
        }
        if let Some(g) = self.gamma {
            settings.gamma = g;
        }
        if let Some(b) = self.bins {
            settings.bins = b;
        }
        if let Some(w) = self.bar_width {
            settings.bar_width = w;
        }
        if let Some(c) = self.charset {
            settings.charset = c.into();
        }
        if let Some(name) = self.only {
            settings.only = Some(name.as_str().to_string());
        }
    }
}
