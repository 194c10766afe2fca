//! Configuration file handling for intensity-lab.
//!
//! Loads configuration from `<config dir>/intensity-lab/config.toml` or a
//! custom path, and resolves it together with built-in defaults into
//! [`Settings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::CharSet;
use crate::error::{ImageError, Result as ImageResult};
use crate::histogram::{DEFAULT_BAR_WIDTH, DEFAULT_BINS, MAX_BAR_WIDTH, MAX_BINS};
use crate::image::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::transform::{Transform, DEFAULT_GAMMA, DEFAULT_THRESHOLD};

/// Configuration file structure.
/// Every key is optional; missing keys fall back to the built-in defaults.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub ascii: AsciiConfig,
    #[serde(default)]
    pub transforms: TransformConfig,
    #[serde(default)]
    pub histogram: HistogramConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ImageConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AsciiConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub charset: Option<String>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TransformConfig {
    pub threshold: Option<u8>,
    pub gamma: Option<f64>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HistogramConfig {
    pub bins: Option<usize>,
    pub bar_width: Option<usize>,
}

/// Contents written by `intensity-lab config init`.
pub const DEFAULT_CONFIG: &str = r#"# intensity-lab configuration

[image]
# Size of the synthetic test image in pixels
width = 40
height = 20

[ascii]
# Size of the rendered ASCII art in characters
width = 40
height = 20
# Character set: standard, blocks, minimal
charset = "standard"

[transforms]
# Threshold for binarization and solarization (0-255)
threshold = 128
# Gamma value for gamma correction (> 0)
gamma = 2.2

[histogram]
# Number of bins over 0-255
bins = 10
# Length of the longest bar in characters
bar_width = 50
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            log::debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            Self::parse(&content).map_err(|e| match e {
                ConfigError::ParseError { source, .. } => ConfigError::ParseError {
                    path: path.clone(),
                    source,
                },
                other => other,
            })
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::new(),
            source: e,
        })
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub image_width: usize,
    pub image_height: usize,
    pub ascii_width: usize,
    pub ascii_height: usize,
    pub charset: CharSet,
    pub threshold: u8,
    pub gamma: f64,
    pub bins: usize,
    pub bar_width: usize,
    /// Restrict the report to the transform with this name.
    pub only: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            image_width: DEFAULT_WIDTH,
            image_height: DEFAULT_HEIGHT,
            ascii_width: DEFAULT_WIDTH,
            ascii_height: DEFAULT_HEIGHT,
            charset: CharSet::Standard,
            threshold: DEFAULT_THRESHOLD,
            gamma: DEFAULT_GAMMA,
            bins: DEFAULT_BINS,
            bar_width: DEFAULT_BAR_WIDTH,
            only: None,
        }
    }
}

impl Settings {
    /// Overlay values present in the config file.
    pub fn apply_config(&mut self, config: &Config) -> Result<(), ConfigError> {
        if let Some(w) = config.image.width {
            self.image_width = w;
        }
        if let Some(h) = config.image.height {
            self.image_height = h;
        }
        if let Some(w) = config.ascii.width {
            self.ascii_width = w;
        }
        if let Some(h) = config.ascii.height {
            self.ascii_height = h;
        }
        if let Some(name) = &config.ascii.charset {
            self.charset = CharSet::from_name(name).ok_or_else(|| ConfigError::InvalidValue {
                key: "ascii.charset".to_string(),
                value: name.clone(),
            })?;
        }
        if let Some(t) = config.transforms.threshold {
            self.threshold = t;
        }
        if let Some(g) = config.transforms.gamma {
            self.gamma = g;
        }
        if let Some(b) = config.histogram.bins {
            self.bins = b;
        }
        if let Some(w) = config.histogram.bar_width {
            self.bar_width = w;
        }
        Ok(())
    }

    /// Check that every value is usable before anything is rendered.
    pub fn validate(&self) -> ImageResult<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(ImageError::InvalidParameter(format!(
                "image size must be at least 1x1, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self.ascii_width == 0 || self.ascii_height == 0 {
            return Err(ImageError::InvalidParameter(format!(
                "ASCII size must be at least 1x1, got {}x{}",
                self.ascii_width, self.ascii_height
            )));
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(ImageError::InvalidParameter(format!(
                "gamma must be a positive finite number, got {}",
                self.gamma
            )));
        }
        if self.bins == 0 || self.bins > MAX_BINS {
            return Err(ImageError::InvalidParameter(format!(
                "histogram bins must be between 1 and {}, got {}",
                MAX_BINS, self.bins
            )));
        }
        if self.bar_width > MAX_BAR_WIDTH {
            return Err(ImageError::InvalidParameter(format!(
                "bar width must be at most {}, got {}",
                MAX_BAR_WIDTH, self.bar_width
            )));
        }
        if let Some(name) = &self.only {
            if !self.all_transforms().iter().any(|t| t.name() == name) {
                return Err(ImageError::InvalidParameter(format!(
                    "unknown transform '{}'",
                    name
                )));
            }
        }
        Ok(())
    }

    /// The transforms to run, honoring `only`.
    pub fn transforms(&self) -> Vec<Transform> {
        let all = self.all_transforms();
        match &self.only {
            Some(name) => all.into_iter().filter(|t| t.name() == name).collect(),
            None => all,
        }
    }

    fn all_transforms(&self) -> Vec<Transform> {
        Transform::standard_set(self.threshold, self.gamma)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        key: String,
        value: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{}' for config key '{}'", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("intensity-lab").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/intensity-lab/config.toml")
        })
}
