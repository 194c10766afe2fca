//! intensity-lab library crate.
//!
//! Synthesizes a test brightness image, applies point-wise intensity
//! transforms and renders the results as ASCII art and ASCII histograms.
//!
//! ```
//! use intensity_lab::{binary, create_image, to_ascii};
//!
//! let img = create_image(40, 20).unwrap();
//! let art = to_ascii(&binary(&img, 128), 40, 20).unwrap();
//! assert_eq!(art.height(), 20);
//! ```

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod histogram;
pub mod image;
pub mod report;
pub mod transform;

pub use ascii::{to_ascii, AsciiGrid};
pub use error::{ImageError, Result};
pub use histogram::{histogram, Bin, Histogram};
pub use image::{create_image, BrightnessGrid};
pub use transform::{binary, gamma, logarithmic, negative, solarize, Transform};
