//! Brightness grids and the synthetic test image.
//!
//! [`BrightnessGrid`] is the value type every transform and renderer works
//! on. [`create_image`] builds the fixed test pattern used by the report and
//! the golden-output tests.

mod grid;
mod source;
mod stats;

pub use grid::BrightnessGrid;
pub use source::{create_image, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use stats::GridStats;
