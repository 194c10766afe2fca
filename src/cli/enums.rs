//! CLI enum types for character set and transform options.

use clap::ValueEnum;

use crate::ascii;

/// ASCII character set for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Standard,
    Blocks,
    Minimal,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
            CharacterSet::Minimal => ascii::CharSet::Minimal,
        }
    }
}

/// Transform selectable with `--only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransformName {
    Original,
    Binary,
    Negative,
    Logarithmic,
    Gamma,
    Solarize,
}

impl TransformName {
    /// Matches [`crate::transform::Transform::name`].
    pub fn as_str(&self) -> &'static str {
        match self {
            TransformName::Original => "original",
            TransformName::Binary => "binary",
            TransformName::Negative => "negative",
            TransformName::Logarithmic => "logarithmic",
            TransformName::Gamma => "gamma",
            TransformName::Solarize => "solarize",
        }
    }
}
