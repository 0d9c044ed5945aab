//! Percentage value object (0-100 scale), used for diagnosis confidence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Fifty percent, the fixed confidence of an extreme-case override.
    pub const HALF: Self = Self(50);

    /// Converts a fraction in [0, 1] to the nearest whole percentage.
    ///
    /// Rounds half away from zero. Values outside [0, 1] are clamped and
    /// NaN maps to zero.
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self::ZERO;
        }
        let rounded = (fraction.clamp(0.0, 1.0) * 100.0).round();
        Self(rounded as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
