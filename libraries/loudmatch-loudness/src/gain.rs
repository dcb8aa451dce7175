//! Gain between two loudness levels

use crate::error::{LoudnessError, Result};
use std::fmt;

/// Convert a dB value to an amplitude ratio
pub fn db_to_ratio(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// A finite gain in dB
///
/// The linear multiplier is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gain {
    db: f64,
}

impl Gain {
    /// Create a gain from a dB value
    pub fn from_db(db: f64) -> Result<Self> {
        if !db.is_finite() {
            return Err(LoudnessError::NonFinite(db));
        }
        Ok(Self { db })
    }

    /// Gain that moves a signal at `target` level to `reference` level
    ///
    /// Both levels must be in the same unit (dBFS or LUFS).
    pub fn between(reference: f64, target: f64) -> Result<Self> {
        if !reference.is_finite() {
            return Err(LoudnessError::NonFinite(reference));
        }
        if !target.is_finite() {
            return Err(LoudnessError::NonFinite(target));
        }
        Self::from_db(reference - target)
    }

    /// Gain in dB
    pub fn db(&self) -> f64 {
        self.db
    }

    /// Linear amplitude multiplier
    pub fn linear(&self) -> f64 {
        db_to_ratio(self.db)
    }
}

impl fmt::Display for Gain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.2} dB (x{:.4})", self.db, self.linear())
    }
}
