//! Vector-level configuration helpers building on the shared `config` crate.
//!
//! Keeps equality tolerances out of the arithmetic code so callers can swap
//! in a looser or tighter threshold without touching literals.

use ::config::constants::{GlobalConfig, EQUALITY_TOLERANCE};

use crate::error::VectorResult;

/// Tolerance configuration for approximate vector comparison.
///
/// # Examples
/// ```
/// use vector3::config::VectorConfig;
/// let cfg = VectorConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorConfig {
    /// Squared-distance threshold below which two vectors are equal.
    pub tolerance: f64,
}

impl VectorConfig {
    /// Creates a new configuration from an explicit tolerance.
    ///
    /// # Examples
    /// ```
    /// use vector3::config::VectorConfig;
    /// let cfg = VectorConfig::new(1.0e-8).unwrap();
    /// assert_eq!(cfg.tolerance, 1.0e-8);
    /// assert!(VectorConfig::new(0.0).is_err());
    /// ```
    pub fn new(tolerance: f64) -> VectorResult<Self> {
        let global = GlobalConfig::new(tolerance)
            .inspect_err(|err| log::debug!("rejected vector configuration: {err}"))?;
        Ok(Self {
            tolerance: global.tolerance,
        })
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            tolerance: EQUALITY_TOLERANCE,
        }
    }
}

impl From<GlobalConfig> for VectorConfig {
    fn from(global: GlobalConfig) -> Self {
        Self {
            tolerance: global.tolerance,
        }
    }
}

#[cfg(test)]
mod tests;
