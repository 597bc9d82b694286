//! Tests covering vector configuration behavior.

use super::*;
use crate::error::VectorError;
use ::config::constants::ConfigError;

#[test]
fn default_matches_constants() {
    let cfg = VectorConfig::default();
    assert_eq!(cfg.tolerance, EQUALITY_TOLERANCE);
}

#[test]
fn builder_validates_input() {
    let err = VectorConfig::new(0.0).unwrap_err();
    assert_eq!(
        err,
        VectorError::InvalidConfig(ConfigError::InvalidTolerance(0.0))
    );
}

#[test]
fn converts_from_global_config() {
    let global = GlobalConfig::new(1.0e-4).unwrap();
    assert_eq!(VectorConfig::from(global).tolerance, 1.0e-4);
    assert_eq!(VectorConfig::from(GlobalConfig::default()), VectorConfig::default());
}
