//! # Error Types
//!
//! Error types for vector operations. Almost every operation is total; the
//! exceptions are normalization of a vector without a usable length and
//! construction of an invalid tolerance configuration.
//!
//! ## Error Policy
//!
//! - NO silent clamping or NaN propagation from `normalize`
//! - Errors carry the offending values for debugging

use ::config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during vector operations.
///
/// ## Example
///
/// ```rust
/// use vector3::{Vector3, VectorError};
///
/// match Vector3::zero().normalize() {
///     Ok(unit) => println!("unit vector {unit}"),
///     Err(VectorError::DegenerateVector { x, y, z }) => {
///         eprintln!("cannot normalize ({x}, {y}, {z})")
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// The vector has zero, non-finite, or unrepresentably small length and
    /// cannot be scaled to unit length.
    #[error("cannot normalize degenerate vector ({x}, {y}, {z})")]
    DegenerateVector {
        /// X coordinate of the rejected vector
        x: f64,
        /// Y coordinate of the rejected vector
        y: f64,
        /// Z coordinate of the rejected vector
        z: f64,
    },

    /// A tolerance configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for vector operations.
///
/// ## Example
///
/// ```rust
/// use vector3::error::VectorResult;
/// use vector3::Vector3;
///
/// fn unit_direction(from: Vector3, to: Vector3) -> VectorResult<Vector3> {
///     (to - from).normalize()
/// }
/// # assert!(unit_direction(Vector3::zero(), Vector3::unit_x()).is_ok());
/// ```
pub type VectorResult<T> = Result<T, VectorError>;

// =============================================================================
// TESTS
// =============================================================================
