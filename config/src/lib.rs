//! # Config Crate
//!
//! Centralized numeric constants for the `vector3` geometry primitive.
//! Tolerances live here so downstream crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::EQUALITY_TOLERANCE;
//!
//! // Two points are "equal" when their squared distance is below the tolerance.
//! let squared_distance: f64 = 1e-20;
//! assert!(squared_distance < EQUALITY_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Pure constants and a small validated snapshot type

pub mod constants;
