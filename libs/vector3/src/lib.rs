//! Immutable three-dimensional vector primitive for geometric code.
//!
//! This crate provides [`Vector3`], a `Copy` value type with the arithmetic and
//! geometric queries needed by ray-surface intersection math: products,
//! distances, normalization, perpendiculars, reflection, and tolerance-based
//! equality.

pub mod config;
pub mod core;
pub mod error;

pub use crate::config::VectorConfig;
pub use crate::core::Vector3;
pub use crate::error::{VectorError, VectorResult};
