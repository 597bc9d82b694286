//! Core value types.
//!
//! Currently a single vector type, [`Vector3`].

pub mod vec3;

pub use vec3::Vector3;
