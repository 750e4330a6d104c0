//! # U-Loading Core
//!
//! Core types for the U-Loading container loading engine.
//!
//! This crate provides the foundational types shared by the packing engine
//! and the command-line front end.
//!
//! ## Core Components
//!
//! - **Errors**: `Error` and the `Result` alias
//! - **Geometry**: integer vectors, the six axis-aligned `Orientation`s and
//!   orientation presets
//! - **Cuboids**: axis-aligned boxes with overlap and footprint queries
//! - **Configuration**: `Config` for the placement heuristic
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod cuboid;
pub mod error;
pub mod geometry;
pub mod solver;

// Re-exports
pub use cuboid::Cuboid;
pub use error::{Error, Result};
pub use geometry::{Orientation, OrientationConstraint, Vec3, Vector3};
pub use solver::Config;
