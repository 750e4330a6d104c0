//! # U-Loading
//!
//! Three-dimensional container loading engine.
//!
//! Boxes with sizes, weights and allowed rotations are assigned a position
//! and orientation inside container instances drawn from a limited stock,
//! using a greedy extreme-point heuristic.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use u_loading::{BoxType, ContainerType, Input, ItemSpec, Packer, Config};
//!
//! let input = Input::builder()
//!     .box_type(BoxType::new("crate", 60, 40, 30))
//!     .container_type(ContainerType::new("20ft", 590, 235, 239).with_payload(28_000.0))
//!     .item(ItemSpec::new("b1", "crate").with_weight(12.5))
//!     .build()?;
//!
//! let output = Packer::new(Config::default().with_parallel(true)).pack(input)?;
//! println!("{} containers used", output.containers.len());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for orientations and configuration

/// Core types: errors, geometry and configuration.
pub use u_loading_core as core;

/// Placement engine, constraints and container selection.
pub use u_loading_packing as packing;

// Re-export commonly used types at root level
pub use u_loading_packing::{
    run, BoxItem, BoxType, BoxTypeCatalog, BoxTypeKey, Config, ConstraintChecker, ContainerType,
    Cuboid, Error, Input, InputBuilder, ItemSpec, Orientation, OrientationConstraint, Output,
    PackedContainer, Packer, PackingSummary, Placement, Result, Termination, Vec3,
};
