//! # U-Loading Packing
//!
//! Greedy extreme-point heuristic for the three-dimensional container
//! loading problem.
//!
//! Boxes of several types are loaded into container instances drawn from a
//! limited stock. Every placed box lies inside its container, overlaps no
//! other box, rests on the floor or on boxes directly below it and keeps the
//! container within its payload.
//!
//! ## Example
//!
//! ```rust
//! use u_loading_packing::{BoxType, ContainerType, Input, ItemSpec};
//!
//! let input = Input::builder()
//!     .box_type(BoxType::new("crate", 5, 5, 5))
//!     .container_type(ContainerType::new("truck", 10, 10, 10))
//!     .item(ItemSpec::new("b1", "crate"))
//!     .build()
//!     .unwrap();
//!
//! let output = u_loading_packing::run(input);
//! assert!(output.all_packed());
//! ```

pub mod boundary;
pub mod constraint;
pub mod extreme_point;
pub mod geometry;
pub mod input;
pub mod packer;
pub mod result;
pub mod selector;

// Re-exports
pub use boundary::ContainerType;
pub use constraint::ConstraintChecker;
pub use extreme_point::{ExtremePoint, ExtremePointSet};
pub use geometry::{BoxItem, BoxType, BoxTypeCatalog, BoxTypeKey, Placement};
pub use input::{Input, InputBuilder, ItemSpec};
pub use packer::{run, Packer};
pub use result::{Output, PackedContainer, PackingSummary, Termination};
pub use selector::ContainerSelector;
pub use u_loading_core::{Config, Cuboid, Error, Orientation, OrientationConstraint, Result, Vec3};
