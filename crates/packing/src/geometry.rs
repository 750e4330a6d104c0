//! Box types, box instances and their placements.

use std::collections::HashMap;
use u_loading_core::geometry::{checked_volume, volume, Vec3};
use u_loading_core::{Cuboid, Error, Orientation, OrientationConstraint, Result};

/// A rectangular box type that boxes to be packed refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxType {
    /// Unique identifier.
    id: String,

    /// Intrinsic dimensions (length, width, height).
    dimensions: Vec3,

    /// Permitted orientations, in trial order.
    orientations: Vec<Orientation>,
}

impl BoxType {
    /// Creates a new box type. Boxes of this type may be packed as-is or
    /// with length and width swapped.
    pub fn new(id: impl Into<String>, length: i64, width: i64, height: i64) -> Self {
        Self {
            id: id.into(),
            dimensions: Vec3::new(length, width, height),
            orientations: Orientation::UPRIGHT.to_vec(),
        }
    }

    /// Sets the permitted orientations. The given order is the trial order.
    pub fn with_orientations(mut self, orientations: impl IntoIterator<Item = Orientation>) -> Self {
        self.orientations = orientations.into_iter().collect();
        self
    }

    /// Sets the permitted orientations from a preset.
    pub fn with_constraint(self, constraint: OrientationConstraint) -> Self {
        self.with_orientations(constraint.orientations().iter().copied())
    }

    /// Returns the id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the intrinsic dimensions (length, width, height).
    pub fn dimensions(&self) -> &Vec3 {
        &self.dimensions
    }

    /// Returns the permitted orientations.
    pub fn orientations(&self) -> &[Orientation] {
        &self.orientations
    }

    /// Returns the volume.
    pub fn volume(&self) -> i64 {
        volume(&self.dimensions)
    }

    /// Returns the effective (x, y, z) extent under an orientation.
    pub fn dimensions_for(&self, orientation: Orientation) -> Vec3 {
        orientation.apply(&self.dimensions)
    }

    /// Validates the box type.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.iter().any(|&d| d <= 0) {
            return Err(Error::InvalidBoxType(format!(
                "All dimensions for '{}' must be positive",
                self.id
            )));
        }

        if self.orientations.is_empty() {
            return Err(Error::InvalidBoxType(format!(
                "Box type '{}' permits no orientation",
                self.id
            )));
        }

        if checked_volume(&self.dimensions).is_none() {
            return Err(Error::InvalidBoxType(format!(
                "Volume of '{}' overflows",
                self.id
            )));
        }

        Ok(())
    }
}

/// Index of a box type inside a [`BoxTypeCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxTypeKey(usize);

impl BoxTypeKey {
    /// Returns the position of the box type in the catalog.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Immutable catalog of box types with O(1) lookup by key or id.
#[derive(Debug, Clone, Default)]
pub struct BoxTypeCatalog {
    types: Vec<BoxType>,
    by_id: HashMap<String, BoxTypeKey>,
}

impl BoxTypeCatalog {
    /// Builds a catalog, rejecting invalid and duplicate box types.
    pub fn new(types: Vec<BoxType>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(types.len());
        for (idx, box_type) in types.iter().enumerate() {
            box_type.validate()?;
            if by_id
                .insert(box_type.id().to_string(), BoxTypeKey(idx))
                .is_some()
            {
                return Err(Error::DuplicateId {
                    kind: "box type",
                    id: box_type.id().to_string(),
                });
            }
        }
        Ok(Self { types, by_id })
    }

    /// Resolves a box type id.
    pub fn lookup(&self, id: &str) -> Option<BoxTypeKey> {
        self.by_id.get(id).copied()
    }

    /// Returns the box type for a key.
    ///
    /// Keys are only handed out by this catalog, so the lookup is infallible
    /// for keys obtained from it.
    pub fn get(&self, key: BoxTypeKey) -> &BoxType {
        &self.types[key.0]
    }

    /// Returns the number of box types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates box types in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &BoxType> {
        self.types.iter()
    }
}

/// Position and orientation assigned to a packed box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Minimum corner inside the container.
    pub position: Vec3,
    /// Chosen orientation.
    pub orientation: Orientation,
    /// Effective (x, y, z) extent under `orientation`.
    pub size: Vec3,
}

impl Placement {
    /// Places a box of `box_type` at `position` under `orientation`.
    pub fn new(position: Vec3, orientation: Orientation, box_type: &BoxType) -> Self {
        Self {
            position,
            orientation,
            size: box_type.dimensions_for(orientation),
        }
    }

    /// Returns the occupied cuboid.
    pub fn cuboid(&self) -> Cuboid {
        Cuboid::new(self.position, self.size)
    }
}

/// A single box to be packed.
///
/// Two boxes are equal iff their ids are equal.
#[derive(Debug, Clone)]
pub struct BoxItem {
    id: String,
    box_type: BoxTypeKey,
    volume: i64,
    weight: Option<f64>,
    group: Option<String>,
    placement: Option<Placement>,
}

impl BoxItem {
    /// Creates an unplaced box of a catalog type.
    pub fn new(id: impl Into<String>, box_type: BoxTypeKey, catalog: &BoxTypeCatalog) -> Self {
        Self {
            id: id.into(),
            box_type,
            volume: catalog.get(box_type).volume(),
            weight: None,
            group: None,
            placement: None,
        }
    }

    /// Sets the weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the group label.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Returns the id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the box type key.
    pub fn box_type(&self) -> BoxTypeKey {
        self.box_type
    }

    /// Returns the volume of the box type.
    pub fn volume(&self) -> i64 {
        self.volume
    }

    /// Returns the weight, if constrained.
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Returns the group label.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Returns the placement, if packed.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Returns true if the box has a position.
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Returns the occupied cuboid, if packed.
    pub fn cuboid(&self) -> Option<Cuboid> {
        self.placement.map(|p| p.cuboid())
    }

    /// Fixes the position and orientation of the box.
    pub fn place(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }

    /// Resets the box to the unplaced state.
    pub fn clear_placement(&mut self) {
        self.placement = None;
    }
}

impl PartialEq for BoxItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BoxItem {}
