//! Axis-aligned integer cuboids.

use crate::geometry::{footprint, volume, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned cuboid given by its minimum corner and its extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cuboid {
    /// Minimum corner (x, y, z).
    pub origin: Vec3,
    /// Extent along (x, y, z).
    pub size: Vec3,
}

impl Cuboid {
    /// Creates a cuboid at `origin` with extent `size`.
    pub fn new(origin: Vec3, size: Vec3) -> Self {
        Self { origin, size }
    }

    /// Creates a cuboid from plain coordinates.
    pub fn from_coords(x: i64, y: i64, z: i64, lx: i64, ly: i64, lz: i64) -> Self {
        Self::new(Vec3::new(x, y, z), Vec3::new(lx, ly, lz))
    }

    /// Returns the maximum corner.
    pub fn max_corner(&self) -> Vec3 {
        self.origin + self.size
    }

    /// Returns the z coordinate of the bottom face.
    pub fn bottom(&self) -> i64 {
        self.origin.z
    }

    /// Returns the z coordinate of the top face.
    pub fn top(&self) -> i64 {
        self.origin.z + self.size.z
    }

    /// Returns the volume.
    pub fn volume(&self) -> i64 {
        volume(&self.size)
    }

    /// Returns the footprint area.
    pub fn footprint_area(&self) -> i64 {
        footprint(&self.size)
    }

    /// Checks that the cuboid lies inside `[0, bounds]` on every axis.
    ///
    /// Never overflows for non-negative bounds, whatever the origin and size.
    pub fn fits_within(&self, bounds: &Vec3) -> bool {
        (0..3).all(|axis| {
            self.origin[axis] >= 0
                && self.origin[axis] <= bounds[axis]
                && self.size[axis] <= bounds[axis] - self.origin[axis]
        })
    }

    /// Checks if this cuboid shares interior volume with another.
    ///
    /// Extents must overlap strictly on all three axes; touching faces do
    /// not count.
    pub fn overlaps(&self, other: &Cuboid) -> bool {
        let self_max = self.max_corner();
        let other_max = other.max_corner();

        (0..3).all(|axis| {
            self.origin[axis] < other_max[axis] && other.origin[axis] < self_max[axis]
        })
    }

    /// Area of the intersection of the two footprints (0 when disjoint).
    pub fn footprint_overlap(&self, other: &Cuboid) -> i64 {
        let self_max = self.max_corner();
        let other_max = other.max_corner();

        let x1 = self.origin.x.max(other.origin.x);
        let y1 = self.origin.y.max(other.origin.y);
        let x2 = self_max.x.min(other_max.x);
        let y2 = self_max.y.min(other_max.y);

        if x1 < x2 && y1 < y2 {
            (x2 - x1) * (y2 - y1)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_measures() {
        let c = Cuboid::from_coords(1, 2, 3, 10, 20, 30);
        assert_eq!(c.volume(), 6000);
        assert_eq!(c.footprint_area(), 200);
        assert_eq!(c.max_corner(), Vec3::new(11, 22, 33));
        assert_eq!(c.bottom(), 3);
        assert_eq!(c.top(), 33);
    }

    #[test]
    fn test_overlap_requires_all_axes() {
        let a = Cuboid::from_coords(0, 0, 0, 10, 10, 10);

        assert!(a.overlaps(&Cuboid::from_coords(5, 5, 5, 10, 10, 10)));
        // Overlapping in x and y but stacked in z.
        assert!(!a.overlaps(&Cuboid::from_coords(2, 2, 10, 5, 5, 5)));
        // Overlapping only in x.
        assert!(!a.overlaps(&Cuboid::from_coords(5, 20, 20, 10, 10, 10)));
    }

    #[test]
    fn test_touching_faces_do_not_overlap() {
        let a = Cuboid::from_coords(0, 0, 0, 5, 5, 5);
        assert!(!a.overlaps(&Cuboid::from_coords(5, 0, 0, 5, 5, 5)));
        assert!(!a.overlaps(&Cuboid::from_coords(0, 5, 0, 5, 5, 5)));
        assert!(!a.overlaps(&Cuboid::from_coords(0, 0, 5, 5, 5, 5)));
    }

    #[test]
    fn test_fits_within() {
        let bounds = Vec3::new(10, 10, 10);
        assert!(Cuboid::from_coords(0, 0, 0, 10, 10, 10).fits_within(&bounds));
        assert!(Cuboid::from_coords(5, 5, 5, 5, 5, 5).fits_within(&bounds));
        assert!(!Cuboid::from_coords(0, 0, 6, 5, 5, 5).fits_within(&bounds));
        assert!(!Cuboid::from_coords(-1, 0, 0, 5, 5, 5).fits_within(&bounds));

        let long = Vec3::new(i64::MAX / 2 + 1, 1, 1);
        let far = Cuboid::from_coords(i64::MAX / 2 + 1, 0, 0, i64::MAX / 2 + 1, 1, 1);
        assert!(!far.fits_within(&long));
    }

    #[test]
    fn test_footprint_overlap() {
        let a = Cuboid::from_coords(0, 0, 0, 10, 10, 5);
        let b = Cuboid::from_coords(5, 5, 5, 10, 10, 5);
        assert_eq!(a.footprint_overlap(&b), 25);

        let edge = Cuboid::from_coords(10, 0, 5, 5, 5, 5);
        assert_eq!(a.footprint_overlap(&edge), 0);
    }
}
