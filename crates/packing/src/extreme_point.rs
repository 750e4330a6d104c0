//! Extreme point generation.
//!
//! Candidate origins for the next box are the container origin plus, for
//! every box already in the container, the three points just beyond its
//! right face `(x + lx, y, z)`, back face `(x, y + ly, z)` and top face
//! `(x, y, z + lz)`.
//!
//! Points are deduplicated and ordered by z, then y, then x, so a layer is
//! filled front to back before the next layer starts.
//!
//! # References
//!
//! - Crainic, T. G., Perboli, G., & Tadei, R. (2008). Extreme point-based heuristics
//!   for three-dimensional bin packing.

use crate::geometry::BoxItem;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use u_loading_core::{Cuboid, Vec3};

/// A candidate origin, ordered bottom-up (z, then y, then x).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtremePoint(pub Vec3);

impl ExtremePoint {
    /// Creates a new extreme point.
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Returns the position.
    pub fn position(&self) -> Vec3 {
        self.0
    }

    /// Returns the three extreme points spawned by a placed cuboid.
    pub fn spawned_by(cuboid: &Cuboid) -> [ExtremePoint; 3] {
        let o = cuboid.origin;
        let s = cuboid.size;
        [
            ExtremePoint::new(o.x + s.x, o.y, o.z),
            ExtremePoint::new(o.x, o.y + s.y, o.z),
            ExtremePoint::new(o.x, o.y, o.z + s.z),
        ]
    }
}

impl PartialOrd for ExtremePoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExtremePoint {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.0.z, self.0.y, self.0.x).cmp(&(other.0.z, other.0.y, other.0.x))
    }
}

/// Ordered, deduplicated candidate origins for one box attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtremePointSet {
    points: Vec<Vec3>,
}

impl ExtremePointSet {
    /// Builds the candidate set from the boxes already in the container.
    pub fn from_context(context: &[BoxItem]) -> Self {
        Self::from_cuboids(context.iter().filter_map(BoxItem::cuboid))
    }

    /// Builds the candidate set from placed cuboids.
    pub fn from_cuboids(cuboids: impl IntoIterator<Item = Cuboid>) -> Self {
        let mut set = BTreeSet::new();
        set.insert(ExtremePoint::new(0, 0, 0));
        for cuboid in cuboids {
            set.extend(ExtremePoint::spawned_by(&cuboid));
        }

        Self {
            points: set.into_iter().map(|ep| ep.position()).collect(),
        }
    }

    /// Returns the number of candidate points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no candidates. Never true for a built set.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the candidates in trial order.
    pub fn as_slice(&self) -> &[Vec3] {
        &self.points
    }

    /// Iterates the candidates in trial order.
    pub fn iter(&self) -> impl Iterator<Item = &Vec3> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_yields_origin() {
        let eps = ExtremePointSet::from_context(&[]);
        assert_eq!(eps.len(), 1);
        assert!(!eps.is_empty());
        assert_eq!(eps.as_slice(), &[Vec3::new(0, 0, 0)]);
    }

    #[test]
    fn test_points_spawned_by_box() {
        let eps = ExtremePointSet::from_cuboids([Cuboid::from_coords(0, 0, 0, 3, 4, 5)]);
        assert_eq!(
            eps.as_slice(),
            &[
                Vec3::new(0, 0, 0),
                Vec3::new(3, 0, 0),
                Vec3::new(0, 4, 0),
                Vec3::new(0, 0, 5),
            ]
        );
    }

    #[test]
    fn test_ordering_z_then_y_then_x() {
        let mut points = vec![
            ExtremePoint::new(0, 0, 1),
            ExtremePoint::new(5, 0, 0),
            ExtremePoint::new(0, 2, 0),
            ExtremePoint::new(1, 2, 0),
        ];
        points.sort();
        let ordered: Vec<_> = points.iter().map(|p| p.position()).collect();
        assert_eq!(
            ordered,
            vec![
                Vec3::new(5, 0, 0),
                Vec3::new(0, 2, 0),
                Vec3::new(1, 2, 0),
                Vec3::new(0, 0, 1),
            ]
        );
    }

    #[test]
    fn test_duplicates_removed() {
        // (5, 0, 0) is spawned by the first and third boxes.
        let eps = ExtremePointSet::from_cuboids([
            Cuboid::from_coords(0, 0, 0, 5, 5, 5),
            Cuboid::from_coords(5, 0, 0, 5, 5, 5),
            Cuboid::from_coords(0, 0, 0, 5, 2, 2),
        ]);
        let mut seen = std::collections::HashSet::new();
        for p in eps.iter() {
            assert!(seen.insert((p.x, p.y, p.z)));
        }
        assert_eq!(eps.len(), 9);
    }
}
