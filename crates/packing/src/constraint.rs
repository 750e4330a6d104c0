//! Placement constraints.
//!
//! A [`ConstraintChecker`] answers whether a candidate cuboid can be added to
//! a container that already holds a set of boxes (the context). The four
//! predicates are independent; [`ConstraintChecker::check`] evaluates them
//! cheapest first and stops at the first failure.

use crate::boundary::ContainerType;
use crate::geometry::BoxItem;
use u_loading_core::Cuboid;

/// Constraint checker bound to one container and its placed boxes.
#[derive(Debug, Clone)]
pub struct ConstraintChecker<'a> {
    container: &'a ContainerType,
    placed: Vec<Cuboid>,
    placed_weight: f64,
    support_ratio: f64,
}

impl<'a> ConstraintChecker<'a> {
    /// Creates a checker for `container` holding `context`.
    ///
    /// Boxes in the context without a placement are ignored.
    pub fn new(container: &'a ContainerType, context: &[BoxItem], support_ratio: f64) -> Self {
        Self {
            container,
            placed: context.iter().filter_map(BoxItem::cuboid).collect(),
            placed_weight: context.iter().filter_map(BoxItem::weight).sum(),
            support_ratio,
        }
    }

    /// Returns the container this checker is bound to.
    pub fn container(&self) -> &ContainerType {
        self.container
    }

    /// Bound: the candidate lies entirely inside the container.
    pub fn check_bound(&self, candidate: &Cuboid) -> bool {
        candidate.fits_within(self.container.dimensions())
    }

    /// Overlap: the candidate shares no interior volume with any placed box.
    pub fn check_overlap(&self, candidate: &Cuboid) -> bool {
        !self.placed.iter().any(|p| p.overlaps(candidate))
    }

    /// Support: the candidate rests on the floor, or the footprint overlap
    /// with every box whose top face is level with the candidate's bottom
    /// face adds up to the required share of its footprint.
    ///
    /// Overlap areas are summed per supporting box without merging, so
    /// supporters that overlap each other in projection count twice.
    pub fn check_support(&self, candidate: &Cuboid) -> bool {
        if candidate.bottom() == 0 {
            return true;
        }

        let supported: i64 = self
            .placed
            .iter()
            .filter(|p| p.top() == candidate.bottom())
            .map(|p| p.footprint_overlap(candidate))
            .sum();

        let required = candidate.footprint_area();
        if self.support_ratio >= 1.0 {
            supported >= required
        } else {
            supported as f64 >= self.support_ratio * required as f64
        }
    }

    /// Weight: the placed weight plus the candidate's stays within payload.
    /// Always true for containers without a payload limit.
    pub fn check_weight(&self, weight: Option<f64>) -> bool {
        match self.container.payload() {
            Some(payload) => self.placed_weight + weight.unwrap_or(0.0) <= payload,
            None => true,
        }
    }

    /// Checks all constraints in order: bound, overlap, support, weight.
    pub fn check(&self, candidate: &Cuboid, weight: Option<f64>) -> bool {
        self.check_bound(candidate)
            && self.check_overlap(candidate)
            && self.check_support(candidate)
            && self.check_weight(weight)
    }

    /// Checks a placed box against the context.
    ///
    /// Returns false for a box without a placement.
    pub fn check_item(&self, item: &BoxItem) -> bool {
        item.cuboid()
            .is_some_and(|cuboid| self.check(&cuboid, item.weight()))
    }
}
