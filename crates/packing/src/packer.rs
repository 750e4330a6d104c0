//! Greedy extreme-point container loading.
//!
//! Boxes are sorted once by descending volume. Containers are then opened
//! one at a time and filled in a single pass over the unplaced pool: every
//! box takes the first orientation and the first extreme point that satisfy
//! all constraints, or stays in the pool for the next container.
//!
//! The loop stops when the pool is empty, when no container instance is
//! left, or when a freshly opened container accepts nothing.

use crate::boundary::ContainerType;
use crate::constraint::ConstraintChecker;
use crate::extreme_point::ExtremePointSet;
use crate::geometry::{BoxItem, BoxTypeCatalog, Placement};
use crate::input::Input;
use crate::result::{Output, PackedContainer, Termination};
use crate::selector::ContainerSelector;
use rayon::prelude::*;
use std::cmp::Reverse;
use u_loading_core::{Config, Cuboid, Result, Vec3};

/// Container loading solver.
#[derive(Debug, Clone, Default)]
pub struct Packer {
    config: Config,
}

impl Packer {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Packs every box of `input`, opening containers as needed.
    ///
    /// Fails only if the configuration is invalid. Boxes that cannot be
    /// placed end up in [`Output::unpacked_boxes`].
    pub fn pack(&self, input: Input) -> Result<Output> {
        self.config.validate()?;
        Ok(self.fill_loop(input))
    }

    /// Runs one filling pass of `container` over `pool`.
    ///
    /// `pool` must already be in trial order. Placed boxes are removed from
    /// `pool` and returned in placement order; the rest keep their order.
    pub fn fill(
        &self,
        container: &ContainerType,
        pool: &mut Vec<BoxItem>,
        catalog: &BoxTypeCatalog,
    ) -> Vec<BoxItem> {
        let mut placed: Vec<BoxItem> = Vec::new();
        let mut remaining = Vec::with_capacity(pool.len());

        for mut item in pool.drain(..) {
            match self.try_place(&item, container, &placed, catalog) {
                Some(placement) => {
                    item.place(placement);
                    placed.push(item);
                }
                None => remaining.push(item),
            }
        }
        *pool = remaining;

        log::debug!(
            "Filled container \"{}\": {} placed, {} left",
            container.id(),
            placed.len(),
            pool.len()
        );
        placed
    }

    fn fill_loop(&self, input: Input) -> Output {
        let (catalog, container_types, mut pool) = input.into_parts();

        // Stable: boxes of equal volume keep their input order.
        pool.sort_by_key(|item| Reverse(item.volume()));

        let mut selector = ContainerSelector::new(container_types);
        let mut containers = Vec::new();

        let termination = loop {
            if pool.is_empty() {
                break Termination::AllPacked;
            }

            let remaining_volume: i64 = pool.iter().map(BoxItem::volume).sum();
            let Some(container_type) = selector.select(remaining_volume) else {
                log::warn!("No container left for {} boxes", pool.len());
                break Termination::ContainersExhausted;
            };

            let placed = self.fill(&container_type, &mut pool, &catalog);
            if placed.is_empty() {
                log::warn!(
                    "Remaining {} boxes cannot be packed into \"{}\"",
                    pool.len(),
                    container_type.id()
                );
                break Termination::Stalled;
            }

            let packed = PackedContainer::new(container_type, placed);
            log::info!(
                "Packed {} boxes in container \"{}\", volume rate: {:.2}%",
                packed.len(),
                packed.container_type.id(),
                packed.volume_rate * 100.0
            );
            containers.push(packed);
        };

        for item in &mut pool {
            item.clear_placement();
        }

        Output {
            box_types: catalog,
            containers,
            unpacked_boxes: pool,
            termination,
        }
    }

    /// Finds the first admissible placement for `item` given the boxes
    /// already placed in `container`.
    fn try_place(
        &self,
        item: &BoxItem,
        container: &ContainerType,
        placed: &[BoxItem],
        catalog: &BoxTypeCatalog,
    ) -> Option<Placement> {
        let checker = ConstraintChecker::new(container, placed, self.config.support_ratio);

        // Payload does not depend on position.
        if !checker.check_weight(item.weight()) {
            return None;
        }

        let box_type = catalog.get(item.box_type());
        let candidates = ExtremePointSet::from_context(placed);

        box_type.orientations().iter().find_map(|&orientation| {
            let size = box_type.dimensions_for(orientation);
            self.first_admissible(&checker, candidates.as_slice(), size, item.weight())
                .map(|position| Placement::new(position, orientation, box_type))
        })
    }

    /// Returns the first candidate, in trial order, at which a box of `size`
    /// passes every constraint.
    fn first_admissible(
        &self,
        checker: &ConstraintChecker<'_>,
        candidates: &[Vec3],
        size: Vec3,
        weight: Option<f64>,
    ) -> Option<Vec3> {
        let admissible = |p: &&Vec3| checker.check(&Cuboid::new(**p, size), weight);

        if self.config.parallel {
            candidates.par_iter().find_first(admissible).copied()
        } else {
            candidates.iter().find(admissible).copied()
        }
    }
}

/// Packs `input` with the default configuration.
pub fn run(input: Input) -> Output {
    Packer::default_config().fill_loop(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoxType;
    use crate::input::ItemSpec;
    use approx::assert_relative_eq;
    use u_loading_core::{Error, Orientation, OrientationConstraint};

    fn single_box_input() -> Input {
        Input::builder()
            .box_type(BoxType::new("t", 5, 5, 5))
            .container_type(ContainerType::new("c", 10, 10, 10))
            .item(ItemSpec::new("b1", "t"))
            .build()
            .unwrap()
    }

    fn position_of(output: &Output, id: &str) -> Vec3 {
        output
            .containers
            .iter()
            .flat_map(|c| c.boxes.iter())
            .find(|b| b.id() == id)
            .and_then(BoxItem::placement)
            .map(|p| p.position)
            .unwrap()
    }

    #[test]
    fn test_single_box_at_origin() {
        let output = run(single_box_input());

        assert_eq!(output.containers.len(), 1);
        assert_eq!(output.containers[0].boxes.len(), 1);
        assert_eq!(position_of(&output, "b1"), Vec3::new(0, 0, 0));
        assert_relative_eq!(output.containers[0].volume_rate, 0.125);
        assert!(output.containers[0].weight_rate.is_none());
        assert!(output.unpacked_boxes.is_empty());
        assert_eq!(output.termination, Termination::AllPacked);
    }

    #[test]
    fn test_too_tall_second_box_stays_unpacked() {
        let input = Input::builder()
            .box_types([BoxType::new("short", 10, 10, 5), BoxType::new("tall", 10, 10, 6)])
            .container_type(ContainerType::new("c", 10, 10, 10).with_quantity(1))
            .item(ItemSpec::new("small", "short"))
            .item(ItemSpec::new("big", "tall"))
            .build()
            .unwrap();

        let output = run(input);

        assert_eq!(output.containers.len(), 1);
        assert_eq!(output.containers[0].boxes[0].id(), "big");
        assert_eq!(position_of(&output, "big"), Vec3::new(0, 0, 0));
        assert_eq!(output.unpacked_boxes.len(), 1);
        assert_eq!(output.unpacked_boxes[0].id(), "small");
        assert!(!output.unpacked_boxes[0].is_placed());
        assert_eq!(output.termination, Termination::ContainersExhausted);
    }

    #[test]
    fn test_no_container_available() {
        let input = Input::builder()
            .box_type(BoxType::new("t", 1, 1, 1))
            .container_types([
                ContainerType::new("a", 10, 10, 10).with_quantity(0),
                ContainerType::new("b", 20, 20, 20).with_quantity(0),
            ])
            .items([ItemSpec::new("b1", "t"), ItemSpec::new("b2", "t")])
            .build()
            .unwrap();

        let output = run(input);

        assert!(output.containers.is_empty());
        assert_eq!(output.unpacked_boxes.len(), 2);
        assert_eq!(output.termination, Termination::ContainersExhausted);
    }

    #[test]
    fn test_oversized_box_stalls() {
        let input = Input::builder()
            .box_types([BoxType::new("fits", 5, 5, 5), BoxType::new("huge", 20, 20, 20)])
            .container_type(ContainerType::new("c", 10, 10, 10))
            .items([ItemSpec::new("huge", "huge"), ItemSpec::new("fits", "fits")])
            .build()
            .unwrap();

        let output = run(input);

        // Unbounded containers still halt once a pass places nothing.
        assert_eq!(output.containers.len(), 1);
        assert_eq!(output.containers[0].boxes[0].id(), "fits");
        assert_eq!(output.unpacked_boxes.len(), 1);
        assert_eq!(output.unpacked_boxes[0].id(), "huge");
        assert_eq!(output.termination, Termination::Stalled);
    }

    #[test]
    fn test_layer_filled_before_climbing() {
        let input = Input::builder()
            .box_type(BoxType::new("t", 5, 5, 5))
            .container_type(ContainerType::new("c", 10, 10, 10))
            .items((0..8).map(|i| ItemSpec::new(format!("b{i}"), "t")))
            .build()
            .unwrap();

        let output = run(input);

        assert_eq!(output.containers.len(), 1);
        let positions: Vec<Vec3> = output.containers[0]
            .boxes
            .iter()
            .map(|b| b.placement().unwrap().position)
            .collect();
        assert_eq!(
            positions,
            vec![
                Vec3::new(0, 0, 0),
                Vec3::new(5, 0, 0),
                Vec3::new(0, 5, 0),
                Vec3::new(5, 5, 0),
                Vec3::new(0, 0, 5),
                Vec3::new(5, 0, 5),
                Vec3::new(0, 5, 5),
                Vec3::new(5, 5, 5),
            ]
        );
        assert_relative_eq!(output.containers[0].volume_rate, 1.0);
    }

    #[test]
    fn test_second_orientation_used_when_first_fails() {
        let input = Input::builder()
            .box_type(BoxType::new("long", 8, 2, 2))
            .container_type(ContainerType::new("narrow", 2, 8, 2))
            .item(ItemSpec::new("b1", "long"))
            .build()
            .unwrap();

        let output = run(input);

        let placement = output.containers[0].boxes[0].placement().unwrap();
        assert_eq!(placement.orientation, Orientation::Yxz);
        assert_eq!(placement.size, Vec3::new(2, 8, 2));
    }

    #[test]
    fn test_fixed_orientation_is_respected() {
        let input = Input::builder()
            .box_type(BoxType::new("long", 8, 2, 2).with_constraint(OrientationConstraint::Fixed))
            .container_type(ContainerType::new("narrow", 2, 8, 2))
            .item(ItemSpec::new("b1", "long"))
            .build()
            .unwrap();

        let output = run(input);

        assert!(output.containers.is_empty());
        assert_eq!(output.termination, Termination::Stalled);
    }

    #[test]
    fn test_payload_limits_container() {
        let input = Input::builder()
            .box_type(BoxType::new("t", 1, 1, 1))
            .container_type(ContainerType::new("c", 10, 10, 10).with_payload(25.0))
            .items((0..5).map(|i| ItemSpec::new(format!("b{i}"), "t").with_weight(10.0)))
            .build()
            .unwrap();

        let output = run(input);

        assert_eq!(output.containers.len(), 3);
        let counts: Vec<usize> = output.containers.iter().map(PackedContainer::len).collect();
        assert_eq!(counts, vec![2, 2, 1]);
        assert_relative_eq!(output.containers[0].weight_rate.unwrap(), 0.8);
        assert_relative_eq!(output.containers[2].weight_rate.unwrap(), 0.4);
        assert!(output.all_packed());
    }

    #[test]
    fn test_smallest_sufficient_container_chosen() {
        let input = Input::builder()
            .box_type(BoxType::new("t", 4, 4, 4))
            .container_types([
                ContainerType::new("big", 20, 20, 20),
                ContainerType::new("small", 8, 8, 8),
            ])
            .items((0..3).map(|i| ItemSpec::new(format!("b{i}"), "t")))
            .build()
            .unwrap();

        let output = run(input);

        assert_eq!(output.containers.len(), 1);
        assert_eq!(output.containers[0].container_type.id(), "small");
    }

    #[test]
    fn test_equal_volumes_keep_input_order() {
        let input = Input::builder()
            .box_types([BoxType::new("a", 2, 3, 4), BoxType::new("b", 4, 3, 2)])
            .container_type(ContainerType::new("c", 100, 100, 100))
            .items([
                ItemSpec::new("first", "a"),
                ItemSpec::new("second", "b"),
                ItemSpec::new("third", "a"),
            ])
            .build()
            .unwrap();

        let output = run(input);

        let ids: Vec<&str> = output.containers[0].boxes.iter().map(BoxItem::id).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let build = || {
            Input::builder()
                .box_types([
                    BoxType::new("a", 3, 4, 5).with_constraint(OrientationConstraint::Any),
                    BoxType::new("b", 2, 2, 2),
                    BoxType::new("c", 6, 1, 3),
                ])
                .container_type(ContainerType::new("c", 12, 10, 9))
                .items((0..40).map(|i| {
                    let t = ["a", "b", "c"][i % 3];
                    ItemSpec::new(format!("b{i}"), t)
                }))
                .build()
                .unwrap()
        };

        let sequential = Packer::default_config().pack(build()).unwrap();
        let parallel = Packer::new(Config::default().with_parallel(true))
            .pack(build())
            .unwrap();

        assert_eq!(sequential.containers.len(), parallel.containers.len());
        for (s, p) in sequential.containers.iter().zip(&parallel.containers) {
            let s: Vec<_> = s.boxes.iter().map(|b| (b.id(), b.placement())).collect();
            let p: Vec<_> = p.boxes.iter().map(|b| (b.id(), b.placement())).collect();
            assert_eq!(s, p);
        }
    }

    #[test]
    fn test_support_ratio_allows_overhang() {
        let build = || {
            Input::builder()
                .box_types([BoxType::new("base", 4, 10, 4), BoxType::new("plank", 8, 10, 1)])
                .container_type(ContainerType::new("c", 8, 10, 5).with_quantity(1))
                .items([ItemSpec::new("base", "base"), ItemSpec::new("plank", "plank")])
                .build()
                .unwrap()
        };

        let strict = run(build());
        assert_eq!(strict.unpacked_boxes.len(), 1);
        assert_eq!(strict.unpacked_boxes[0].id(), "plank");

        let lenient = Packer::new(Config::default().with_support_ratio(0.5))
            .pack(build())
            .unwrap();
        assert!(lenient.all_packed());
        assert_eq!(position_of(&lenient, "plank"), Vec3::new(0, 0, 4));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let packer = Packer::new(Config::default().with_support_ratio(0.0));
        let err = packer.pack(single_box_input()).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_fill_keeps_unplaced_in_pool() {
        let catalog = BoxTypeCatalog::new(vec![BoxType::new("t", 6, 6, 6)]).unwrap();
        let key = catalog.lookup("t").unwrap();
        let mut pool = vec![
            BoxItem::new("a", key, &catalog),
            BoxItem::new("b", key, &catalog),
        ];
        let container = ContainerType::new("c", 10, 10, 10);

        let placed = Packer::default_config().fill(&container, &mut pool, &catalog);

        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].id(), "a");
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].id(), "b");
        assert!(!pool[0].is_placed());
    }
}
