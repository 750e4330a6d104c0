//! Packing result representation.

use crate::boundary::ContainerType;
use crate::geometry::{BoxItem, BoxTypeCatalog};

/// One filled container instance.
#[derive(Debug, Clone)]
pub struct PackedContainer {
    /// The container type used.
    pub container_type: ContainerType,

    /// Boxes in placement order.
    pub boxes: Vec<BoxItem>,

    /// Packed volume / container volume.
    pub volume_rate: f64,

    /// Packed weight / payload. `None` if the payload is unconstrained.
    pub weight_rate: Option<f64>,
}

impl PackedContainer {
    /// Records a filled container, computing its utilization rates.
    pub fn new(container_type: ContainerType, boxes: Vec<BoxItem>) -> Self {
        let packed_volume: i64 = boxes.iter().map(BoxItem::volume).sum();
        let volume_rate = packed_volume as f64 / container_type.volume() as f64;

        let weight_rate = container_type.payload().map(|payload| {
            let packed_weight: f64 = boxes.iter().filter_map(BoxItem::weight).sum();
            packed_weight / payload
        });

        Self {
            container_type,
            boxes,
            volume_rate,
            weight_rate,
        }
    }

    /// Returns the number of boxes inside.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true if the container holds no boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

/// Why the fill loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every box was packed.
    AllPacked,
    /// No container type had an instance left.
    ContainersExhausted,
    /// A freshly opened container accepted no box.
    Stalled,
}

/// Result of a packing run.
#[derive(Debug, Clone)]
pub struct Output {
    /// Box type catalog, passed through from the input.
    pub box_types: BoxTypeCatalog,

    /// Filled containers in the order they were opened.
    pub containers: Vec<PackedContainer>,

    /// Boxes that could not be placed anywhere. None of them has a placement.
    pub unpacked_boxes: Vec<BoxItem>,

    /// Why packing stopped.
    pub termination: Termination,
}

impl Output {
    /// Returns the number of packed boxes.
    pub fn packed_count(&self) -> usize {
        self.containers.iter().map(PackedContainer::len).sum()
    }

    /// Returns the total number of boxes, packed or not.
    pub fn total_count(&self) -> usize {
        self.packed_count() + self.unpacked_boxes.len()
    }

    /// Returns true if every box was packed.
    pub fn all_packed(&self) -> bool {
        self.unpacked_boxes.is_empty()
    }

    /// Computes summary statistics.
    pub fn summary(&self) -> PackingSummary {
        PackingSummary::from(self)
    }
}

/// Summary statistics for a packing result.
#[derive(Debug, Clone, PartialEq)]
pub struct PackingSummary {
    /// Total boxes requested.
    pub total_boxes: usize,
    /// Boxes packed.
    pub packed_boxes: usize,
    /// Containers used.
    pub containers_used: usize,
    /// Mean volume rate over the used containers (0 if none).
    pub mean_volume_rate: f64,
    /// Why packing stopped.
    pub termination: Termination,
}

impl From<&Output> for PackingSummary {
    fn from(output: &Output) -> Self {
        let containers_used = output.containers.len();
        let mean_volume_rate = if containers_used == 0 {
            0.0
        } else {
            output.containers.iter().map(|c| c.volume_rate).sum::<f64>() / containers_used as f64
        };

        Self {
            total_boxes: output.total_count(),
            packed_boxes: output.packed_count(),
            containers_used,
            mean_volume_rate,
            termination: output.termination,
        }
    }
}
