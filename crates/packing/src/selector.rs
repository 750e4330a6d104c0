//! Container selection.

use crate::boundary::ContainerType;

/// Picks the container instance to open next and tracks remaining quantities.
///
/// Types are scanned in ascending volume order (ties keep declaration
/// order). The smallest type that can hold the whole remaining volume wins;
/// otherwise the largest available type is used.
#[derive(Debug, Clone)]
pub struct ContainerSelector {
    /// Container types with their remaining quantity (`None` = unbounded).
    slots: Vec<(ContainerType, Option<u32>)>,
}

impl ContainerSelector {
    /// Creates a selector over the given container types.
    pub fn new(container_types: impl IntoIterator<Item = ContainerType>) -> Self {
        let mut slots: Vec<_> = container_types
            .into_iter()
            .map(|ct| {
                let remaining = ct.quantity();
                (ct, remaining)
            })
            .collect();
        slots.sort_by_key(|(ct, _)| ct.volume());
        Self { slots }
    }

    /// Returns true if no container type has an instance left.
    pub fn is_exhausted(&self) -> bool {
        !self.slots.iter().any(|(_, remaining)| Self::available(*remaining))
    }

    /// Remaining quantity of a container type (`None` = unbounded or unknown id).
    pub fn remaining(&self, id: &str) -> Option<u32> {
        self.slots
            .iter()
            .find(|(ct, _)| ct.id() == id)
            .and_then(|(_, remaining)| *remaining)
    }

    /// Opens the next container for `remaining_volume` of unplaced boxes.
    ///
    /// Returns `None` once every type is used up.
    pub fn select(&mut self, remaining_volume: i64) -> Option<ContainerType> {
        let idx = self
            .slots
            .iter()
            .position(|(ct, remaining)| {
                Self::available(*remaining) && ct.volume() >= remaining_volume
            })
            .or_else(|| {
                self.slots
                    .iter()
                    .rposition(|(_, remaining)| Self::available(*remaining))
            })?;

        let (ct, remaining) = &mut self.slots[idx];
        if let Some(n) = remaining {
            *n -= 1;
        }
        Some(ct.clone())
    }

    fn available(remaining: Option<u32>) -> bool {
        remaining != Some(0)
    }
}
