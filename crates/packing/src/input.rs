//! Problem input and its fallible builder.
//!
//! All cross references are resolved once here. After `build()` succeeds
//! every box refers to a box type in the catalog, ids are unique and weights
//! are present wherever a payload limit could apply.

use crate::boundary::ContainerType;
use crate::geometry::{BoxItem, BoxType, BoxTypeCatalog};
use std::collections::HashSet;
use u_loading_core::{Error, Result};

/// A box as supplied by the caller, referencing its type by id.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSpec {
    /// Unique box id.
    pub id: String,
    /// Id of the box type.
    pub type_id: String,
    /// Weight (`None` = not weight-constrained).
    pub weight: Option<f64>,
    /// Optional group label.
    pub group: Option<String>,
}

impl ItemSpec {
    /// Creates a box spec without weight or group.
    pub fn new(id: impl Into<String>, type_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_id: type_id.into(),
            weight: None,
            group: None,
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
}

/// A fully resolved loading problem.
#[derive(Debug, Clone)]
pub struct Input {
    catalog: BoxTypeCatalog,
    container_types: Vec<ContainerType>,
    boxes: Vec<BoxItem>,
}

impl Input {
    /// Starts building an input.
    pub fn builder() -> InputBuilder {
        InputBuilder::default()
    }

    /// Returns the box type catalog.
    pub fn catalog(&self) -> &BoxTypeCatalog {
        &self.catalog
    }

    /// Returns the container types in declaration order.
    pub fn container_types(&self) -> &[ContainerType] {
        &self.container_types
    }

    /// Returns the boxes in declaration order.
    pub fn boxes(&self) -> &[BoxItem] {
        &self.boxes
    }

    /// Total volume of all boxes.
    pub fn total_box_volume(&self) -> i64 {
        self.boxes.iter().map(BoxItem::volume).sum()
    }

    pub(crate) fn into_parts(self) -> (BoxTypeCatalog, Vec<ContainerType>, Vec<BoxItem>) {
        (self.catalog, self.container_types, self.boxes)
    }
}

/// Builder for [`Input`].
#[derive(Debug, Clone, Default)]
pub struct InputBuilder {
    box_types: Vec<BoxType>,
    container_types: Vec<ContainerType>,
    items: Vec<ItemSpec>,
}

impl InputBuilder {
    /// Adds a box type.
    pub fn box_type(mut self, box_type: BoxType) -> Self {
        self.box_types.push(box_type);
        self
    }

    /// Adds several box types.
    pub fn box_types(mut self, box_types: impl IntoIterator<Item = BoxType>) -> Self {
        self.box_types.extend(box_types);
        self
    }

    /// Adds a container type.
    pub fn container_type(mut self, container_type: ContainerType) -> Self {
        self.container_types.push(container_type);
        self
    }

    /// Adds several container types.
    pub fn container_types(
        mut self,
        container_types: impl IntoIterator<Item = ContainerType>,
    ) -> Self {
        self.container_types.extend(container_types);
        self
    }

    /// Adds a box.
    pub fn item(mut self, item: ItemSpec) -> Self {
        self.items.push(item);
        self
    }

    /// Adds several boxes.
    pub fn items(mut self, items: impl IntoIterator<Item = ItemSpec>) -> Self {
        self.items.extend(items);
        self
    }

    /// Validates and resolves the input, failing on the first problem found.
    pub fn build(self) -> Result<Input> {
        if self.container_types.is_empty() {
            return Err(Error::EmptyInput("no container types provided".into()));
        }
        if self.items.is_empty() {
            return Err(Error::EmptyInput("no boxes provided".into()));
        }

        let catalog = BoxTypeCatalog::new(self.box_types)?;

        let mut container_ids = HashSet::new();
        for ct in &self.container_types {
            ct.validate()?;
            if !container_ids.insert(ct.id()) {
                return Err(Error::DuplicateId {
                    kind: "container type",
                    id: ct.id().to_string(),
                });
            }
        }

        let weight_required = self.container_types.iter().any(|ct| ct.payload().is_some());

        let mut box_ids = HashSet::new();
        let mut boxes = Vec::with_capacity(self.items.len());
        for spec in self.items {
            if !box_ids.insert(spec.id.clone()) {
                return Err(Error::DuplicateId {
                    kind: "box",
                    id: spec.id,
                });
            }

            let key = catalog
                .lookup(&spec.type_id)
                .ok_or_else(|| Error::DanglingReference {
                    box_id: spec.id.clone(),
                    type_id: spec.type_id.clone(),
                })?;

            let mut item = BoxItem::new(spec.id, key, &catalog);
            match spec.weight {
                Some(w) if !w.is_finite() || w < 0.0 => {
                    return Err(Error::InvalidBox(format!(
                        "Weight for '{}' must be a non-negative number",
                        item.id()
                    )));
                }
                Some(w) => item = item.with_weight(w),
                None if weight_required => {
                    return Err(Error::MissingWeight(item.id().to_string()));
                }
                None => {}
            }
            if let Some(group) = spec.group {
                item = item.with_group(group);
            }
            boxes.push(item);
        }

        // Fill-loop volume sums stay below this total.
        boxes
            .iter()
            .try_fold(0i64, |total, item| total.checked_add(item.volume()))
            .ok_or_else(|| Error::InvalidBox("total box volume overflows".into()))?;

        Ok(Input {
            catalog,
            container_types: self.container_types,
            boxes,
        })
    }
}
