//! JSON document types for loading problems and their results.

use serde::{Deserialize, Serialize};
use u_loading::{
    BoxItem, BoxType, BoxTypeCatalog, ContainerType, Input, ItemSpec, Orientation, Output,
    PackedContainer, Result,
};

/// A box type record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxTypeRecord {
    pub id: String,
    pub lx: i64,
    pub ly: i64,
    pub lz: i64,
    /// Legal orientations in trial order.
    #[serde(default = "default_orients")]
    pub orients: Vec<Orientation>,
}

fn default_orients() -> Vec<Orientation> {
    Orientation::UPRIGHT.to_vec()
}

impl BoxTypeRecord {
    fn to_box_type(&self) -> BoxType {
        BoxType::new(self.id.clone(), self.lx, self.ly, self.lz)
            .with_orientations(self.orients.iter().copied())
    }
}

impl From<&BoxType> for BoxTypeRecord {
    fn from(box_type: &BoxType) -> Self {
        let dims = box_type.dimensions();
        Self {
            id: box_type.id().to_string(),
            lx: dims.x,
            ly: dims.y,
            lz: dims.z,
            orients: box_type.orientations().to_vec(),
        }
    }
}

/// A container type record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerTypeRecord {
    pub id: String,
    pub lx: i64,
    pub ly: i64,
    pub lz: i64,
    /// Payload limit; unlimited when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<f64>,
    /// Available instances; unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl ContainerTypeRecord {
    fn to_container_type(&self) -> ContainerType {
        let mut ct = ContainerType::new(self.id.clone(), self.lx, self.ly, self.lz);
        if let Some(payload) = self.payload {
            ct = ct.with_payload(payload);
        }
        if let Some(quantity) = self.quantity {
            ct = ct.with_quantity(quantity);
        }
        ct
    }
}

/// A box record in an input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl From<&BoxRecord> for ItemSpec {
    fn from(record: &BoxRecord) -> Self {
        ItemSpec {
            id: record.id.clone(),
            type_id: record.type_id.clone(),
            weight: record.weight,
            group: record.group.clone(),
        }
    }
}

/// Input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputDocument {
    pub box_types: Vec<BoxTypeRecord>,
    pub container_types: Vec<ContainerTypeRecord>,
    pub boxes: Vec<BoxRecord>,
}

impl InputDocument {
    /// Resolves the document into a validated [`Input`].
    pub fn to_input(&self) -> Result<Input> {
        Input::builder()
            .box_types(self.box_types.iter().map(BoxTypeRecord::to_box_type))
            .container_types(
                self.container_types
                    .iter()
                    .map(ContainerTypeRecord::to_container_type),
            )
            .items(self.boxes.iter().map(ItemSpec::from))
            .build()
    }
}

/// A packed box with its resolved position and orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacedBoxRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub orient: Orientation,
}

/// A box left out of every container. Carries no position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnpackedBoxRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// A filled container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerRecord {
    #[serde(rename = "type")]
    pub type_id: String,
    pub boxes: Vec<PlacedBoxRecord>,
    pub volume_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_rate: Option<f64>,
}

/// Output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputDocument {
    pub box_types: Vec<BoxTypeRecord>,
    pub containers: Vec<ContainerRecord>,
    pub unpacked_boxes: Vec<UnpackedBoxRecord>,
}

impl From<&Output> for OutputDocument {
    fn from(output: &Output) -> Self {
        let catalog = &output.box_types;
        Self {
            box_types: catalog.iter().map(BoxTypeRecord::from).collect(),
            containers: output
                .containers
                .iter()
                .map(|c| container_record(c, catalog))
                .collect(),
            unpacked_boxes: output
                .unpacked_boxes
                .iter()
                .map(|item| UnpackedBoxRecord {
                    id: item.id().to_string(),
                    type_id: type_id(item, catalog),
                    group: item.group().map(str::to_string),
                })
                .collect(),
        }
    }
}

fn container_record(container: &PackedContainer, catalog: &BoxTypeCatalog) -> ContainerRecord {
    ContainerRecord {
        type_id: container.container_type.id().to_string(),
        boxes: container
            .boxes
            .iter()
            .filter_map(|item| {
                let placement = item.placement()?;
                Some(PlacedBoxRecord {
                    id: item.id().to_string(),
                    type_id: type_id(item, catalog),
                    group: item.group().map(str::to_string),
                    x: placement.position.x,
                    y: placement.position.y,
                    z: placement.position.z,
                    orient: placement.orientation,
                })
            })
            .collect(),
        volume_rate: container.volume_rate,
        weight_rate: container.weight_rate,
    }
}

fn type_id(item: &BoxItem, catalog: &BoxTypeCatalog) -> String {
    catalog.get(item.box_type()).id().to_string()
}
