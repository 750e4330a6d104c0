//! Container types.

use u_loading_core::geometry::{checked_volume, volume, Vec3};
use u_loading_core::{Error, Result};

/// A container type that boxes are loaded into.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerType {
    /// Unique identifier.
    id: String,

    /// Inner dimensions (length, width, height).
    dimensions: Vec3,

    /// Maximum total weight allowed. `None` means unconstrained.
    payload: Option<f64>,

    /// Number of available instances. `None` means unbounded.
    quantity: Option<u32>,
}

impl ContainerType {
    /// Creates a new container type with unconstrained payload and
    /// unbounded quantity.
    pub fn new(id: impl Into<String>, length: i64, width: i64, height: i64) -> Self {
        Self {
            id: id.into(),
            dimensions: Vec3::new(length, width, height),
            payload: None,
            quantity: None,
        }
    }

    /// Sets the maximum payload.
    pub fn with_payload(mut self, payload: f64) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Sets the number of available instances.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Returns the id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the inner dimensions.
    pub fn dimensions(&self) -> &Vec3 {
        &self.dimensions
    }

    /// Returns the maximum payload.
    pub fn payload(&self) -> Option<f64> {
        self.payload
    }

    /// Returns the number of available instances.
    pub fn quantity(&self) -> Option<u32> {
        self.quantity
    }

    /// Returns the inner volume.
    pub fn volume(&self) -> i64 {
        volume(&self.dimensions)
    }

    /// Validates the container type.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.iter().any(|&d| d <= 0) {
            return Err(Error::InvalidContainerType(format!(
                "All dimensions for '{}' must be positive",
                self.id
            )));
        }

        if checked_volume(&self.dimensions).is_none() {
            return Err(Error::InvalidContainerType(format!(
                "Volume of '{}' overflows",
                self.id
            )));
        }

        if let Some(payload) = self.payload {
            if !payload.is_finite() || payload <= 0.0 {
                return Err(Error::InvalidContainerType(format!(
                    "Payload for '{}' must be positive",
                    self.id
                )));
            }
        }

        Ok(())
    }
}
