//! Error types for U-Loading.

use thiserror::Error;

/// Result type alias for U-Loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling or packing a loading problem.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid box type definition.
    #[error("Invalid box type: {0}")]
    InvalidBoxType(String),

    /// Invalid container type definition.
    #[error("Invalid container type: {0}")]
    InvalidContainerType(String),

    /// Invalid box instance.
    #[error("Invalid box: {0}")]
    InvalidBox(String),

    /// Two entities of the same kind share an id.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId {
        /// Entity kind ("box", "box type", "container type").
        kind: &'static str,
        /// The repeated id.
        id: String,
    },

    /// A box references a box type that is not in the catalog.
    #[error("Box \"{box_id}\" references non-existent box type \"{type_id}\"")]
    DanglingReference {
        /// Box id.
        box_id: String,
        /// Unresolved box type id.
        type_id: String,
    },

    /// A box has no weight although some container type limits payload.
    #[error("Box \"{0}\" has no weight but a container type has a payload limit")]
    MissingWeight(String),

    /// Nothing to pack or nothing to pack into.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
