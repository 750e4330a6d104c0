//! Command-line front end for U-Loading
//!
//! This crate provides:
//! - JSON document types for loading problems and results
//! - Input parsing with structural and logical validation
//! - Batch reports over a directory of inputs

mod document;
mod parser;
mod report;

pub use document::{
    BoxRecord, BoxTypeRecord, ContainerRecord, ContainerTypeRecord, InputDocument,
    OutputDocument, PlacedBoxRecord, UnpackedBoxRecord,
};
pub use parser::{default_output_path, DocumentParser, ParseError};
pub use report::{Report, ReportEntry};
