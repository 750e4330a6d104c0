//! Reading input documents and writing results.

use crate::document::{InputDocument, OutputDocument};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use u_loading::{Input, Output};

/// Errors that can occur when reading or writing documents.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to access file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] u_loading::Error),
}

/// Parser for loading problem documents.
#[derive(Debug, Default)]
pub struct DocumentParser;

impl DocumentParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses and validates an input file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Input, ParseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let input = self.parse_json(&content)?;
        log::info!("Successfully validated input \"{}\"", path.display());
        Ok(input)
    }

    /// Parses and validates an input document.
    pub fn parse_json(&self, json: &str) -> Result<Input, ParseError> {
        let document: InputDocument = serde_json::from_str(json)?;
        Ok(document.to_input()?)
    }

    /// Serializes a result as pretty-printed JSON.
    pub fn to_json(&self, output: &Output) -> Result<String, ParseError> {
        Ok(serde_json::to_string_pretty(&OutputDocument::from(output))?)
    }

    /// Writes a result to `path`, creating parent directories.
    pub fn write_file(&self, output: &Output, path: impl AsRef<Path>) -> Result<(), ParseError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json(output)?)?;
        Ok(())
    }
}

/// Default result path for an input file: `result/result-<file name>`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.json".to_string());
    Path::new("result").join(format!("result-{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_loading::Error;

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "box_types": [{"id": "bt", "lx": 5, "ly": 5, "lz": 5}],
            "container_types": [{"id": "ct", "lx": 10, "ly": 10, "lz": 10}],
            "boxes": [{"id": "b1", "type": "bt"}, {"id": "b2", "type": "bt"}]
        }"#;

        let input = DocumentParser::new().parse_json(json).unwrap();
        assert_eq!(input.boxes().len(), 2);
        assert_eq!(input.container_types()[0].id(), "ct");
    }

    #[test]
    fn test_malformed_json() {
        let err = DocumentParser::new().parse_json("{ not json").unwrap_err();
        assert!(matches!(err, ParseError::JsonError(_)));
    }

    #[test]
    fn test_missing_field() {
        let json = r#"{"box_types": [], "container_types": []}"#;
        let err = DocumentParser::new().parse_json(json).unwrap_err();
        assert!(matches!(err, ParseError::JsonError(_)));
    }

    #[test]
    fn test_dangling_reference() {
        let json = r#"{
            "box_types": [{"id": "bt", "lx": 5, "ly": 5, "lz": 5}],
            "container_types": [{"id": "ct", "lx": 10, "ly": 10, "lz": 10}],
            "boxes": [{"id": "b1", "type": "missing"}]
        }"#;

        let err = DocumentParser::new().parse_json(json).unwrap_err();
        match err {
            ParseError::InvalidInput(Error::DanglingReference { box_id, type_id }) => {
                assert_eq!(box_id, "b1");
                assert_eq!(type_id, "missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_weight_under_payload() {
        let json = r#"{
            "box_types": [{"id": "bt", "lx": 5, "ly": 5, "lz": 5}],
            "container_types": [{"id": "ct", "lx": 10, "ly": 10, "lz": 10, "payload": 100}],
            "boxes": [{"id": "b1", "type": "bt"}]
        }"#;

        let err = DocumentParser::new().parse_json(json).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidInput(Error::MissingWeight(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = DocumentParser::new()
            .parse_file("/nonexistent/input.json")
            .unwrap_err();
        assert!(matches!(err, ParseError::IoError(_)));
    }

    #[test]
    fn test_output_json_is_reproducible() {
        let json = r#"{
            "box_types": [
                {"id": "a", "lx": 3, "ly": 4, "lz": 5, "orients": ["XYZ", "ZYX", "YZX"]},
                {"id": "b", "lx": 2, "ly": 2, "lz": 2}
            ],
            "container_types": [
                {"id": "s", "lx": 8, "ly": 8, "lz": 8, "payload": 300, "quantity": 1},
                {"id": "l", "lx": 12, "ly": 10, "lz": 9, "payload": 900}
            ],
            "boxes": [
                {"id": "b1", "type": "a", "weight": 12.5, "group": "g1"},
                {"id": "b2", "type": "b", "weight": 3.25},
                {"id": "b3", "type": "a", "weight": 40.0},
                {"id": "b4", "type": "b", "weight": 7.0, "group": "g2"},
                {"id": "b5", "type": "a", "weight": 18.75},
                {"id": "b6", "type": "b", "weight": 1.5}
            ]
        }"#;

        let parser = DocumentParser::new();
        let render = || {
            let output = u_loading::run(parser.parse_json(json).unwrap());
            parser.to_json(&output).unwrap()
        };

        let first = render();
        assert_eq!(first, render());
        assert!(first.contains("\"volume_rate\""));
        assert!(first.contains("\"weight_rate\""));
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("data/br_json/BR1-0.json")),
            PathBuf::from("result/result-BR1-0.json")
        );
    }
}
