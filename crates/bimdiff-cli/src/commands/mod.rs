pub mod compare;
pub mod lineage;

use bimdiff_core::errors::{BimDiffError, ExError, ExErrorKind};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Read and decode a JSON input file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ExError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("read_input")
            .with_entity_id(path.display().to_string())
            .with_message(e.to_string())
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        ExError::from(BimDiffError::from(e))
            .with_op("read_input")
            .with_entity_id(path.display().to_string())
    })
}

/// Encode a value as pretty JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ExError::from(BimDiffError::from(e)).with_op("write_output"))
}

/// Write to `output`, or stdout when absent.
pub fn emit(content: &str, output: Option<&PathBuf>) -> Result<(), ExError> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("write_output")
                .with_entity_id(path.display().to_string())
                .with_message(e.to_string())
        }),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}
