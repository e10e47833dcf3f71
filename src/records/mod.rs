pub mod args;
pub mod errors;

use crate::assets::AssetSource;
use crate::error::FlagGenError;
use errors::RecordError;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SOURCE: &str = "/source/flag-types.json";

/// One kind of command-line flag to generate code for.
///
/// Only `name` and `type` are required: they become Go identifiers and type
/// names in every template, so an empty one would render code that does not
/// compile. Every other key falls back to its empty value when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagTypeRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    /// Supports a default value.
    #[serde(default)]
    pub value: bool,
    /// Supports a destination pointer.
    #[serde(default)]
    pub dest: bool,
    #[serde(default)]
    pub doctail: String,
    #[serde(default)]
    pub context_default: String,
    #[serde(default)]
    pub context_type: String,
    #[serde(default)]
    pub parser: String,
    #[serde(default)]
    pub parser_cast: String,
    #[serde(rename = "valueString", default)]
    pub value_string: String,
    #[serde(default)]
    pub takes_file: bool,
}

pub fn load_records(
    assets: &dyn AssetSource,
    path: &str,
) -> Result<Vec<FlagTypeRecord>, FlagGenError> {
    let asset = assets.open(path)?;
    let records = decode_records(path, asset.contents())?;
    info!("Decoded {} flag types from {}", records.len(), path);
    Ok(records)
}

pub fn decode_records(path: &str, bytes: &[u8]) -> Result<Vec<FlagTypeRecord>, RecordError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match extension {
        "json" => serde_json::from_slice(bytes).map_err(|e| RecordError::DecodeFailed {
            path: path.to_string(),
            message: e.to_string(),
        }),
        "yaml" | "yml" => serde_yaml::from_slice(bytes).map_err(|e| RecordError::DecodeFailed {
            path: path.to_string(),
            message: e.to_string(),
        }),
        _ => Err(RecordError::UnsupportedFormat(path.to_string())),
    }
}
