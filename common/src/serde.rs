use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::file_format::FileFormat;

pub type Result<T> = anyhow::Result<T>;

pub fn serialize<T: Serialize>(value: &T, format: FileFormat) -> Result<String> {
    let text = match format {
        FileFormat::Yaml => serde_yml::to_string(value)?,
        FileFormat::Json => serde_json::to_string_pretty(value)?,
    };

    Ok(text)
}

pub fn deserialize<T: DeserializeOwned>(serialized: &str, format: FileFormat) -> Result<T> {
    if serialized.trim().is_empty() {
        anyhow::bail!("input is empty");
    }

    match format {
        FileFormat::Yaml => Ok(serde_yml::from_str(serialized)?),
        FileFormat::Json => Ok(serde_json::from_str(serialized)?),
    }
}

/// Reads `path` and deserializes it in the format implied by its extension.
pub fn deserialize_from_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let format = FileFormat::from_file_name(path.to_string_lossy().as_ref())?;
    let payload = std::fs::read_to_string(path)?;

    deserialize(&payload, format)
}

pub fn serialize_to_file<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = FileFormat::from_file_name(path.to_string_lossy().as_ref())?;
    let payload = serialize(value, format)?;
    std::fs::write(path, payload)?;

    Ok(())
}
