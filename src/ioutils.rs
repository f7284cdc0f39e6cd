use crate::error::{Error, Result};

/// Reads everything from a reader into a string.
pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

/// Parses a string into a JSON object, rejecting non-object payloads.
pub fn parse_string_to_json(
    buf: &str,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    let value: serde_json::Value = serde_json::from_str(buf)?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(Error::Other(anyhow::anyhow!(
            "expected a JSON object of answers, got: {other}"
        ))),
    }
}
