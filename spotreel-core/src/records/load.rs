use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    foundation::error::{SpotreelError, SpotreelResult},
    text::entities::decode_entities_in_value,
};

/// Extract the raw record list from a content API payload.
///
/// Accepts a paged response (`{"list": [...], "pageInfo": ...}`) or a bare
/// array.
pub fn load_records(payload: &Value) -> SpotreelResult<Vec<Value>> {
    match payload {
        Value::Array(items) => Ok(items.clone()),
        Value::Object(fields) => match fields.get("list") {
            Some(Value::Array(items)) => Ok(items.clone()),
            Some(_) => Err(SpotreelError::validation(
                "records payload field 'list' must be an array",
            )),
            None => Err(SpotreelError::validation(
                "records payload must be an array or an object with a 'list' array",
            )),
        },
        _ => Err(SpotreelError::validation(
            "records payload must be an array or an object with a 'list' array",
        )),
    }
}

/// Read and parse a payload file, then [`load_records`].
pub fn load_records_from_path(path: &Path) -> SpotreelResult<Vec<Value>> {
    let text = std::fs::read_to_string(path).map_err(|e| SpotreelError::io(path, e))?;
    let payload: Value = serde_json::from_str(&text).map_err(|e| {
        SpotreelError::serde(format!("parse records '{}': {e}", path.display()))
    })?;
    let records = load_records(&payload)?;
    tracing::info!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

/// Entity-decode a raw record and deserialize it.
pub fn decode_record<T: DeserializeOwned>(raw: &Value) -> SpotreelResult<T> {
    serde_json::from_value(decode_entities_in_value(raw))
        .map_err(|e| SpotreelError::serde(e.to_string()))
}

/// [`decode_record`] over a list; the error names the first failing index.
pub fn decode_records<T: DeserializeOwned>(raws: &[Value]) -> SpotreelResult<Vec<T>> {
    raws.iter()
        .enumerate()
        .map(|(i, raw)| {
            decode_record(raw).map_err(|e| SpotreelError::serde(format!("record {i}: {e}")))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/records/load.rs"]
mod tests;
