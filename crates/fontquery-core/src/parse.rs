/// Parsing of captured JSON into a [`Dataset`].
///
/// The document is first read into a [`serde_json::Value`] and then walked
/// field by field, so a missing or mistyped field is reported with its exact
/// path (`fonts[3].alias`) rather than serde's positional message. Unknown
/// fields are ignored.
use serde_json::{Map, Value};

use crate::alias::AliasTag;
use crate::error::DatasetError;
use crate::record::{Dataset, Distribution, Pattern, ResolutionRecord};

/// Path used when the document root itself has the wrong shape.
const ROOT: &str = "(root)";

/// Parses a captured dataset from JSON text.
///
/// # Errors
///
/// - [`DatasetError::InvalidJson`] when `json` is not valid JSON.
/// - [`DatasetError::MalformedDataset`] when a required envelope or record
///   field is absent or has the wrong type.
pub fn parse_dataset(json: &str) -> Result<Dataset, DatasetError> {
    let value: Value = serde_json::from_str(json).map_err(|e| DatasetError::InvalidJson {
        line: e.line(),
        column: e.column(),
        detail: e.to_string(),
    })?;
    dataset_from_value(&value)
}

/// Builds a [`Dataset`] from an already-parsed JSON value.
///
/// # Errors
///
/// Returns [`DatasetError::MalformedDataset`] naming the first offending field.
pub fn dataset_from_value(value: &Value) -> Result<Dataset, DatasetError> {
    let root = value
        .as_object()
        .ok_or_else(|| DatasetError::malformed(ROOT, "an object"))?;

    let id = required_str(root, "id", "id")?;
    let version_id = required_str(root, "version_id", "version_id")?;
    let pattern = match root.get("pattern") {
        Some(Value::Null) => None,
        Some(Value::String(s)) => Some(Pattern::from(s.as_str())),
        None
        | Some(Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_)) => {
            return Err(DatasetError::malformed("pattern", "a string or null"));
        }
    };
    let fq_id = required_str(root, "fq_id", "fq_id")?;

    let fonts = root
        .get("fonts")
        .and_then(Value::as_array)
        .ok_or_else(|| DatasetError::malformed("fonts", "an array"))?;

    let records = fonts
        .iter()
        .enumerate()
        .map(|(i, v)| record_from_value(i, v))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        distribution = %id,
        release = %version_id,
        records = records.len(),
        "parsed dataset"
    );

    Ok(Dataset {
        distribution: Distribution { id, version_id },
        pattern,
        fq_id,
        fonts: records,
    })
}

fn record_from_value(index: usize, value: &Value) -> Result<ResolutionRecord, DatasetError> {
    let path = format!("fonts[{index}]");
    let obj = value
        .as_object()
        .ok_or_else(|| DatasetError::malformed(path.clone(), "an object"))?;

    let field = |name: &str| required_str(obj, name, &format!("{path}.{name}"));

    Ok(ResolutionRecord {
        language: field("lang")?,
        display_name: field("lang_name")?,
        alias: AliasTag::from(field("alias")?.as_str()),
        file: field("file")?,
        family: field("family")?,
        style: field("style")?,
    })
}

fn required_str(obj: &Map<String, Value>, key: &str, path: &str) -> Result<String, DatasetError> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| DatasetError::malformed(path, "a string"))
}
