//! JSON -> attribute value conversion

use std::collections::BTreeMap;

use super::CliError;

/// Read attribute values from a JSON object of `"path": number` pairs.
///
/// Numeric strings are accepted too, since some control systems report
/// scalars as text.
pub fn values_from_json(json: &str) -> Result<BTreeMap<String, f64>, CliError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    let serde_json::Value::Object(obj) = value else {
        return Err(CliError::InvalidValues(
            "expected a JSON object mapping attribute paths to numbers".to_string(),
        ));
    };

    obj.into_iter()
        .map(|(path, v)| {
            let number = match &v {
                serde_json::Value::Number(n) => n.as_f64(),
                serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            match number {
                Some(n) => Ok((path, n)),
                None => Err(CliError::InvalidValues(format!(
                    "value for '{path}' is not a number: {v}"
                ))),
            }
        })
        .collect()
}
