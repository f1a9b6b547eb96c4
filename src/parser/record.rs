use crate::error::{Result, StatsError};
use crate::types::{StatValue, StatsRecord, ALL_STATS_KEY, TOOL_USAGE_KEY};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Load one `user_stats.json` file into a record of sorted fields and values
pub fn load_record(path: &Path) -> Result<StatsRecord> {
    let data = std::fs::read(path).map_err(|source| StatsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let record = parse_record_bytes(&data, path)?;
    debug!(
        path = %path.display(),
        fields = record.len(),
        "loaded stats record"
    );
    Ok(record)
}

/// Parse stats JSON from memory. `origin` is only used in error messages.
pub fn parse_record_bytes(data: &[u8], origin: &Path) -> Result<StatsRecord> {
    let document: Value = serde_json::from_slice(data).map_err(|source| StatsError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    record_from_document(&document, origin)
}

fn record_from_document(document: &Value, origin: &Path) -> Result<StatsRecord> {
    let stats = document
        .get(ALL_STATS_KEY)
        .ok_or_else(|| StatsError::schema(origin, format!("missing '{ALL_STATS_KEY}' key")))?;

    let stats = stats.as_object().ok_or_else(|| {
        StatsError::schema(origin, format!("'{ALL_STATS_KEY}' is not an object"))
    })?;

    let mut fields: Vec<String> = stats
        .keys()
        .filter(|key| key.as_str() != TOOL_USAGE_KEY)
        .cloned()
        .collect();
    fields.sort();

    let mut values = Vec::with_capacity(fields.len());
    for field in &fields {
        let raw = stats.get(field).ok_or_else(|| {
            StatsError::schema(origin, format!("field '{field}' vanished during lookup"))
        })?;
        let value = StatValue::from_json(raw).ok_or_else(|| {
            StatsError::schema(origin, format!("field '{field}' is not a scalar value"))
        })?;
        values.push(value);
    }

    Ok(StatsRecord { fields, values })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<StatsRecord> {
        parse_record_bytes(json.as_bytes(), Path::new("test.json"))
    }

    #[test]
    fn test_fields_sorted_and_tool_usage_dropped() {
        let record = parse(
            r#"{"all_stats": {"b": 2, "a": 1, "tool_usage": {"extruder_0": {"mm": 4}}}}"#,
        )
        .unwrap();
        assert_eq!(record.fields, vec!["a", "b"]);
        assert_eq!(
            record.values,
            vec![StatValue::Integer(1), StatValue::Integer(2)]
        );
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let record = parse(r#"{"all_stats": {"beta": 1, "Zeta": 2, "alpha": 3}}"#).unwrap();
        assert_eq!(record.fields, vec!["Zeta", "alpha", "beta"]);
        assert_eq!(
            record.values,
            vec![
                StatValue::Integer(2),
                StatValue::Integer(3),
                StatValue::Integer(1)
            ]
        );
    }

    #[test]
    fn test_mixed_scalar_types() {
        let record = parse(
            r#"{"all_stats": {"n": null, "ok": true, "mm": 12.5, "name": "job"}}"#,
        )
        .unwrap();
        assert_eq!(
            record.values,
            vec![
                StatValue::Float(12.5),
                StatValue::Null,
                StatValue::Text("job".to_string()),
                StatValue::Boolean(true),
            ]
        );
    }

    #[test]
    fn test_other_top_level_keys_ignored() {
        let record = parse(r#"{"version": 3, "all_stats": {"x": 1}}"#).unwrap();
        assert_eq!(record.fields, vec!["x"]);
    }

    #[test]
    fn test_missing_all_stats_is_schema_error() {
        let err = parse(r#"{"stats": {"a": 1}}"#).unwrap_err();
        assert!(matches!(err, StatsError::Schema { .. }), "{err:?}");
    }

    #[test]
    fn test_all_stats_not_object_is_schema_error() {
        let err = parse(r#"{"all_stats": [1, 2]}"#).unwrap_err();
        assert!(matches!(err, StatsError::Schema { .. }), "{err:?}");
    }

    #[test]
    fn test_nested_value_is_schema_error() {
        let err = parse(r#"{"all_stats": {"a": {"b": 1}}}"#).unwrap_err();
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse(r#"{"all_stats": {"a": 1,}"#).unwrap_err();
        assert!(matches!(err, StatsError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_record(Path::new("definitely/not/here/user_stats.json")).unwrap_err();
        assert!(matches!(err, StatsError::Read { .. }), "{err:?}");
    }

    #[test]
    fn test_empty_stats_map() {
        let record = parse(r#"{"all_stats": {"tool_usage": {}}}"#).unwrap();
        assert!(record.is_empty());
    }
}
