//! Output formatting and control utilities.
//!
//! CHANGELOG:
//! - 10/16/2026 - Nested field selection (`entry.primary_url`)
//! - 10/16/2026 - Initial implementation

use serde::Serialize;
use serde_json::{json, Value};

/// Output control settings from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct OutputControls {
    pub json: bool,
    pub compact: bool,
    pub fields: Option<String>,
}

impl OutputControls {
    /// Emit data according to output controls.
    pub fn emit<T: Serialize>(&self, data: &T) -> String {
        let value = serde_json::to_value(data).unwrap_or(json!(null));

        let filtered = match self.fields {
            Some(ref fields) => filter_fields(&value, &parse_fields(fields)),
            None => value,
        };

        if self.compact {
            serde_json::to_string(&filtered).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string_pretty(&filtered).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Print data to stdout according to output controls.
    pub fn print<T: Serialize>(&self, data: &T) {
        println!("{}", self.emit(data));
    }
}

fn parse_fields(fields: &str) -> Vec<&str> {
    fields
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

/// Keep only the listed fields. A dotted name selects inside a nested object.
fn filter_fields(value: &Value, fields: &[&str]) -> Value {
    match value {
        Value::Array(arr) => Value::Array(arr.iter().map(|v| filter_fields(v, fields)).collect()),
        Value::Object(map) => {
            let mut filtered = serde_json::Map::new();
            for field in fields {
                let (head, rest) = match field.split_once('.') {
                    Some((head, rest)) => (head, Some(rest)),
                    None => (*field, None),
                };
                let Some(v) = map.get(head) else { continue };
                match rest {
                    None => {
                        filtered.insert(head.to_string(), v.clone());
                    }
                    Some(rest) => {
                        let inner = filter_fields(v, &[rest]);
                        match (filtered.get_mut(head), inner) {
                            (Some(Value::Object(existing)), Value::Object(more)) => {
                                existing.extend(more);
                            }
                            (_, inner) => {
                                filtered.insert(head.to_string(), inner);
                            }
                        }
                    }
                }
            }
            Value::Object(filtered)
        }
        _ => value.clone(),
    }
}

/// Format error as JSON.
pub fn format_error(error: &str) -> String {
    serde_json::to_string(&json!({
        "error": error,
        "success": false
    }))
    .unwrap_or_else(|_| format!(r#"{{"error":"{}"}}"#, error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_and_pretty() {
        let data = json!({"folder": "Sony - PlayStation", "entries": 3});
        let compact = OutputControls {
            compact: true,
            ..Default::default()
        };
        assert_eq!(
            compact.emit(&data),
            r#"{"entries":3,"folder":"Sony - PlayStation"}"#
        );
        assert!(OutputControls::default().emit(&data).contains('\n'));
    }

    #[test]
    fn test_field_filter_on_array() {
        let data = json!([
            {"folder": "Nintendo - Game Boy", "entries": 10, "score": 0.9},
            {"folder": "Sega - Game Gear", "entries": 4, "score": 0.5},
        ]);
        let controls = OutputControls {
            compact: true,
            fields: Some("folder, entries".to_string()),
            ..Default::default()
        };
        assert_eq!(
            controls.emit(&data),
            r#"[{"entries":10,"folder":"Nintendo - Game Boy"},{"entries":4,"folder":"Sega - Game Gear"}]"#
        );
    }

    #[test]
    fn test_nested_field_filter() {
        let data = json!({
            "outcome": "match",
            "entry": {"filename": "Tetris (World).png", "primary_url": "raw", "secondary_url": "blob"},
            "score": 96,
        });
        let controls = OutputControls {
            compact: true,
            fields: Some("outcome,entry.primary_url,entry.filename".to_string()),
            ..Default::default()
        };
        assert_eq!(
            controls.emit(&data),
            r#"{"entry":{"filename":"Tetris (World).png","primary_url":"raw"},"outcome":"match"}"#
        );
    }

    #[test]
    fn test_format_error() {
        let out: Value = serde_json::from_str(&format_error("cache missing")).unwrap();
        assert_eq!(out["error"], "cache missing");
        assert_eq!(out["success"], false);
    }
}
