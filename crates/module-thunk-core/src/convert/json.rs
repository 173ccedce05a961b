//! JSON documents

use serde_json::{Map, Number, Value as JsonValue};

use super::{ConversionError, ConversionResult};
use crate::types::{Object, Value};

impl Value {
    /// Parse a JSON document into a value
    pub fn from_json_str(source: &str) -> ConversionResult<Self> {
        let json: JsonValue = serde_json::from_str(source)?;
        Ok(json.into())
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl TryFrom<Value> for JsonValue {
    type Error = ConversionError;

    /// `undefined` becomes `null` in arrays and is skipped in objects;
    /// functions and promises have no document form.
    fn try_from(value: Value) -> ConversionResult<Self> {
        let kind = value.kind();
        Ok(match value {
            Value::Undefined | Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(n) => number(n),
            Value::String(s) => JsonValue::String(s),
            Value::Array(items) => JsonValue::Array(
                items
                    .into_iter()
                    .map(JsonValue::try_from)
                    .collect::<ConversionResult<Vec<_>>>()?,
            ),
            Value::Object(object) => {
                let mut map = Map::new();
                for (key, field) in object {
                    if field.is_undefined() {
                        continue;
                    }
                    map.insert(key, JsonValue::try_from(field)?);
                }
                JsonValue::Object(map)
            }
            Value::Function(_) | Value::Promise(_) => {
                return Err(ConversionError::Unrepresentable { kind });
            }
        })
    }
}

/// Whole numbers serialize without a fraction; non-finite numbers become `null`
fn number(n: f64) -> JsonValue {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return JsonValue::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map(JsonValue::Number).unwrap_or(JsonValue::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Promise, ValueKind};
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_key_order() {
        let value = Value::from(json!({ "zeta": 1, "alpha": [true, null, "s"] }));
        let object = value.as_object().unwrap();

        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(
            object.get("alpha"),
            Some(&Value::array([Value::from(true), Value::Null, Value::from("s")]))
        );
    }

    #[test]
    fn test_from_json_str() {
        let value = Value::from_json_str(r#"{ "default": { "name": "plugin" } }"#).unwrap();
        assert!(crate::is_default_export_module(&value));

        assert!(matches!(Value::from_json_str("{ nope"), Err(ConversionError::Json(_))));
    }

    #[test]
    fn test_to_json() {
        let value = Value::object([
            ("count", Value::from(3)),
            ("ratio", Value::from(0.5)),
            ("missing", Value::Undefined),
            ("list", Value::array([Value::Undefined, Value::from(f64::NAN)])),
        ]);

        let json = JsonValue::try_from(value).unwrap();
        assert_eq!(json, json!({ "count": 3, "ratio": 0.5, "list": [null, null] }));
        assert_eq!(json.to_string(), r#"{"count":3,"ratio":0.5,"list":[null,null]}"#);
    }

    #[test]
    fn test_callables_are_unrepresentable() {
        let err = JsonValue::try_from(Value::default_export(Value::function(|_| Ok(Value::Null))))
            .unwrap_err();
        assert!(matches!(err, ConversionError::Unrepresentable { kind: ValueKind::Function }));

        let err = JsonValue::try_from(Value::from(Promise::resolved(1))).unwrap_err();
        assert!(matches!(err, ConversionError::Unrepresentable { kind: ValueKind::Promise }));
    }
}
