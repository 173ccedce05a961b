//! YAML documents

use serde_yaml::Value as YamlValue;

use super::{ConversionError, ConversionResult};
use crate::types::{Object, Value};

impl Value {
    /// Parse a YAML document into a value
    pub fn from_yaml_str(source: &str) -> ConversionResult<Self> {
        let yaml: YamlValue = serde_yaml::from_str(source)?;
        Value::try_from(yaml)
    }
}

impl TryFrom<YamlValue> for Value {
    type Error = ConversionError;

    /// Scalar keys are stringified and tags are dropped
    fn try_from(yaml: YamlValue) -> ConversionResult<Self> {
        Ok(match yaml {
            YamlValue::Null => Value::Null,
            YamlValue::Bool(b) => Value::Bool(b),
            YamlValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            YamlValue::String(s) => Value::String(s),
            YamlValue::Sequence(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<ConversionResult<Vec<_>>>()?,
            ),
            YamlValue::Mapping(mapping) => {
                let mut object = Object::new();
                for (key, value) in mapping {
                    object.insert(mapping_key(key)?, Value::try_from(value)?);
                }
                Value::Object(object)
            }
            YamlValue::Tagged(tagged) => Value::try_from(tagged.value)?,
        })
    }
}

fn mapping_key(key: YamlValue) -> ConversionResult<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => mapping_key(tagged.value),
        other => Err(ConversionError::UnsupportedKey(format!("{:?}", other))),
    }
}
