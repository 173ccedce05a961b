//! Module thunk classification

use super::{Factory, Promise, Value};

/// The shape of a module thunk, decided once when it enters the resolver
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleThunk {
    /// Invoked with the resolved argument list unless it is itself the target
    Factory(Factory),
    /// Awaited, then resolved as a module value
    Async(Promise),
    /// Resolved as a module value right away
    Value(Value),
}

impl ModuleThunk {
    /// Whether the thunk counts as present when used as an argument source
    pub fn is_truthy(&self) -> bool {
        match self {
            ModuleThunk::Factory(_) | ModuleThunk::Async(_) => true,
            ModuleThunk::Value(value) => value.is_truthy(),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            ModuleThunk::Factory(factory) => Value::Function(factory),
            ModuleThunk::Async(promise) => Value::Promise(promise),
            ModuleThunk::Value(value) => value,
        }
    }
}

impl From<Value> for ModuleThunk {
    fn from(value: Value) -> Self {
        match value {
            Value::Function(factory) => ModuleThunk::Factory(factory),
            Value::Promise(promise) => ModuleThunk::Async(promise),
            other => ModuleThunk::Value(other),
        }
    }
}

impl From<Factory> for ModuleThunk {
    fn from(factory: Factory) -> Self {
        ModuleThunk::Factory(factory)
    }
}

impl From<Promise> for ModuleThunk {
    fn from(promise: Promise) -> Self {
        ModuleThunk::Async(promise)
    }
}

impl From<ModuleThunk> for Value {
    fn from(thunk: ModuleThunk) -> Self {
        thunk.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(matches!(
            ModuleThunk::from(Value::function(|_| Ok(Value::Null))),
            ModuleThunk::Factory(_)
        ));
        assert!(matches!(
            ModuleThunk::from(Value::from(Promise::resolved(1))),
            ModuleThunk::Async(_)
        ));
        assert_eq!(
            ModuleThunk::from(Value::default_export(1)),
            ModuleThunk::Value(Value::default_export(1))
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(!ModuleThunk::from(Value::Undefined).is_truthy());
        assert!(!ModuleThunk::from(Value::from(0)).is_truthy());
        assert!(ModuleThunk::from(Value::array(Vec::<Value>::new())).is_truthy());
        assert!(ModuleThunk::from(Promise::resolved(Value::Null)).is_truthy());
    }

    #[test]
    fn test_round_trip_keeps_identity() {
        let factory = Factory::new(|_| Ok(Value::Null));
        let value = ModuleThunk::from(factory.clone()).into_value();
        assert_eq!(value, Value::Function(factory));
    }
}
