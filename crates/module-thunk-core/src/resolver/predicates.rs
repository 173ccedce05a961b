//! Module-shape and target predicates

use std::sync::Arc;

use super::options::TargetPredicate;
use crate::types::{Value, ValueKind};

/// True for a non-null object with a truthy `default` field
pub fn is_default_export_module(value: &Value) -> bool {
    value
        .get("default")
        .map(Value::is_truthy)
        .unwrap_or(false)
}

/// True for a pending value
pub fn is_promise(value: &Value) -> bool {
    matches!(value, Value::Promise(_))
}

/// Accepts exactly arrays; used to resolve argument thunks
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Share a closure as a [`TargetPredicate`]
pub fn target_predicate<F>(f: F) -> TargetPredicate
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A predicate accepting every value of one kind
pub fn kind_predicate(kind: ValueKind) -> TargetPredicate {
    Arc::new(move |value: &Value| value.kind() == kind)
}
