//! Module value resolution
//!
//! Unwraps a module value one level at a time:
//! 1. `undefined` and `null` are returned as-is
//! 2. Promises are chained: the settled value is resolved again, to any depth
//! 3. Objects and arrays are unwrapped only when a target predicate is set:
//!    the object itself, then its `default` export, then the first export
//!    accepted by the predicate
//! 4. Everything else is already a value

use super::options::ResolveOptions;
use super::predicates::is_default_export_module;
use super::resolution::Resolution;
use crate::types::{Promise, Value};
use crate::trace_log;

/// Resolve a module value into its target value, or a promise of one
///
/// Only `options.is_target_value` is consulted. The input is consumed and
/// never modified: an unresolvable object comes back exactly as it went in.
pub fn resolve_module_value(value: Value, options: &ResolveOptions) -> Resolution {
    match value {
        Value::Undefined | Value::Null => Resolution::Ready(value),
        Value::Promise(promise) => {
            trace_log!("Chaining resolution onto pending value");
            let options = options.target_only();
            Resolution::Pending(Promise::new(async move {
                let settled = promise.await?;
                resolve_module_value(settled, &options).await
            }))
        }
        Value::Object(_) | Value::Array(_) => Resolution::Ready(unwrap_exports(value, options)),
        other => Resolution::Ready(other),
    }
}

fn unwrap_exports(value: Value, options: &ResolveOptions) -> Value {
    let Some(is_target) = options.is_target_value.as_ref() else {
        return value;
    };

    if is_target(&value) {
        trace_log!("{} is the target value", value.kind());
        return value;
    }

    // The default export is trusted without checking it against the predicate
    if is_default_export_module(&value) {
        trace_log!("Unwrapping default export");
        return take_export(value, "default");
    }

    let found = match &value {
        Value::Object(object) => object
            .iter()
            .find(|(_, export)| is_target(*export))
            .map(|(key, _)| key.to_string()),
        Value::Array(items) => items.iter().position(|item| is_target(item)).map(|i| i.to_string()),
        _ => None,
    };

    // An empty export name is falsy and never counts as a match
    match found.filter(|key| !key.is_empty()) {
        Some(key) => {
            trace_log!("Found target under export {:?}", key);
            take_export(value, &key)
        }
        None => {
            trace_log!("No export of {} matched; returning it unresolved", value.kind());
            value
        }
    }
}

fn take_export(value: Value, key: &str) -> Value {
    match value {
        Value::Object(mut object) => object.remove(key).unwrap_or_default(),
        Value::Array(mut items) => match key.parse::<usize>() {
            Ok(index) if index < items.len() => items.swap_remove(index),
            _ => Value::Undefined,
        },
        _ => Value::Undefined,
    }
}
