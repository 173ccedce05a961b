//! Module thunk resolution
//!
//! A factory thunk is invoked once with its resolved argument list and the
//! result goes through [`resolve_module_value`]. Any other thunk goes there
//! directly.

use super::options::ResolveOptions;
use super::predicates::is_array;
use super::resolution::Resolution;
use super::value_resolver::resolve_module_value;
use crate::error::{ResolveError, ResolveResult};
use crate::types::{Factory, ModuleThunk, Promise, Value};
use crate::{debug_log, trace_log};

/// Resolve a module thunk into its target value, or a promise of one
///
/// Returns `Err` when a factory (or the argument thunk) fails synchronously.
/// Failures after an asynchronous argument thunk reject the returned promise
/// instead.
///
/// # Example
///
/// ```
/// use module_thunk_core::{resolve_module_thunk, ResolveOptions, Value};
///
/// let add = Value::function(|args| {
///     let total: f64 = args.iter().filter_map(Value::as_f64).sum();
///     Ok(Value::from(total))
/// });
///
/// let resolved = resolve_module_thunk(add, &ResolveOptions::new().with_args([2, 3])).unwrap();
/// assert_eq!(resolved.ready(), Some(&Value::from(5)));
/// ```
pub fn resolve_module_thunk(
    thunk: impl Into<ModuleThunk>,
    options: &ResolveOptions,
) -> ResolveResult<Resolution> {
    match thunk.into() {
        ModuleThunk::Factory(factory) => resolve_factory(factory, options),
        ModuleThunk::Async(promise) => Ok(resolve_module_value(Value::Promise(promise), options)),
        ModuleThunk::Value(value) => Ok(resolve_module_value(value, options)),
    }
}

fn resolve_factory(factory: Factory, options: &ResolveOptions) -> ResolveResult<Resolution> {
    if options.has_target_predicate() {
        let as_value = Value::Function(factory.clone());
        if options.accepts(&as_value) {
            trace_log!("Factory is the target value; not invoking it");
            return Ok(Resolution::Ready(as_value));
        }
    }

    let args = match options.args_thunk.as_ref().filter(|thunk| thunk.is_truthy()) {
        None => options.args.clone().unwrap_or_default(),
        Some(args_thunk) => match resolve_module_thunk(args_thunk.clone(), &args_thunk_options())? {
            Resolution::Ready(resolved) => spread_arguments(resolved)?,
            Resolution::Pending(pending) => {
                debug_log!("Deferring factory invocation until its arguments settle");
                let options = options.clone();
                return Ok(Resolution::Pending(Promise::new(async move {
                    let args = spread_arguments(pending.await?)?;
                    invoke(&factory, args, &options)?.await
                })));
            }
        },
    };

    invoke(&factory, args, options)
}

/// Argument thunks must resolve to an array and get no arguments of their own
fn args_thunk_options() -> ResolveOptions {
    ResolveOptions::new().with_target(is_array)
}

/// Only arrays spread into an argument list; a string is rejected rather than
/// split into characters
fn spread_arguments(resolved: Value) -> ResolveResult<Vec<Value>> {
    match resolved {
        Value::Array(items) => Ok(items),
        other if !other.is_truthy() => Ok(Vec::new()),
        other => Err(ResolveError::invalid_arguments(other.kind())),
    }
}

fn invoke(factory: &Factory, args: Vec<Value>, options: &ResolveOptions) -> ResolveResult<Resolution> {
    debug_log!("Invoking factory with {} argument(s)", args.len());
    let produced = factory.call(args)?;
    Ok(resolve_module_value(produced, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use crate::types::ValueKind;

    fn sum() -> Value {
        Value::function(|args| {
            let total: f64 = args.iter().filter_map(Value::as_f64).sum();
            Ok(Value::from(total))
        })
    }

    /// A factory that records every argument list it receives
    fn recorder(calls: Arc<Mutex<Vec<Vec<Value>>>>) -> Value {
        Value::function(move |args| {
            calls.lock().unwrap().push(args.clone());
            Ok(Value::from(args.len()))
        })
    }

    #[test]
    fn test_factory_with_direct_args() {
        let options = ResolveOptions::new().with_args([2, 3]);
        let resolved = resolve_module_thunk(sum(), &options).unwrap();
        assert_eq!(resolved.ready(), Some(&Value::from(5)));
    }

    #[test]
    fn test_factory_without_args_gets_empty_list() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let resolved = resolve_module_thunk(recorder(calls.clone()), &ResolveOptions::new()).unwrap();

        assert_eq!(resolved.ready(), Some(&Value::from(0)));
        assert_eq!(*calls.lock().unwrap(), vec![Vec::<Value>::new()]);
    }

    #[test]
    fn test_factory_treated_as_target() {
        let invoked = Arc::new(AtomicUsize::new(0));
        let counter = invoked.clone();
        let factory = Value::function(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Value::Null)
        });
        let options = ResolveOptions::new().with_target(|v| v.kind() == ValueKind::Function);

        let resolved = resolve_module_thunk(factory.clone(), &options).unwrap();
        assert_eq!(resolved.ready(), Some(&factory));
        assert_eq!(invoked.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_factory_result_is_unwrapped() {
        let factory = Value::function(|_| Ok(Value::default_export("plugin")));
        let options = ResolveOptions::new().with_target(|v| v.as_str() == Some("plugin"));

        let resolved = resolve_module_thunk(factory, &options).unwrap();
        assert_eq!(resolved.ready(), Some(&Value::from("plugin")));
    }

    #[test]
    fn test_non_callable_delegates_to_value_resolver() {
        let options = ResolveOptions::new().with_target(|v| v.as_f64() == Some(2.0));
        let resolved = resolve_module_thunk(Value::object([("a", 1), ("b", 2)]), &options).unwrap();
        assert_eq!(resolved.ready(), Some(&Value::from(2)));

        let resolved = resolve_module_thunk(Value::from("plain"), &ResolveOptions::new()).unwrap();
        assert_eq!(resolved.ready(), Some(&Value::from("plain")));
    }

    #[test]
    fn test_sync_args_thunk_overrides_args() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let options = ResolveOptions::new()
            .with_args([1])
            .with_args_thunk(Value::array(["x", "y"]));

        let resolved = resolve_module_thunk(recorder(calls.clone()), &options).unwrap();
        assert_eq!(resolved.ready(), Some(&Value::from(2)));
        assert_eq!(*calls.lock().unwrap(), vec![vec![Value::from("x"), Value::from("y")]]);
    }

    #[test]
    fn test_args_thunk_factory_is_called_without_arguments() {
        let seen = Arc::new(Mutex::new(None));
        let seen_by_thunk = seen.clone();
        let args_thunk = Value::function(move |args| {
            *seen_by_thunk.lock().unwrap() = Some(args.len());
            Ok(Value::default_export(Value::array([4, 5])))
        });
        let options = ResolveOptions::new()
            .with_args([100, 200, 300])
            .with_args_thunk(args_thunk);

        let resolved = resolve_module_thunk(sum(), &options).unwrap();
        assert_eq!(resolved.ready(), Some(&Value::from(9)));
        assert_eq!(*seen.lock().unwrap(), Some(0));
    }

    #[test]
    fn test_falsy_args_thunk_is_ignored() {
        let options = ResolveOptions::new()
            .with_args([1, 1])
            .with_args_thunk(Value::Undefined);
        let resolved = resolve_module_thunk(sum(), &options).unwrap();
        assert_eq!(resolved.ready(), Some(&Value::from(2)));
    }

    #[test]
    fn test_args_thunk_resolving_to_nothing_means_no_args() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let options = ResolveOptions::new()
            .with_args([1, 2])
            .with_args_thunk(Value::function(|_| Ok(Value::Null)));

        let resolved = resolve_module_thunk(recorder(calls.clone()), &options).unwrap();
        assert_eq!(resolved.ready(), Some(&Value::from(0)));
    }

    #[test]
    fn test_non_array_args_are_rejected() {
        let options = ResolveOptions::new().with_args_thunk(Value::from(5));
        assert_eq!(
            resolve_module_thunk(sum(), &options),
            Err(ResolveError::invalid_arguments(ValueKind::Number))
        );
    }

    #[test]
    fn test_string_args_are_not_spread() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let options = ResolveOptions::new().with_args_thunk(Value::from("ab"));

        assert_eq!(
            resolve_module_thunk(recorder(calls.clone()), &options),
            Err(ResolveError::invalid_arguments(ValueKind::String))
        );
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_sync_factory_failure_is_returned() {
        let failing = Value::function(|_| Err(ResolveError::factory("boom")));
        assert_eq!(
            resolve_module_thunk(failing, &ResolveOptions::new()),
            Err(ResolveError::factory("boom"))
        );

        let options = ResolveOptions::new()
            .with_args_thunk(Value::function(|_| Err(ResolveError::factory("bad args"))));
        assert_eq!(
            resolve_module_thunk(sum(), &options),
            Err(ResolveError::factory("bad args"))
        );
    }

    #[tokio::test]
    async fn test_async_args_thunk_is_spread() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let options = ResolveOptions::new().with_args_thunk(Promise::resolved(Value::array([1, 2, 3])));

        let resolution = resolve_module_thunk(recorder(calls.clone()), &options).unwrap();
        assert!(resolution.is_pending());
        // Not invoked until the arguments settle
        assert!(calls.lock().unwrap().is_empty());

        assert_eq!(resolution.await, Ok(Value::from(3)));
        assert_eq!(
            *calls.lock().unwrap(),
            vec![vec![Value::from(1), Value::from(2), Value::from(3)]]
        );
    }

    #[tokio::test]
    async fn test_async_factory_result_is_flattened() {
        let factory = Value::function(|args| {
            let first = args.into_iter().next().unwrap_or_default();
            Ok(Value::promise(async move { Ok(Value::object([("handler", first)])) }))
        });
        let options = ResolveOptions::new()
            .with_args(["h"])
            .with_target(|v| v.as_str() == Some("h"));

        let resolution = resolve_module_thunk(factory, &options).unwrap();
        assert_eq!(resolution.await, Ok(Value::from("h")));
    }

    #[tokio::test]
    async fn test_async_failure_becomes_rejection() {
        let failing = Value::function(|_| Err(ResolveError::factory("late boom")));
        let options = ResolveOptions::new().with_args_thunk(Promise::resolved(Value::array([1])));

        let resolution = resolve_module_thunk(failing, &options).unwrap();
        assert_eq!(resolution.await, Err(ResolveError::factory("late boom")));

        let options = ResolveOptions::new()
            .with_args_thunk(Promise::rejected(ResolveError::rejected("no args")));
        let resolution = resolve_module_thunk(sum(), &options).unwrap();
        assert_eq!(resolution.await, Err(ResolveError::rejected("no args")));
    }

    #[tokio::test]
    async fn test_async_thunk_resolves_through_value_resolver() {
        let thunk = Promise::resolved(Value::default_export(Value::from(1)));
        let options = ResolveOptions::new().with_target(|v| v.as_f64().is_some());

        let resolution = resolve_module_thunk(thunk, &options).unwrap();
        assert_eq!(resolution.await, Ok(Value::from(1)));
    }
}
