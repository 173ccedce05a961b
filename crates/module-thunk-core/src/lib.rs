//! module-thunk core
//!
//! Normalizes "module thunks" into a single value. A module thunk is any of:
//! - a plain value
//! - a factory invoked with an argument list
//! - a promise of a value
//! - a module-export wrapper (`{ default: x }` or `{ someName: x }`)
//!
//! Plugin and configuration systems can accept any of these shapes without
//! asking callers to detect and unwrap each one by hand.
//!
//! ## Resolution
//!
//! ```rust
//! use module_thunk_core::{resolve_module_thunk, ResolveOptions, Value};
//!
//! // A plugin module exporting its handler under an arbitrary name
//! let module = Value::object([("version", Value::from(2)), ("handler", Value::from("run"))]);
//! let loader = Value::function(move |_args| Ok(module.clone()));
//!
//! let options = ResolveOptions::new().with_target(|v| v.as_str().is_some());
//! let resolved = resolve_module_thunk(loader, &options).unwrap();
//! assert_eq!(resolved.ready(), Some(&Value::from("run")));
//! ```
//!
//! Asynchronous inputs yield [`Resolution::Pending`], which can be awaited:
//!
//! ```rust,ignore
//! let module = Value::promise(async { Ok(Value::default_export(plugin)) });
//! let plugin = resolve_module_thunk(module, &options)?.await?;
//! ```

pub mod error;
pub mod types;
pub mod resolver;
pub mod convert;
pub mod logging;

// Re-export commonly used types
pub use error::{ResolveError, ResolveResult};

pub use types::{Factory, ModuleThunk, Object, Promise, Value, ValueKind};

pub use resolver::{
    resolve_module_thunk, resolve_module_value,
    module_thunk_resolver, module_value_resolver, Memoized,
    ResolveOptions, TargetPredicate, Resolution,
    is_array, is_default_export_module, is_promise, kind_predicate, target_predicate,
};

pub use convert::{ConversionError, ConversionResult};
