//! Module thunk resolution
//!
//! Two functions form the engine:
//! - [`resolve_module_value`] unwraps promises and export wrappers
//! - [`resolve_module_thunk`] additionally invokes factories
//!
//! [`module_value_resolver`] and [`module_thunk_resolver`] wrap them in
//! resolve-once accessors.

mod options;
mod resolution;
mod predicates;
mod value_resolver;
mod thunk_resolver;
mod memo;

pub use options::{ResolveOptions, TargetPredicate};
pub use resolution::Resolution;
pub use predicates::{is_array, is_default_export_module, is_promise, kind_predicate, target_predicate};
pub use value_resolver::resolve_module_value;
pub use thunk_resolver::resolve_module_thunk;
pub use memo::{module_thunk_resolver, module_value_resolver, Memoized};
