//! Resolution options

use std::fmt;
use std::sync::Arc;

use crate::types::{ModuleThunk, Value};

/// Decides whether a value is the fully unwrapped target
pub type TargetPredicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Options for [`resolve_module_thunk`](super::resolve_module_thunk) and
/// [`resolve_module_value`](super::resolve_module_value)
///
/// The value resolver only consults `is_target_value`.
#[derive(Clone, Default)]
pub struct ResolveOptions {
    /// Arguments passed to a factory thunk that is not itself the target
    pub args: Option<Vec<Value>>,
    /// Thunk producing the argument list; overrides `args` when present.
    /// Factories found here are always called with no arguments.
    pub args_thunk: Option<ModuleThunk>,
    /// Recognizes the target value. Without it no export unwrapping happens.
    pub is_target_value: Option<TargetPredicate>,
}

impl ResolveOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the factory arguments
    pub fn with_args<V, I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Set the argument thunk
    pub fn with_args_thunk(mut self, args_thunk: impl Into<ModuleThunk>) -> Self {
        self.args_thunk = Some(args_thunk.into());
        self
    }

    /// Set the target predicate from a closure
    pub fn with_target<F>(mut self, is_target_value: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.is_target_value = Some(Arc::new(is_target_value));
        self
    }

    /// Set an already shared target predicate
    pub fn with_target_predicate(mut self, is_target_value: TargetPredicate) -> Self {
        self.is_target_value = Some(is_target_value);
        self
    }

    pub fn has_target_predicate(&self) -> bool {
        self.is_target_value.is_some()
    }

    /// Whether the predicate accepts `value`; false when there is no predicate
    pub fn accepts(&self, value: &Value) -> bool {
        self.is_target_value
            .as_ref()
            .map(|is_target| is_target(value))
            .unwrap_or(false)
    }

    /// These options reduced to the target predicate
    pub fn target_only(&self) -> Self {
        Self {
            args: None,
            args_thunk: None,
            is_target_value: self.is_target_value.clone(),
        }
    }
}

impl fmt::Debug for ResolveOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveOptions")
            .field("args", &self.args)
            .field("args_thunk", &self.args_thunk)
            .field("is_target_value", &self.is_target_value.is_some())
            .finish()
    }
}
