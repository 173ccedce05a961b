//! Callable module factories

use std::fmt;
use std::sync::Arc;

use super::Value;
use crate::error::ResolveResult;

type FactoryFn = dyn Fn(Vec<Value>) -> ResolveResult<Value> + Send + Sync;

/// A shared callable that produces a module value from a positional argument list
///
/// Factories compare by identity: clones of one factory are equal, two
/// separately constructed factories are not.
#[derive(Clone)]
pub struct Factory {
    call: Arc<FactoryFn>,
}

impl Factory {
    /// Wrap a closure as a factory
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Vec<Value>) -> ResolveResult<Value> + Send + Sync + 'static,
    {
        Self { call: Arc::new(f) }
    }

    /// Invoke the factory with the given arguments
    pub fn call(&self, args: Vec<Value>) -> ResolveResult<Value> {
        (self.call)(args)
    }

    /// Whether both handles point at the same factory
    pub fn ptr_eq(&self, other: &Factory) -> bool {
        self.addr() == other.addr()
    }

    fn addr(&self) -> *const u8 {
        Arc::as_ptr(&self.call) as *const u8
    }
}

impl PartialEq for Factory {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Factory({:p})", self.addr())
    }
}
