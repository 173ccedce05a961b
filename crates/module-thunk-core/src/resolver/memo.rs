//! Resolve-once accessors

use std::fmt;
use std::thread::{self, ThreadId};

use parking_lot::{Condvar, Mutex};

use super::options::ResolveOptions;
use super::resolution::Resolution;
use super::thunk_resolver::resolve_module_thunk;
use super::value_resolver::resolve_module_value;
use crate::error::ResolveResult;
use crate::types::{ModuleThunk, Value};
use crate::trace_log;

enum MemoState<O> {
    Unresolved,
    /// Held by the thread running the first resolution
    Resolving(ThreadId),
    Resolved(O),
}

enum Claim {
    Owner,
    Reentrant,
    Wait,
}

/// A zero-argument accessor that resolves on first use and then replays the outcome
///
/// The stored outcome may be a pending promise; clones of it share one
/// settlement. Other threads calling while the first resolution runs block
/// until it is stored. A factory calling back into its own accessor resolves
/// again without touching the cache.
pub struct Memoized<O> {
    compute: Box<dyn Fn() -> O + Send + Sync>,
    state: Mutex<MemoState<O>>,
    settled: Condvar,
}

/// Releases a claim that never stored an outcome, e.g. when `compute` panics
struct ClaimGuard<'a, O> {
    state: &'a Mutex<MemoState<O>>,
    settled: &'a Condvar,
}

impl<O> Drop for ClaimGuard<'_, O> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        if matches!(*state, MemoState::Resolving(_)) {
            *state = MemoState::Unresolved;
        }
        drop(state);
        self.settled.notify_all();
    }
}

impl<O: Clone> Memoized<O> {
    fn new(compute: Box<dyn Fn() -> O + Send + Sync>) -> Self {
        Self {
            compute,
            state: Mutex::new(MemoState::Unresolved),
            settled: Condvar::new(),
        }
    }

    /// Resolve on the first call, return the stored outcome afterwards
    pub fn get(&self) -> O {
        let current = thread::current().id();
        let mut state = self.state.lock();
        loop {
            let claim = match &*state {
                MemoState::Resolved(outcome) => {
                    trace_log!("Memoized resolution hit");
                    return outcome.clone();
                }
                MemoState::Resolving(owner) if *owner == current => Claim::Reentrant,
                MemoState::Resolving(_) => Claim::Wait,
                MemoState::Unresolved => Claim::Owner,
            };
            match claim {
                Claim::Wait => self.settled.wait(&mut state),
                Claim::Reentrant => {
                    drop(state);
                    return (self.compute)();
                }
                Claim::Owner => {
                    *state = MemoState::Resolving(current);
                    break;
                }
            }
        }
        drop(state);

        // Resolve with the lock released so factories may re-enter
        let guard = ClaimGuard {
            state: &self.state,
            settled: &self.settled,
        };
        let outcome = (self.compute)();
        trace_log!("Memoized resolution stored");
        *self.state.lock() = MemoState::Resolved(outcome.clone());
        drop(guard);
        outcome
    }

    pub fn is_resolved(&self) -> bool {
        matches!(&*self.state.lock(), MemoState::Resolved(_))
    }

    /// Turn the accessor into a plain closure
    pub fn into_fn(self) -> impl Fn() -> O + Send + Sync
    where
        O: Send,
    {
        move || self.get()
    }
}

impl<O> fmt::Debug for Memoized<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*self.state.lock() {
            MemoState::Unresolved => "unresolved",
            MemoState::Resolving(_) => "resolving",
            MemoState::Resolved(_) => "resolved",
        };
        f.debug_struct("Memoized").field("state", &state).finish()
    }
}

/// Memoize [`resolve_module_value`] over a module value
pub fn module_value_resolver(value: impl Into<Value>, options: ResolveOptions) -> Memoized<Resolution> {
    let value = value.into();
    Memoized::new(Box::new(move || resolve_module_value(value.clone(), &options)))
}

/// Memoize [`resolve_module_thunk`] over a module thunk
///
/// A synchronous failure is stored like any other outcome.
pub fn module_thunk_resolver(
    thunk: impl Into<ModuleThunk>,
    options: ResolveOptions,
) -> Memoized<ResolveResult<Resolution>> {
    let thunk = thunk.into();
    Memoized::new(Box::new(move || resolve_module_thunk(thunk.clone(), &options)))
}
