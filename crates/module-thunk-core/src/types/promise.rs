//! Shared pending values

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt, Shared};

use super::Value;
use crate::error::{ResolveError, ResolveResult};

/// A value that settles later, either to a [`Value`] or to a rejection
///
/// Promises are lazy and shared: nothing runs until one handle is polled,
/// and every clone observes the same settlement.
#[derive(Clone)]
pub struct Promise {
    inner: Shared<BoxFuture<'static, ResolveResult<Value>>>,
}

impl Promise {
    /// Create a promise from a future
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = ResolveResult<Value>> + Send + 'static,
    {
        Self {
            inner: future.boxed().shared(),
        }
    }

    /// Create a promise that settles to `value`
    pub fn resolved(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(async move { Ok(value) })
    }

    /// Create a promise that rejects with `error`
    pub fn rejected(error: ResolveError) -> Self {
        Self::new(async move { Err(error) })
    }

    /// The settled outcome, if this handle has observed one
    pub fn peek(&self) -> Option<&ResolveResult<Value>> {
        self.inner.peek()
    }

    pub fn is_settled(&self) -> bool {
        self.peek().is_some()
    }

    /// Whether both handles share the same underlying computation
    pub fn ptr_eq(&self, other: &Promise) -> bool {
        self.inner.ptr_eq(&other.inner)
    }
}

impl Future for Promise {
    type Output = ResolveResult<Value>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(cx)
    }
}

impl PartialEq for Promise {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Promise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Promise")
            .field("settled", &self.is_settled())
            .finish()
    }
}
