//! Resolution outcomes

use std::future::IntoFuture;

use futures::future::{self, BoxFuture, FutureExt};

use crate::error::ResolveResult;
use crate::types::{Promise, Value};

/// The outcome of resolving a module thunk: a value now, or one later
///
/// A pending resolution never settles to a module wrapper; it has already
/// been chained through the value resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Ready(Value),
    Pending(Promise),
}

impl Resolution {
    pub fn is_pending(&self) -> bool {
        matches!(self, Resolution::Pending(_))
    }

    /// The value, if resolution completed synchronously
    pub fn ready(&self) -> Option<&Value> {
        match self {
            Resolution::Ready(value) => Some(value),
            Resolution::Pending(_) => None,
        }
    }

    pub fn into_ready(self) -> Option<Value> {
        match self {
            Resolution::Ready(value) => Some(value),
            Resolution::Pending(_) => None,
        }
    }

    /// Collapse into a [`Value`], keeping a pending outcome as `Value::Promise`
    pub fn into_value(self) -> Value {
        match self {
            Resolution::Ready(value) => value,
            Resolution::Pending(promise) => Value::Promise(promise),
        }
    }
}

impl IntoFuture for Resolution {
    type Output = ResolveResult<Value>;
    type IntoFuture = BoxFuture<'static, ResolveResult<Value>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Resolution::Ready(value) => future::ready(Ok(value)).boxed(),
            Resolution::Pending(promise) => promise.boxed(),
        }
    }
}

impl From<Resolution> for Value {
    fn from(resolution: Resolution) -> Self {
        resolution.into_value()
    }
}
