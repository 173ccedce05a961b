//! Resolution error types

use thiserror::Error;

use crate::types::ValueKind;

/// Errors that can occur while resolving a module thunk
///
/// Errors are `Clone` because a pending resolution is shared: every holder of
/// a cloned [`Promise`](crate::types::Promise) observes the same rejection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// A factory raised while producing its module value
    #[error("Factory failed: {0}")]
    Factory(String),

    /// A promise in the chain was rejected
    #[error("Promise rejected: {0}")]
    Rejected(String),

    /// The resolved argument list could not be spread into a factory call
    #[error("Factory arguments must resolve to an array, got {kind}")]
    InvalidArguments { kind: ValueKind },

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ResolveError {
    /// Create a factory error
    pub fn factory(message: impl Into<String>) -> Self {
        Self::Factory(message.into())
    }

    /// Create a rejection error
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Create an invalid arguments error for a value of the given kind
    pub fn invalid_arguments(kind: ValueKind) -> Self {
        Self::InvalidArguments { kind }
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ResolveError::factory("boom").to_string(), "Factory failed: boom");
        assert_eq!(ResolveError::rejected("nope").to_string(), "Promise rejected: nope");
        assert_eq!(
            ResolveError::invalid_arguments(ValueKind::Number).to_string(),
            "Factory arguments must resolve to an array, got number"
        );
        assert_eq!(ResolveError::Other("plain".to_string()).to_string(), "plain");
    }
}
