//! Value model for module thunks
//!
//! A module thunk is one of:
//! - a plain value (possibly a module-export wrapper object)
//! - a factory invoked with an argument list
//! - a promise that settles to one of the above

mod value;
mod object;
mod factory;
mod promise;
mod thunk;

pub use value::{Value, ValueKind};
pub use object::Object;
pub use factory::Factory;
pub use promise::Promise;
pub use thunk::ModuleThunk;
