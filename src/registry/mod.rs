//! Type identifier registry and handler overrides

pub mod error;
pub mod overrides;
pub mod type_registry;

pub use error::RegistryError;
pub use overrides::HandlerOverrides;
pub use type_registry::{TypeRegistry, TypeSet};
