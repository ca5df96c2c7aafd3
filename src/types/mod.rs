pub mod category;
pub mod executable;
pub mod identifiers;

pub use category::*;
pub use executable::*;
