//! Executable sniffing and DOS compatibility checks

pub mod compatibility;
pub mod error;
pub mod sniffer;

pub use compatibility::CompatibilityChecker;
pub use error::{ExecutableError, ExecutableErrorKind};
pub use sniffer::{ExecutableHeader, ExecutableSniffer};
