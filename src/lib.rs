//! Gamebox file types - classification of DOS game files and folders
//!
//! This crate answers two questions about an arbitrary file or folder before
//! a DOS emulation front-end runs or mounts it: what kind of thing it is
//! (gamebox, disk image, mountable folder, program, documentation), and for
//! programs, whether the emulated environment can run it. It also picks how
//! to gain file-level access to a location's contents.
//!
//! Nothing here executes or loads a program.

pub mod cli;
pub mod executable;
pub mod filesystem;
pub mod registry;
pub mod types;

pub use executable::{CompatibilityChecker, ExecutableError, ExecutableSniffer};
pub use filesystem::{FilesystemError, FilesystemHandle, FilesystemResolver};
pub use registry::{HandlerOverrides, TypeRegistry};
pub use types::*;
