use serde::{Deserialize, Serialize};
use std::fmt;

/// Executable subtype determined from header bytes.
///
/// Never cached: recomputed every time a file is sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum ExecutableType {
    #[default]
    Unknown = 0,
    #[serde(rename = "DOS")]
    Dos,
    Windows,
    #[serde(rename = "OS2")]
    Os2,
}

impl fmt::Display for ExecutableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutableType::Unknown => "unknown",
            ExecutableType::Dos => "DOS",
            ExecutableType::Windows => "Windows",
            ExecutableType::Os2 => "OS/2",
        };
        f.write_str(name)
    }
}

/// Extended header signature found through the pointer at 0x3C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtendedSignature {
    /// `PE\0\0`, 32-bit Windows
    Pe,
    /// `NE`, 16-bit Windows
    Ne,
    /// `LE`
    Le,
    /// `LX`
    Lx,
}

impl ExtendedSignature {
    pub fn executable_type(&self) -> ExecutableType {
        match self {
            ExtendedSignature::Pe | ExtendedSignature::Ne => ExecutableType::Windows,
            ExtendedSignature::Le | ExtendedSignature::Lx => ExecutableType::Os2,
        }
    }
}
