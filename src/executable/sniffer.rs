//! DOS, Windows and OS/2 executable detection from MZ header bytes
//!
//! Header layout, little-endian:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0x00   | 2    | `MZ` signature |
//! | 0x18   | 2    | relocation table offset, below 0x40 for plain DOS programs |
//! | 0x3C   | 4    | offset of the extended header |
//! | (ptr)  | 2-4  | `PE\0\0`, `NE`, `LE` or `LX` |

use serde::Serialize;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, trace};
use url::Url;

use super::error::{ExecutableError, Result};
use crate::filesystem::PathAccess;
use crate::types::{ExecutableType, ExtendedSignature};

const MZ_SIGNATURE: &[u8; 2] = b"MZ";
const RELOCATION_TABLE_OFFSET_FIELD: u64 = 0x18;
const EXTENDED_HEADER_POINTER_FIELD: u64 = 0x3C;
/// Relocation tables starting below this leave no room for an extended header pointer
const EXTENDED_HEADER_THRESHOLD: u16 = 0x40;

/// Everything read while classifying an executable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExecutableHeader {
    pub executable_type: ExecutableType,
    pub relocation_table_offset: u16,
    pub extended_header_offset: Option<u32>,
    pub extended_signature: Option<ExtendedSignature>,
}

/// Classifies executables by reading at most the first few dozen header
/// bytes plus the extended signature.
///
/// Results are never cached; every call reads the source again.
pub struct ExecutableSniffer;

impl ExecutableSniffer {
    /// Classify the executable in `source`.
    ///
    /// `Ok(ExecutableType::Unknown)` means the MZ header was intact but the
    /// extended signature matched nothing known.
    pub fn classify<R: Read + Seek + ?Sized>(source: &mut R) -> Result<ExecutableType> {
        Self::inspect(source).map(|header| header.executable_type)
    }

    /// Classify the file at `path` inside `filesystem`
    pub fn classify_path(path: &Path, filesystem: &dyn PathAccess) -> Result<ExecutableType> {
        let location = path.display().to_string();
        let mut source = filesystem
            .open_file(path)
            .map_err(|e| ExecutableError::unreadable(location.clone(), e))?;
        Self::classify(&mut source).map_err(|e| e.at(location))
    }

    /// Classify the local file behind a `file://` URL
    pub fn classify_url(url: &Url) -> Result<ExecutableType> {
        let path = url.to_file_path().map_err(|_| {
            ExecutableError::unreadable(
                url.to_string(),
                io::Error::new(io::ErrorKind::Unsupported, "not a local file URL"),
            )
        })?;
        let location = path.display().to_string();
        let mut file =
            File::open(&path).map_err(|e| ExecutableError::unreadable(location.clone(), e))?;
        Self::classify(&mut file).map_err(|e| e.at(location))
    }

    /// Read the header fields behind a classification
    pub fn inspect<R: Read + Seek + ?Sized>(source: &mut R) -> Result<ExecutableHeader> {
        let mut signature = [0u8; 2];
        let read = read_at(source, 0, &mut signature)?;
        if read < signature.len() || &signature != MZ_SIGNATURE {
            return Err(ExecutableError::NotAnExecutable {
                reason: "missing MZ signature".to_string(),
            });
        }

        let mut field = [0u8; 2];
        read_required(source, RELOCATION_TABLE_OFFSET_FIELD, &mut field)?;
        let relocation_table_offset = u16::from_le_bytes(field);
        trace!("Relocation table offset {:#06x}", relocation_table_offset);

        if relocation_table_offset < EXTENDED_HEADER_THRESHOLD {
            debug!("Old-style MZ header, classified as DOS");
            return Ok(ExecutableHeader {
                executable_type: ExecutableType::Dos,
                relocation_table_offset,
                extended_header_offset: None,
                extended_signature: None,
            });
        }

        let mut pointer = [0u8; 4];
        read_required(source, EXTENDED_HEADER_POINTER_FIELD, &mut pointer)?;
        let extended_header_offset = u32::from_le_bytes(pointer);
        trace!("Extended header at {:#010x}", extended_header_offset);

        let mut extended = [0u8; 4];
        let available = read_at(source, u64::from(extended_header_offset), &mut extended)?;
        if available < 2 {
            return Err(truncated(u64::from(extended_header_offset) + 2));
        }

        let extended_signature = match &extended[..2] {
            b"PE" => {
                if available < 4 {
                    return Err(truncated(u64::from(extended_header_offset) + 4));
                }
                (extended[2..] == [0, 0]).then_some(ExtendedSignature::Pe)
            }
            b"NE" => Some(ExtendedSignature::Ne),
            b"LE" => Some(ExtendedSignature::Le),
            b"LX" => Some(ExtendedSignature::Lx),
            _ => None,
        };

        let executable_type = extended_signature
            .map(|signature| signature.executable_type())
            .unwrap_or(ExecutableType::Unknown);
        debug!(
            "Extended signature {:?}, classified as {}",
            extended_signature, executable_type
        );

        Ok(ExecutableHeader {
            executable_type,
            relocation_table_offset,
            extended_header_offset: Some(extended_header_offset),
            extended_signature,
        })
    }
}

fn truncated(required_length: u64) -> ExecutableError {
    ExecutableError::ExecutableTruncated {
        reason: format!("source ended before byte {required_length:#x}"),
    }
}

/// Fill `buf` from `offset`, or fail as truncated
fn read_required<R: Read + Seek + ?Sized>(
    source: &mut R,
    offset: u64,
    buf: &mut [u8],
) -> Result<()> {
    let read = read_at(source, offset, buf)?;
    if read < buf.len() {
        return Err(truncated(offset + buf.len() as u64));
    }
    Ok(())
}

/// Read as much of `buf` as the source holds from `offset`
fn read_at<R: Read + Seek + ?Sized>(source: &mut R, offset: u64, buf: &mut [u8]) -> Result<usize> {
    source
        .seek(SeekFrom::Start(offset))
        .map_err(|e| ExecutableError::unreadable("stream", e))?;

    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ExecutableError::unreadable("stream", e)),
        }
    }
    Ok(filled)
}
