// src/edid/mod.rs
//! EDID base block model
//!
//! An [`EdidBlock`] owns exactly [`EDID_BLOCK_LEN`] bytes. The length is
//! checked once, when the block is constructed, and carried by the type
//! from then on, so the patchers in [`patch`] never re-validate it.
//!
//! Only the fields the repair touches are given names here:
//!
//! | Offset | Field |
//! |--------|-------|
//! | `0x12` | EDID major version |
//! | `0x13` | EDID minor version |
//! | `0x36..0x7e` | four 18-byte descriptors |
//! | `0x7f` | checksum |

pub mod fixture;
pub mod patch;

use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Size of a single (base) EDID block
pub const EDID_BLOCK_LEN: usize = 128;

/// Offset of the major version byte
pub const VERSION_OFFSET: usize = 0x12;

/// Offset of the minor version byte
pub const REVISION_OFFSET: usize = 0x13;

/// Offset of the trailing checksum byte
pub const CHECKSUM_OFFSET: usize = EDID_BLOCK_LEN - 1;

/// A single 128-byte EDID block
#[derive(Clone, PartialEq, Eq)]
pub struct EdidBlock {
    bytes: [u8; EDID_BLOCK_LEN],
}

impl EdidBlock {
    /// Build a block from raw bytes, rejecting anything that is not 128 bytes long
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let bytes: [u8; EDID_BLOCK_LEN] = data
            .try_into()
            .map_err(|_| Error::Format { len: data.len() })?;
        Ok(Self { bytes })
    }

    /// Read a block from a file
    ///
    /// The whole file is read in one go. I/O failures and length failures
    /// stay distinct so callers can tell a missing file from a bad one.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| Error::io(path, e))?;
        debug!("Read {} bytes from {}", data.len(), path.display());

        let block = Self::from_bytes(&data)?;
        info!("Loaded EDID block from {}", path.display());
        Ok(block)
    }

    /// Write the raw block to a file, replacing any existing content
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.bytes).map_err(|e| Error::io(path, e))?;
        info!("Wrote EDID block to {}", path.display());
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8; EDID_BLOCK_LEN] {
        &self.bytes
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8; EDID_BLOCK_LEN] {
        &mut self.bytes
    }

    /// Byte at `offset`, or `None` past the end of the block
    pub fn get(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Sum of all 128 bytes, modulo 256
    pub fn byte_sum(&self) -> u8 {
        self.bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
    }

    /// Current value of the checksum byte
    pub fn checksum(&self) -> u8 {
        self.bytes[CHECKSUM_OFFSET]
    }

    /// A block is consistent when its bytes sum to zero modulo 256
    pub fn is_checksum_valid(&self) -> bool {
        self.byte_sum() == 0
    }

    /// `(major, minor)` EDID version
    pub fn version(&self) -> (u8, u8) {
        (self.bytes[VERSION_OFFSET], self.bytes[REVISION_OFFSET])
    }

    /// Offsets holding `value`, in ascending order
    pub fn marker_offsets(&self, value: u8) -> Vec<usize> {
        self.bytes
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b == value)
            .map(|(i, _)| i)
            .collect()
    }

    /// Lowercase hex bytes separated by single spaces
    pub fn hex_dump(&self) -> String {
        self.bytes
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TryFrom<&[u8]> for EdidBlock {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self> {
        Self::from_bytes(data)
    }
}

impl AsRef<[u8]> for EdidBlock {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for EdidBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex_dump())
    }
}

impl fmt::Debug for EdidBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (major, minor) = self.version();
        f.debug_struct("EdidBlock")
            .field("version", &format_args!("{}.{}", major, minor))
            .field("checksum", &format_args!("{:#04x}", self.checksum()))
            .field("checksum_valid", &self.is_checksum_valid())
            .finish()
    }
}
