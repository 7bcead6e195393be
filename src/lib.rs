// src/lib.rs

//! EDID block repair
//!
//! Patches a 128-byte EDID base block in place so that panels with
//! sloppy firmware identify themselves correctly.
//!
//! # Repairs
//!
//! - Version: major version byte (`0x12`) forced to 1
//! - Product name: second `0xFE` text descriptor retagged as `0xFC`
//! - Checksum: last byte adjusted so the block sums to zero modulo 256
//!
//! Anything else in the block (timings, extension count, descriptor
//! payloads) is left as-is. Extension blocks are not supported.

pub mod edid;
mod error;
pub mod pipeline;

pub use edid::fixture::{SAMPLE_EDID_HEX, parse_hex_dump, sample_block, write_sample};
pub use edid::patch::{NameTagOutcome, fix_checksum, fix_name_tag, fix_version};
pub use edid::{EDID_BLOCK_LEN, EdidBlock};
pub use error::{Error, Result};
pub use pipeline::{DEFAULT_FIXTURE, DEFAULT_OUTPUT, PatchReport, repair, repair_file};
