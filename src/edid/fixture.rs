// src/edid/fixture.rs
//! Sample EDID block used by the demo run
//!
//! A laptop panel EDID reporting major version 2, with both text
//! descriptors tagged `0xFE`. Its checksum is valid as shipped and goes
//! stale once the version and tag bytes are repaired.

use super::EdidBlock;
use crate::error::Result;
use std::path::Path;

/// Raw sample block, 16 bytes per line
pub const SAMPLE_EDID_HEX: &str = "
    00 ff ff ff ff ff ff 00 38 70 35 00 00 00 00 00
    01 1c 02 04 a5 1f 11 78 02 a1 05 a1 56 4f a0 27
    0f 50 54 00 00 00 01 01 01 01 01 01 01 01 01 01
    01 01 01 01 01 01 1a 36 80 a0 70 38 1f 40 30 20
    35 00 35 ae 10 00 00 1a 00 00 00 00 00 00 00 00
    00 00 00 00 00 00 00 00 00 1a 00 00 00 fe 00 43
    45 43 20 50 41 0a 20 20 20 20 20 20 00 00 00 fe
    00 4c 4d 31 34 30 4c 46 2d 33 4c 0a 20 20 00 26
";

/// Decode a whitespace-separated hex dump into a block
pub fn parse_hex_dump(text: &str) -> Result<EdidBlock> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let data = hex::decode(compact)?;
    EdidBlock::from_bytes(&data)
}

/// The decoded sample block
pub fn sample_block() -> Result<EdidBlock> {
    parse_hex_dump(SAMPLE_EDID_HEX)
}

/// Write the sample block verbatim to `path`
pub fn write_sample(path: impl AsRef<Path>) -> Result<EdidBlock> {
    let block = sample_block()?;
    block.save(path)?;
    Ok(block)
}
