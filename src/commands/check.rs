// src/commands/check.rs

//! Read-only inspection of an EDID file

use anyhow::{Context, Result, bail};
use edid_fix::EdidBlock;
use edid_fix::edid::patch::{PRODUCT_NAME_TAG, TEXT_DESCRIPTOR_TAG};

/// Report version, descriptor tags and checksum status of `input`
pub fn cmd_check(input: &str) -> Result<()> {
    let block = EdidBlock::load(input).with_context(|| format!("Failed to load EDID '{}'", input))?;
    let (major, minor) = block.version();

    println!("EDID: {}", input);
    println!("  Version: {}.{}", major, minor);

    let text_tags = block.marker_offsets(TEXT_DESCRIPTOR_TAG);
    let name_tags = block.marker_offsets(PRODUCT_NAME_TAG);
    println!(
        "  {:#04x} bytes: {}",
        TEXT_DESCRIPTOR_TAG,
        format_offsets(&text_tags)
    );
    println!(
        "  {:#04x} bytes: {}",
        PRODUCT_NAME_TAG,
        format_offsets(&name_tags)
    );

    if block.is_checksum_valid() {
        println!("  Checksum: {:#04x} (valid)", block.checksum());
        Ok(())
    } else {
        println!(
            "  Checksum: {:#04x} (invalid, block sums to {:#04x})",
            block.checksum(),
            block.byte_sum()
        );
        bail!("Checksum mismatch in '{}'", input);
    }
}

fn format_offsets(offsets: &[usize]) -> String {
    if offsets.is_empty() {
        return "none".to_string();
    }
    offsets
        .iter()
        .map(|o| format!("{:#04x}", o))
        .collect::<Vec<_>>()
        .join(", ")
}
