// src/commands/fix.rs

//! Repair commands: demo run on the sample block and repair of a user file

use super::print_report;
use anyhow::{Context, Result};
use tracing::info;

/// Write the sample block to `fixture`, then repair it into `output`
pub fn cmd_demo(fixture: &str, output: &str) -> Result<()> {
    info!("Writing sample EDID to {}", fixture);
    let sample = edid_fix::write_sample(fixture)
        .with_context(|| format!("Failed to write sample EDID to '{}'", fixture))?;

    println!("Initial hex string is:");
    println!("{}", sample.hex_dump());

    cmd_fix(fixture, output)
}

/// Repair `input` and write it to `output`
pub fn cmd_fix(input: &str, output: &str) -> Result<()> {
    info!("Repairing EDID: {}", input);

    let (block, report) = edid_fix::repair_file(input, output)
        .with_context(|| format!("Failed to repair EDID '{}'", input))?;

    print_report(&block, &report, output);
    Ok(())
}
