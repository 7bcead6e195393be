// src/pipeline.rs

//! Repair pipeline
//!
//! Applies the patchers in a fixed order: version, name tag, checksum.
//! The checksum has to come last so it covers the final field values.
//!
//! Loading is the only step that can fail. The output file is written
//! once, after every patcher has run.

use crate::edid::EdidBlock;
use crate::edid::patch::{self, NameTagOutcome};
use crate::error::Result;
use std::path::Path;
use tracing::{info, warn};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "edid.bin";

/// Default location the sample block is written to before repair
pub const DEFAULT_FIXTURE: &str = "prefix_edid.bin";

/// Summary of one repair run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchReport {
    /// Major version byte before it was forced to 1
    pub previous_version: u8,
    /// Result of the name-tag patcher
    pub name_tag: NameTagOutcome,
    /// Value added to the checksum byte
    pub checksum_adjustment: u8,
}

impl PatchReport {
    /// True when the name-tag patch had to be skipped
    pub fn is_degraded(&self) -> bool {
        self.name_tag.is_skipped()
    }
}

/// Run all three patchers over `block`
pub fn repair(block: &mut EdidBlock) -> PatchReport {
    let previous_version = patch::fix_version(block);
    let name_tag = patch::fix_name_tag(block);
    let checksum_adjustment = patch::fix_checksum(block);

    PatchReport {
        previous_version,
        name_tag,
        checksum_adjustment,
    }
}

/// Load `input`, repair it and write the result to `output`
pub fn repair_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<(EdidBlock, PatchReport)> {
    let input = input.as_ref();
    let output = output.as_ref();

    let mut block = EdidBlock::load(input)?;
    let report = repair(&mut block);
    if report.is_degraded() {
        warn!("{}: Display Product Name tag not set", input.display());
    }

    block.save(output)?;
    info!(
        "Repaired {} -> {} (checksum adjustment {:#04x})",
        input.display(),
        output.display(),
        report.checksum_adjustment
    );

    Ok((block, report))
}
