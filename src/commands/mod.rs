// src/commands/mod.rs
//! Command handlers for the edid-fix CLI

mod check;
mod fix;

pub use check::cmd_check;
pub use fix::{cmd_demo, cmd_fix};

use edid_fix::{EdidBlock, NameTagOutcome, PatchReport};

/// Print the result of a repair the way every command reports it
fn print_report(block: &EdidBlock, report: &PatchReport, output: &str) {
    let (major, minor) = block.version();

    println!("Fixed EDID is:");
    println!("{}", block.hex_dump());
    println!("EDID fixed and written to '{}'.", output);

    match report.name_tag {
        NameTagOutcome::Retagged { offset } => println!(
            " - Version changed to {}.{}, Display Product Name set (offset {:#04x}) and checksum corrected.",
            major, minor, offset
        ),
        NameTagOutcome::Skipped { markers_found } => {
            println!(
                " - Version changed to {}.{} and checksum corrected.",
                major, minor
            );
            println!(
                " - Display Product Name not set: found {} text descriptor tag(s), need at least 2.",
                markers_found
            );
        }
    }
}
