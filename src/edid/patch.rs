// src/edid/patch.rs
//! In-place field patchers
//!
//! Each patcher edits a fixed part of an [`EdidBlock`] and leaves every
//! other byte alone. None of them can fail: the block type already
//! guarantees all offsets are in range.
//!
//! Run [`fix_checksum`] last. It is computed over whatever the other
//! patchers left behind.

use super::{CHECKSUM_OFFSET, EdidBlock, VERSION_OFFSET};
use tracing::{debug, warn};

/// Major version written by [`fix_version`]
pub const EDID_MAJOR_VERSION: u8 = 0x01;

/// Descriptor tag for unspecified text / serial number strings
pub const TEXT_DESCRIPTOR_TAG: u8 = 0xFE;

/// Descriptor tag for the Display Product Name
pub const PRODUCT_NAME_TAG: u8 = 0xFC;

/// What the name-tag patcher did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTagOutcome {
    /// The second text marker was rewritten to the product-name tag
    Retagged { offset: usize },
    /// Fewer than two text markers; the block was left unchanged
    Skipped { markers_found: usize },
}

impl NameTagOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Force the major version byte to 1, returning the previous value
pub fn fix_version(block: &mut EdidBlock) -> u8 {
    let bytes = block.as_bytes_mut();
    let previous = bytes[VERSION_OFFSET];
    bytes[VERSION_OFFSET] = EDID_MAJOR_VERSION;
    debug!(
        "Version byte at {:#04x}: {:#04x} -> {:#04x}",
        VERSION_OFFSET, previous, EDID_MAJOR_VERSION
    );
    previous
}

/// Retag the second `0xFE` marker as a Display Product Name (`0xFC`)
///
/// Panels often ship with two text descriptors, the first one a serial
/// number and the second one the model string. Only the tag byte changes;
/// the descriptor payload is kept.
pub fn fix_name_tag(block: &mut EdidBlock) -> NameTagOutcome {
    let markers = block.marker_offsets(TEXT_DESCRIPTOR_TAG);

    match markers.get(1) {
        Some(&offset) => {
            block.as_bytes_mut()[offset] = PRODUCT_NAME_TAG;
            debug!(
                "Retagged descriptor at {:#04x}: {:#04x} -> {:#04x}",
                offset, TEXT_DESCRIPTOR_TAG, PRODUCT_NAME_TAG
            );
            NameTagOutcome::Retagged { offset }
        }
        None => {
            warn!(
                "Less than two occurrences of {:#04x} found ({}). No changes made.",
                TEXT_DESCRIPTOR_TAG,
                markers.len()
            );
            NameTagOutcome::Skipped {
                markers_found: markers.len(),
            }
        }
    }
}

/// Adjust the last byte so all 128 bytes sum to zero modulo 256
///
/// Returns the adjustment that was added to the checksum byte; zero when
/// the block was already consistent.
pub fn fix_checksum(block: &mut EdidBlock) -> u8 {
    let adjustment = block.byte_sum().wrapping_neg();
    let bytes = block.as_bytes_mut();
    let previous = bytes[CHECKSUM_OFFSET];
    bytes[CHECKSUM_OFFSET] = previous.wrapping_add(adjustment);
    debug!(
        "Checksum: {:#04x} -> {:#04x} (adjustment {:#04x})",
        previous, bytes[CHECKSUM_OFFSET], adjustment
    );
    adjustment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edid::EDID_BLOCK_LEN;

    fn block_with(pairs: &[(usize, u8)]) -> EdidBlock {
        let mut data = [0u8; EDID_BLOCK_LEN];
        for &(offset, value) in pairs {
            data[offset] = value;
        }
        EdidBlock::from_bytes(&data).unwrap()
    }

    #[test]
    fn test_fix_version_sets_major() {
        for prior in [0x00, 0x01, 0x02, 0xFF] {
            let mut block = block_with(&[(VERSION_OFFSET, prior)]);
            assert_eq!(fix_version(&mut block), prior);
            assert_eq!(block.get(VERSION_OFFSET), Some(EDID_MAJOR_VERSION));
        }
    }

    #[test]
    fn test_fix_version_touches_one_byte() {
        let original = block_with(&[(0, 0xAA), (VERSION_OFFSET, 0x02), (0x13, 0x04)]);
        let mut block = original.clone();
        fix_version(&mut block);

        let diff: Vec<usize> = (0..EDID_BLOCK_LEN)
            .filter(|&i| original.get(i) != block.get(i))
            .collect();
        assert_eq!(diff, vec![VERSION_OFFSET]);
    }

    #[test]
    fn test_fix_name_tag_second_of_three() {
        let mut block = block_with(&[(5, 0xFE), (70, 0xFE), (90, 0xFE)]);
        let outcome = fix_name_tag(&mut block);

        assert_eq!(outcome, NameTagOutcome::Retagged { offset: 70 });
        assert_eq!(block.get(5), Some(TEXT_DESCRIPTOR_TAG));
        assert_eq!(block.get(70), Some(PRODUCT_NAME_TAG));
        assert_eq!(block.get(90), Some(TEXT_DESCRIPTOR_TAG));
    }

    #[test]
    fn test_fix_name_tag_single_marker_skips() {
        let original = block_with(&[(5, 0xFE)]);
        let mut block = original.clone();
        let outcome = fix_name_tag(&mut block);

        assert_eq!(outcome, NameTagOutcome::Skipped { markers_found: 1 });
        assert!(outcome.is_skipped());
        assert_eq!(block, original);
    }

    #[test]
    fn test_fix_name_tag_no_markers_skips() {
        let mut block = block_with(&[]);
        assert_eq!(
            fix_name_tag(&mut block),
            NameTagOutcome::Skipped { markers_found: 0 }
        );
    }

    #[test]
    fn test_fix_checksum_zeroes_sum() {
        let mut block = block_with(&[(0, 0x12), (40, 0x99), (CHECKSUM_OFFSET, 0x07)]);
        fix_checksum(&mut block);
        assert!(block.is_checksum_valid());
        assert_eq!(block.byte_sum(), 0);
    }

    #[test]
    fn test_fix_checksum_idempotent() {
        let mut block = block_with(&[(3, 0x42), (100, 0xC8)]);
        fix_checksum(&mut block);
        let once = block.clone();

        assert_eq!(fix_checksum(&mut block), 0);
        assert_eq!(block, once);
    }

    #[test]
    fn test_fix_checksum_all_ff() {
        let mut block = EdidBlock::from_bytes(&[0xFF; EDID_BLOCK_LEN]).unwrap();
        // Sum is 0x80, so 0x80 gets added to the last 0xFF
        assert_eq!(fix_checksum(&mut block), 0x80);
        assert_eq!(block.checksum(), 0x7F);
        assert!(block.is_checksum_valid());
    }
}
