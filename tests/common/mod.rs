// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use edid_fix::{EDID_BLOCK_LEN, EdidBlock};
use std::path::PathBuf;
use tempfile::TempDir;

/// Build a block that is all zeros except for the given `(offset, value)` pairs.
pub fn block_with(pairs: &[(usize, u8)]) -> EdidBlock {
    let mut data = [0u8; EDID_BLOCK_LEN];
    for &(offset, value) in pairs {
        data[offset] = value;
    }
    EdidBlock::from_bytes(&data).unwrap()
}

/// Write raw bytes to a fresh temp directory.
///
/// Returns (TempDir, path) - keep the TempDir alive to prevent cleanup.
pub fn write_temp(name: &str, data: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    (temp_dir, path)
}

/// Offsets where two blocks differ.
pub fn changed_offsets(a: &EdidBlock, b: &EdidBlock) -> Vec<usize> {
    a.as_bytes()
        .iter()
        .zip(b.as_bytes().iter())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i)
        .collect()
}
