use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    InSync,
    OutOfDate,
    Missing,
}

/// Compares each expected file with what is on disk, byte for byte.
pub fn check_files_sync(expected: &BTreeMap<PathBuf, String>) -> Vec<(PathBuf, SyncState)> {
    expected
        .iter()
        .map(|(path, expected_content)| {
            let state = match fs::read(path) {
                Ok(actual) if actual == expected_content.as_bytes() => SyncState::InSync,
                Ok(_) => SyncState::OutOfDate,
                Err(_) => SyncState::Missing,
            };
            (path.clone(), state)
        })
        .collect()
}
