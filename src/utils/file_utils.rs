use anyhow::{Context, Result};
use ignore::WalkBuilder;
use tracing::debug;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// Collects files with the given extension under `root`, sorted by path.
///
/// With `recursive` unset only direct children of `root` are considered.
/// A missing root yields an empty list; deciding whether that matters is up
/// to the caller.
pub fn collect_files(root: &Path, extension: &str, recursive: bool) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .max_depth(if recursive { None } else { Some(1) })
        .build();

    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                let is_file = entry.file_type().is_some_and(|t| t.is_file());
                if is_file && has_extension(entry.path(), extension) {
                    files.push(entry.into_path());
                }
            }
            Err(err) => debug!("Skipping unreadable entry under {}: {err}", root.display()),
        }
    }

    // Sort files alphabetically for deterministic output across filesystems
    files.sort();

    files
}

/// Direct subdirectories of `root` whose name starts with `prefix`, sorted.
pub fn find_subdirectories_with_prefix(root: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();

    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read directory '{}'", root.display()))?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        let matches_prefix = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(prefix));
        if matches_prefix {
            dirs.push(path);
        }
    }

    dirs.sort();

    Ok(dirs)
}

/// Renders `path` relative to `base` with `/` separators, for display inside
/// generated documents.
pub fn display_relative(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn write_directory_files(files_to_write: &BTreeMap<PathBuf, String>) -> Result<()> {
    for (file_path, content) in files_to_write {
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
        }
        fs::write(file_path, content)
            .with_context(|| format!("Failed to write file '{}'", file_path.display()))?;
    }

    Ok(())
}
