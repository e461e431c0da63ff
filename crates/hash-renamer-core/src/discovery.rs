use log::{debug, warn};
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::types::FileEntry;

/// Check that the root exists and is a directory
pub fn validate_directory(directory: &Path) -> Result<()> {
    if !directory.exists() {
        return Err(Error::FileNotFound(directory.to_path_buf()));
    }
    if !directory.is_dir() {
        return Err(Error::NotADirectory(directory.to_path_buf()));
    }
    Ok(())
}

/// Discover regular files under a directory, sorted by path.
///
/// Without `recursive` only direct children are returned. Symlinks are not
/// followed and are skipped, as are directories and special files.
pub fn discover_files(directory: &Path, recursive: bool) -> Result<Vec<FileEntry>> {
    validate_directory(directory)?;

    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut files = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // Log error but continue with other files
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            if entry.file_type().is_symlink() {
                debug!("Skipping symlink: {}", entry.path().display());
            }
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => files.push(FileEntry {
                path: entry.into_path(),
                size: metadata.len(),
            }),
            Err(e) => warn!(
                "Error reading metadata for {}: {}",
                entry.path().display(),
                e
            ),
        }
    }

    // Walk order is per directory; make the whole listing path-ordered
    files.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(files)
}

// -- Tests --
