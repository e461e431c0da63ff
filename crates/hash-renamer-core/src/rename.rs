use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Error;
use crate::logging::{log_file_error, log_fs_change, log_hash_error};
use crate::naming::{has_hash_suffix, hashed_name, path_occupied, resolve_collision, resolves_to};
use crate::processing::{compute_digest, files_identical, short_digest};
use crate::types::FileOutcome;

/// Hash one file and move it to its hashed name.
///
/// Never overwrites an occupied target: an identical target makes the
/// source redundant and it is removed, a different one gets a numbered
/// name. Errors are reported in the outcome, not returned.
///
/// The existence checks and the final move are not atomic together; a
/// concurrent writer in the same directory can still race this.
pub fn process_file(path: &Path, config: &Config) -> FileOutcome {
    let digest = match compute_digest(path, config.algorithm) {
        Ok(digest) => digest,
        Err(e) => {
            let error = match e {
                Error::Io(source) => Error::FileRead {
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            };
            log_hash_error(path, &error);
            return FileOutcome::Failed {
                path: path.to_path_buf(),
                error,
            };
        }
    };
    let short = short_digest(&digest, config.length);

    if has_hash_suffix(path, &config.separator, short) {
        debug!("Already hashed: {}", path.display());
        return FileOutcome::AlreadyHashed {
            path: path.to_path_buf(),
        };
    }

    let mut target = hashed_name(path, &config.separator, short, None);

    if path_occupied(&target) {
        match files_identical(&target, path) {
            // A link back to the source is not a second copy
            Ok(true) if resolves_to(&target, path) => debug!(
                "Target {} resolves to the source itself",
                target.display()
            ),
            Ok(true) => return remove_duplicate(path, target, config.dry_run),
            Ok(false) => debug!(
                "Target {} exists with different content",
                target.display()
            ),
            Err(e) => debug!(
                "Could not compare {} with {}: {}",
                path.display(),
                target.display(),
                e
            ),
        }
        target = resolve_collision(path, &config.separator, short);
    }

    move_file(path, target, config.dry_run)
}

fn remove_duplicate(path: &Path, existing: PathBuf, dry_run: bool) -> FileOutcome {
    if !dry_run {
        if let Err(source) = fs::remove_file(path) {
            log_file_error(path, "remove", &source);
            return FileOutcome::Failed {
                path: path.to_path_buf(),
                error: Error::Remove {
                    path: path.to_path_buf(),
                    source,
                },
            };
        }
        log_fs_change("Removed duplicate", path, Some(existing.as_path()));
    }

    FileOutcome::DuplicateRemoved {
        removed: path.to_path_buf(),
        existing,
        dry_run,
    }
}

fn move_file(path: &Path, target: PathBuf, dry_run: bool) -> FileOutcome {
    if !dry_run {
        if let Err(source) = fs::rename(path, &target) {
            log_file_error(path, "rename", &source);
            return FileOutcome::Failed {
                path: path.to_path_buf(),
                error: Error::Rename {
                    from: path.to_path_buf(),
                    to: target,
                    source,
                },
            };
        }
        log_fs_change("Renamed", path, Some(target.as_path()));
    }

    FileOutcome::Renamed {
        from: path.to_path_buf(),
        to: target,
        dry_run,
    }
}
