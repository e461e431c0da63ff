use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;

/// Supported hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Blake3,
}

impl HashAlgorithm {
    /// All algorithms, in the order they are listed to users
    pub const ALL: [HashAlgorithm; 7] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Blake3,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Blake3 => "blake3",
        }
    }

    /// Number of hex characters in a full digest
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha1 => 40,
            Self::Sha224 => 56,
            Self::Sha256 | Self::Blake3 => 64,
            Self::Sha384 => 96,
            Self::Sha512 => 128,
        }
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        Self::Sha256
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    /// Accepts names case-insensitively, with or without dashes ("SHA-256")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| Error::UnsupportedAlgorithm(s.to_string()))
    }
}

/// A regular file found during discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path to the file
    pub path: PathBuf,

    /// File size in bytes
    pub size: u64,
}

/// What happened to a single file during a run
#[derive(Debug)]
pub enum FileOutcome {
    /// File was (or would be) moved to its hashed name
    Renamed {
        from: PathBuf,
        to: PathBuf,
        dry_run: bool,
    },

    /// Stem already carries the hash of the current content
    AlreadyHashed { path: PathBuf },

    /// An identical file already holds the target name; the source was (or would be) removed
    DuplicateRemoved {
        removed: PathBuf,
        existing: PathBuf,
        dry_run: bool,
    },

    /// Hashing, removal or renaming failed; the file was left in place
    Failed { path: PathBuf, error: Error },
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renamed { from, to, dry_run } => {
                if *dry_run {
                    write!(f, "DRY-RUN: ")?;
                }
                write!(f, "{} -> {}", from.display(), to.display())
            }
            Self::AlreadyHashed { path } => {
                write!(f, "Skipped (already hashed): {}", path.display())
            }
            Self::DuplicateRemoved {
                removed,
                existing,
                dry_run,
            } => {
                if *dry_run {
                    write!(f, "DRY-RUN: ")?;
                }
                write!(
                    f,
                    "Identical target exists, removing original: {} -> {}",
                    removed.display(),
                    existing.display()
                )
            }
            Self::Failed { path, error } => write!(f, "Failed: {}: {}", path.display(), error),
        }
    }
}

/// Counters for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: usize,
    pub already_hashed: usize,
    pub duplicates_removed: usize,
    pub failed: usize,
}

impl RenameSummary {
    /// Count one outcome
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Renamed { .. } => self.renamed += 1,
            FileOutcome::AlreadyHashed { .. } => self.already_hashed += 1,
            FileOutcome::DuplicateRemoved { .. } => self.duplicates_removed += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.renamed + self.already_hashed + self.duplicates_removed + self.failed
    }
}

impl fmt::Display for RenameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} files: {} renamed, {} already hashed, {} duplicates removed, {} failed",
            self.total(),
            self.renamed,
            self.already_hashed,
            self.duplicates_removed,
            self.failed
        )
    }
}
