//! Core functionality for appending content hashes to filenames.
//!
//! This library provides the building blocks for cache-busting renames:
//! - File discovery
//! - Streaming content digests
//! - Hashed name derivation and collision resolution
//! - Safe rename and duplicate removal

// -- External Dependencies --
use log::info;

// -- Standard Library --
use std::path::Path;

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::*;
pub use error::{Error, Result};
pub use types::*;

// -- Public Modules --
pub mod config;
pub mod discovery;
pub mod logging;
pub mod naming;
pub mod processing;
pub mod rename;
pub mod types;

/// Main entry point for the renaming process
pub struct HashRenamer {
    config: Config,
}

impl HashRenamer {
    /// Create a new HashRenamer, rejecting an invalid configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Discover all files to process under the directory
    pub fn discover_files(&self, directory: &Path) -> Result<Vec<FileEntry>> {
        discovery::discover_files(directory, self.config.recursive)
    }

    /// Process every file under the directory, calling `on_outcome` as each
    /// one completes.
    ///
    /// Only an invalid directory is returned as an error; per-file failures
    /// are reported through `on_outcome` and the run continues.
    pub fn run_with<F>(&self, directory: &Path, mut on_outcome: F) -> Result<RenameSummary>
    where
        F: FnMut(FileOutcome),
    {
        info!("Discovering files in {}...", directory.display());
        let files = self.discover_files(directory)?;
        info!("Found {} files", files.len());

        let mut summary = RenameSummary::default();
        for file in &files {
            let outcome = rename::process_file(&file.path, &self.config);
            summary.record(&outcome);
            on_outcome(outcome);
        }

        info!("{}", summary);
        Ok(summary)
    }

    /// Process every file under the directory and collect the outcomes
    pub fn run(&self, directory: &Path) -> Result<Vec<FileOutcome>> {
        let mut outcomes = Vec::new();
        self.run_with(directory, |outcome| outcomes.push(outcome))?;
        Ok(outcomes)
    }
}
