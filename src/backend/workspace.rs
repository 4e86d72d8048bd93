//! Temporary build workspace
//!
//! One workspace per archive build. It is removed file by file when the
//! build ends, on every path out of the pipeline. Files that cannot be
//! removed are reported, never raised.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use tempfile::TempDir;

use crate::utils::{CleanupFailure, Error, Result};

/// Prefix of workspace directory names
pub const WORKSPACE_PREFIX: &str = "temp";

/// A temporary directory owned by one pipeline run
#[derive(Debug)]
pub struct BuildWorkspace {
    dir: Option<TempDir>,
    path: PathBuf,
}

impl BuildWorkspace {
    /// Create a fresh workspace directory inside `parent`
    pub fn acquire(parent: &Path) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(parent)
            .map_err(|e| {
                Error::path_creation(parent, format!("could not create temp path: {}", e))
            })?;
        let path = dir.path().to_path_buf();
        Ok(Self { dir: Some(dir), path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the workspace, returning what could not be deleted
    pub fn cleanup(mut self) -> Vec<CleanupFailure> {
        self.release()
    }

    fn release(&mut self) -> Vec<CleanupFailure> {
        match self.dir.take() {
            Some(dir) => {
                let failures = remove_tree(&self.path);
                // Anything left over is retried once more by TempDir's own drop
                drop(dir);
                failures
            }
            None => Vec::new(),
        }
    }
}

impl Drop for BuildWorkspace {
    fn drop(&mut self) {
        for failure in self.release() {
            warn!("{}", failure);
        }
    }
}

/// Delete `root` recursively, files first, continuing past failures
pub fn remove_tree(root: &Path) -> Vec<CleanupFailure> {
    let mut failures = Vec::new();
    remove_entry(root, &mut failures);
    failures
}

fn remove_entry(path: &Path, failures: &mut Vec<CleanupFailure>) {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return,
        Err(e) => {
            failures.push(CleanupFailure { path: path.to_path_buf(), cause: e.to_string() });
            return;
        }
    };

    if !metadata.is_dir() {
        if let Err(e) = fs::remove_file(path) {
            failures.push(CleanupFailure { path: path.to_path_buf(), cause: e.to_string() });
        }
        return;
    }

    match fs::read_dir(path) {
        Ok(entries) => {
            for entry in entries {
                match entry {
                    Ok(entry) => remove_entry(&entry.path(), failures),
                    Err(e) => failures.push(CleanupFailure {
                        path: path.to_path_buf(),
                        cause: e.to_string(),
                    }),
                }
            }
        }
        Err(e) => {
            failures.push(CleanupFailure { path: path.to_path_buf(), cause: e.to_string() });
            return;
        }
    }

    if let Err(e) = fs::remove_dir(path) {
        failures.push(CleanupFailure { path: path.to_path_buf(), cause: e.to_string() });
    }
}
