// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Where a project's daemon keeps its socket, lock, version and log files

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Startup marker prefix written to the log before anything else
///
/// Full format: "--- courierd: starting (pid: 12345)". The CLI searches for
/// the last marker to find errors from the current startup attempt.
pub const STARTUP_MARKER_PREFIX: &str = "--- courierd: starting (pid: ";

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Project not found at {0}: {1}")]
    ProjectNotFound(PathBuf, std::io::Error),

    #[error("Could not determine state directory")]
    NoStateDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonPaths {
    pub project_root: PathBuf,
    pub socket_path: PathBuf,
    /// Lock file, also holding the daemon's PID
    pub lock_path: PathBuf,
    pub version_path: PathBuf,
    pub log_path: PathBuf,
}

impl DaemonPaths {
    pub fn for_project(project_root: &Path) -> Result<Self, PathError> {
        let canonical = project_root
            .canonicalize()
            .map_err(|e| PathError::ProjectNotFound(project_root.to_path_buf(), e))?;

        let hash = project_hash(&canonical);
        let state_dir = state_dir()?.join("projects").join(&hash);

        Ok(Self {
            project_root: canonical,
            socket_path: socket_dir().join(format!("{}.sock", hash)),
            lock_path: state_dir.join("daemon.pid"),
            version_path: state_dir.join("daemon.version"),
            log_path: state_dir.join("daemon.log"),
        })
    }

    pub fn state_dir(&self) -> Option<&Path> {
        self.log_path.parent()
    }
}

/// `$XDG_STATE_HOME/courier`, or `~/.local/state/courier`
fn state_dir() -> Result<PathBuf, PathError> {
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("courier"));
    }

    let home = std::env::var("HOME").map_err(|_| PathError::NoStateDir)?;
    Ok(PathBuf::from(home).join(".local/state/courier"))
}

/// Uses /tmp/courier by default to keep paths short (macOS SUN_LEN = 104).
/// Can be overridden with COURIER_SOCKET_DIR for testing.
fn socket_dir() -> PathBuf {
    match std::env::var("COURIER_SOCKET_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => PathBuf::from("/tmp/courier"),
    }
}

/// First 16 hex chars of the SHA-256 of the canonical project path
fn project_hash(path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.to_string_lossy().as_bytes());
    let result = hasher.finalize();
    result[..8].iter().map(|b| format!("{:02x}", b)).collect()
}
