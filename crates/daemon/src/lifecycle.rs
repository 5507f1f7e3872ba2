// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle management: startup, ticking, shutdown.

use std::fs::File;
use std::time::Duration;

use courier_adapters::{
    Bridge, BridgeError, ConfiguredDisplay, TracedColonyAdapter, TracedInventoryAdapter,
};
use courier_core::{ConfigError, CourierConfig, ScanSummary, ScanTrigger, SystemClock};
use courier_daemon::{DaemonPaths, PathError};
use courier_engine::{EngineError, LoopEvent, Runtime, RuntimeConfig, RuntimeDeps};
use fs2::FileExt;
use thiserror::Error;
use tokio::net::UnixListener;
use tokio::time::Instant;
use tracing::{info, warn};

/// Daemon runtime with concrete adapter types (wrapped with tracing)
pub type DaemonRuntime = Runtime<
    TracedColonyAdapter<Bridge>,
    TracedInventoryAdapter<Bridge>,
    Bridge,
    ConfiguredDisplay,
    SystemClock,
>;

/// Daemon state during operation
pub struct DaemonState {
    pub paths: DaemonPaths,
    // NOTE(lifetime): Held to maintain exclusive file lock; released on drop
    #[allow(dead_code)]
    lock_file: File,
    /// Unix socket listener
    pub listener: UnixListener,
    pub runtime: DaemonRuntime,
    /// Timer resolution
    tick: Duration,
    /// When the next tick fires; only ticks and manual scans move it
    pub next_tick: Instant,
    pub scan_on_startup: bool,
    /// Shutdown requested flag
    pub shutdown_requested: bool,
}

impl DaemonState {
    fn rearm(&mut self) {
        self.next_tick = Instant::now() + self.tick;
    }

    /// Feed one timer tick through the runtime
    ///
    /// A failed scan is logged; the loop keeps running.
    pub async fn on_tick(&mut self) {
        match self.runtime.handle_event(LoopEvent::Tick).await {
            Ok(Some(summary)) => info!(counts = %summary.counts, "timer scan"),
            Ok(None) => {}
            Err(e) => warn!("Timer scan failed: {}", e),
        }
        self.rearm();
    }

    /// Scan immediately and restart the countdown, whatever the pacer state
    pub async fn manual_scan(&mut self) -> Result<ScanSummary, LifecycleError> {
        let result = self.runtime.handle_event(LoopEvent::ManualTrigger).await;
        self.rearm();
        result?.ok_or(LifecycleError::NoScan)
    }

    pub async fn startup_scan(&mut self) {
        if let Err(e) = self.runtime.scan(ScanTrigger::Startup).await {
            warn!("Startup scan failed: {}", e);
        }
    }

    /// Shutdown the daemon gracefully
    pub async fn shutdown(&mut self) -> Result<(), LifecycleError> {
        info!("Shutting down daemon...");

        // Remove socket file
        if self.paths.socket_path.exists() {
            if let Err(e) = std::fs::remove_file(&self.paths.socket_path) {
                warn!("Failed to remove socket file: {}", e);
            }
        }

        // Remove PID file
        if self.paths.lock_path.exists() {
            if let Err(e) = std::fs::remove_file(&self.paths.lock_path) {
                warn!("Failed to remove PID file: {}", e);
            }
        }

        // Remove version file
        if self.paths.version_path.exists() {
            if let Err(e) = std::fs::remove_file(&self.paths.version_path) {
                warn!("Failed to remove version file: {}", e);
            }
        }

        // Lock file is released automatically when self.lock_file is dropped

        info!("Daemon shutdown complete");
        Ok(())
    }
}

/// Lifecycle errors
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("{0}")]
    Path(#[from] PathError),

    #[error("Failed to acquire lock: daemon already running?")]
    LockFailed(#[source] std::io::Error),

    #[error("Failed to bind socket at {0}: {1}")]
    BindFailed(std::path::PathBuf, std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Bridge unreachable: {0}")]
    Bridge(#[from] BridgeError),

    #[error("{0}")]
    Engine(#[from] EngineError),

    #[error("Manual trigger did not run a scan")]
    NoScan,
}

/// Start the daemon
pub async fn startup(paths: &DaemonPaths) -> Result<DaemonState, LifecycleError> {
    match startup_inner(paths).await {
        Ok(state) => Ok(state),
        Err(e) => {
            // Clean up any resources created before failure; a lock held by
            // another daemon means those files are not ours
            if !matches!(e, LifecycleError::LockFailed(_)) {
                cleanup_on_failure(paths);
            }
            Err(e)
        }
    }
}

/// Inner startup logic - cleanup_on_failure called if this fails
async fn startup_inner(paths: &DaemonPaths) -> Result<DaemonState, LifecycleError> {
    // 1. Create state and socket directories
    if let Some(dir) = paths.state_dir() {
        std::fs::create_dir_all(dir)?;
    }
    if let Some(parent) = paths.socket_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // 2. Acquire lock file FIRST - prevents races
    // Opened without truncation so a running daemon's PID survives a failed attempt
    let lock_file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&paths.lock_path)?;
    lock_file
        .try_lock_exclusive()
        .map_err(LifecycleError::LockFailed)?;

    // Write PID to lock file
    use std::io::Write;
    let mut lock_file = lock_file;
    lock_file.set_len(0)?;
    writeln!(lock_file, "{}", std::process::id())?;
    let lock_file = lock_file;

    // Write version file
    std::fs::write(&paths.version_path, env!("CARGO_PKG_VERSION"))?;

    // 3. Load config and reach the bridge BEFORE binding the socket
    let config = CourierConfig::for_project(&paths.project_root)?;
    let bridge = Bridge::connect(&config.bridge, &paths.project_root).await?;
    info!("Using bridge: {}", bridge.describe());

    // 4. Create runtime (adapters wrapped with tracing for observability)
    let runtime = Runtime::new(
        RuntimeDeps {
            colony: TracedColonyAdapter::new(bridge.clone()),
            inventory: TracedInventoryAdapter::new(bridge.clone()),
            world: bridge,
            display: ConfiguredDisplay::new(config.display.kind),
        },
        config.classifier(),
        SystemClock,
        RuntimeConfig::from_config(&config),
    );

    // 5. Remove stale socket and bind (LAST - only after all validation passes)
    if paths.socket_path.exists() {
        std::fs::remove_file(&paths.socket_path)?;
    }
    let listener = UnixListener::bind(&paths.socket_path)
        .map_err(|e| LifecycleError::BindFailed(paths.socket_path.clone(), e))?;

    info!(
        "Daemon started for project: {}",
        paths.project_root.display()
    );

    Ok(DaemonState {
        paths: paths.clone(),
        lock_file,
        listener,
        runtime,
        tick: config.scan.tick,
        next_tick: Instant::now() + config.scan.tick,
        scan_on_startup: config.scan.on_startup,
        shutdown_requested: false,
    })
}

/// Clean up resources on startup failure
fn cleanup_on_failure(paths: &DaemonPaths) {
    // Remove socket if we created it
    if paths.socket_path.exists() {
        let _ = std::fs::remove_file(&paths.socket_path);
    }

    // Remove version file
    if paths.version_path.exists() {
        let _ = std::fs::remove_file(&paths.version_path);
    }

    // Remove PID/lock file
    if paths.lock_path.exists() {
        let _ = std::fs::remove_file(&paths.lock_path);
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
pub(crate) mod tests;
