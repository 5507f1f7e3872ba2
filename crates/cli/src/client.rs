// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon client for CLI commands

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use courier_core::{ItemId, PacerState, ScanSummary, CONFIG_FILE};
use courier_daemon::protocol::{self, ProtocolError};
use courier_daemon::{DaemonPaths, PathError, Request, Response, STARTUP_MARKER_PREFIX};
use serde::Serialize;
use thiserror::Error;
use tokio::net::UnixStream;

// Timeout configuration (env vars in milliseconds)
fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Timeout for IPC requests (hello, status, send, report, shutdown)
pub fn timeout_ipc() -> Duration {
    parse_duration_ms("COURIER_TIMEOUT_IPC_MS").unwrap_or(Duration::from_secs(5))
}

/// Timeout for a manual scan, which waits on every bridge call
pub fn timeout_scan() -> Duration {
    parse_duration_ms("COURIER_TIMEOUT_SCAN_MS").unwrap_or(Duration::from_secs(60))
}

/// Timeout for waiting for daemon to start
pub fn timeout_connect() -> Duration {
    parse_duration_ms("COURIER_TIMEOUT_CONNECT_MS").unwrap_or(Duration::from_secs(5))
}

/// Timeout for waiting for process to exit
pub fn timeout_exit() -> Duration {
    parse_duration_ms("COURIER_TIMEOUT_EXIT_MS").unwrap_or(Duration::from_secs(2))
}

/// Polling interval for retries
pub fn poll_interval() -> Duration {
    parse_duration_ms("COURIER_POLL_INTERVAL_MS").unwrap_or(Duration::from_millis(50))
}

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Daemon not running")]
    DaemonNotRunning,

    #[error("Failed to start daemon: {0}")]
    DaemonStartFailed(String),

    #[error("Connection timeout waiting for daemon to start")]
    DaemonStartTimeout,

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Daemon error: {0}")]
    Rejected(String),

    #[error("Unexpected response from daemon")]
    UnexpectedResponse,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Paths(#[from] PathError),

    #[error("Could not determine project root")]
    NoProjectRoot,
}

/// Daemon status as reported over the socket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaemonStatus {
    pub uptime_secs: u64,
    pub state: PacerState,
    pub scans: u64,
    pub last_scan: Option<ScanSummary>,
}

/// Daemon client
pub struct DaemonClient {
    socket_path: PathBuf,
}

impl DaemonClient {
    /// Connect to daemon, auto-starting if not running
    pub async fn connect_or_start(project_root: PathBuf) -> Result<Self, ClientError> {
        let paths = DaemonPaths::for_project(&project_root)?;

        // Restart a daemon left over from a different build
        if let Ok(daemon_version) = std::fs::read_to_string(&paths.version_path) {
            if daemon_version.trim() != env!("CARGO_PKG_VERSION") {
                let _ = daemon_stop(&project_root).await;
            }
        }

        match Self::connect(&project_root) {
            Ok(client) => Ok(client),
            Err(ClientError::DaemonNotRunning) => {
                // Start daemon in background
                let child = start_daemon_background(&project_root)?;
                // Wait for socket with retry, watching for early exit
                Self::connect_with_retry(&project_root, timeout_connect(), child).await
            }
            Err(e) => Err(wrap_with_startup_error(e, &project_root)),
        }
    }

    /// Connect to existing daemon (no auto-start)
    pub fn connect(project_root: &Path) -> Result<Self, ClientError> {
        let socket_path = DaemonPaths::for_project(project_root)?.socket_path;

        if !socket_path.exists() {
            return Err(ClientError::DaemonNotRunning);
        }

        Ok(Self { socket_path })
    }

    async fn connect_with_retry(
        project_root: &Path,
        timeout: Duration,
        mut child: Child,
    ) -> Result<Self, ClientError> {
        let start = Instant::now();
        while start.elapsed() < timeout {
            // Check if daemon process exited early (startup failure)
            if let Ok(Some(status)) = child.try_wait() {
                // Poll for startup error in log (filesystem may need to sync)
                let poll_start = Instant::now();
                while poll_start.elapsed() < timeout_exit() {
                    if let Some(err) = read_startup_error(project_root) {
                        return Err(ClientError::DaemonStartFailed(err));
                    }
                    tokio::time::sleep(poll_interval()).await;
                }
                return Err(ClientError::DaemonStartFailed(format!(
                    "exited with {}",
                    status
                )));
            }

            match Self::connect(project_root) {
                Ok(client) => {
                    // Socket file exists; make sure the daemon is answering
                    if client.ping().await.is_ok() {
                        return Ok(client);
                    }
                    tokio::time::sleep(poll_interval()).await;
                }
                Err(ClientError::DaemonNotRunning) => {
                    tokio::time::sleep(poll_interval()).await;
                }
                Err(e) => return Err(wrap_with_startup_error(e, project_root)),
            }
        }

        // Timeout - check log for startup errors
        Err(wrap_with_startup_error(
            ClientError::DaemonStartTimeout,
            project_root,
        ))
    }

    /// Send a request and receive a response with specific timeouts
    async fn send_with_timeout(
        &self,
        request: Request,
        read_timeout: Duration,
        write_timeout: Duration,
    ) -> Result<Response, ClientError> {
        let stream = UnixStream::connect(&self.socket_path).await?;
        let (mut reader, mut writer) = stream.into_split();

        // Encode and send request with write timeout
        let data = protocol::encode(&request)?;
        tokio::time::timeout(write_timeout, protocol::write_message(&mut writer, &data))
            .await
            .map_err(|_| ProtocolError::Timeout)??;

        // Read response with read timeout
        let response_bytes =
            tokio::time::timeout(read_timeout, protocol::read_message(&mut reader))
                .await
                .map_err(|_| ProtocolError::Timeout)??;

        let response: Response = protocol::decode(&response_bytes)?;
        Ok(response)
    }

    /// Send a request and receive a response
    pub async fn send(&self, request: Request) -> Result<Response, ClientError> {
        self.send_with_timeout(request, timeout_ipc(), timeout_ipc())
            .await
    }

    pub async fn ping(&self) -> Result<(), ClientError> {
        match self.send(Request::Ping).await? {
            Response::Pong => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Trigger a scan now
    pub async fn scan(&self) -> Result<ScanSummary, ClientError> {
        match self
            .send_with_timeout(Request::Scan, timeout_scan(), timeout_ipc())
            .await?
        {
            Response::Scanned { summary } => Ok(summary),
            other => Err(unexpected(other)),
        }
    }

    /// Move items straight to the intake point; returns (moved, requested)
    pub async fn send_items(
        &self,
        item_id: ItemId,
        amount: u64,
    ) -> Result<(u64, u64), ClientError> {
        match self.send(Request::Send { item_id, amount }).await? {
            Response::Sent { moved, requested } => Ok((moved, requested)),
            other => Err(unexpected(other)),
        }
    }

    /// Lines of the last report, empty if no scan has run
    pub async fn last_report(&self) -> Result<Vec<String>, ClientError> {
        match self.send(Request::LastReport).await? {
            Response::Report { lines } => Ok(lines),
            other => Err(unexpected(other)),
        }
    }

    /// Get daemon status
    pub async fn status(&self) -> Result<DaemonStatus, ClientError> {
        match self.send(Request::Status).await? {
            Response::Status {
                uptime_secs,
                state,
                scans,
                last_scan,
            } => Ok(DaemonStatus {
                uptime_secs,
                state,
                scans,
                last_scan,
            }),
            other => Err(unexpected(other)),
        }
    }

    /// Request daemon shutdown
    pub async fn shutdown(&self) -> Result<(), ClientError> {
        match self.send(Request::Shutdown).await? {
            Response::ShuttingDown => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Get daemon version via Hello handshake
    pub async fn hello(&self) -> Result<String, ClientError> {
        match self
            .send(Request::Hello {
                version: env!("CARGO_PKG_VERSION").to_string(),
            })
            .await?
        {
            Response::Hello { version } => Ok(version),
            other => Err(unexpected(other)),
        }
    }
}

/// The daemon answered with something other than what was asked for
fn unexpected(response: Response) -> ClientError {
    match response {
        Response::Error { message } => ClientError::Rejected(message),
        _ => ClientError::UnexpectedResponse,
    }
}

/// Start the daemon in the background, returning the child process handle
fn start_daemon_background(project_root: &Path) -> Result<Child, ClientError> {
    let courierd_path = find_courierd_binary();

    Command::new(&courierd_path)
        .arg(project_root)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClientError::DaemonStartFailed(e.to_string()))
}

/// Stop the daemon (graceful first, then forceful)
/// Returns true if daemon was stopped, false if it wasn't running
pub async fn daemon_stop(project_root: &Path) -> Result<bool, ClientError> {
    let paths = DaemonPaths::for_project(project_root)?;
    let client = match DaemonClient::connect(project_root) {
        Ok(c) => c,
        Err(ClientError::DaemonNotRunning) => {
            cleanup_stale_pid(&paths);
            return Ok(false);
        }
        Err(e) => return Err(e),
    };

    // Try graceful shutdown (timeout handled by send())
    let shutdown_result = client.shutdown().await;

    if let Some(pid) = read_daemon_pid(&paths) {
        if shutdown_result.is_ok() {
            // Graceful shutdown succeeded, wait for process to exit
            wait_for_exit(pid, timeout_exit()).await;
        }

        // Force kill if still running
        if process_exists(pid) {
            force_kill_daemon(pid);
            wait_for_exit(pid, timeout_exit()).await;
        }
    }

    cleanup_stale_pid(&paths);
    Ok(true)
}

/// Wait for a process to exit
async fn wait_for_exit(pid: u32, timeout: Duration) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if !process_exists(pid) {
            return true;
        }
        tokio::time::sleep(poll_interval()).await;
    }
    false
}

/// Find the courierd binary
fn find_courierd_binary() -> PathBuf {
    // Explicit override (used by tests to ensure correct binary)
    if let Ok(path) = std::env::var("COURIER_DAEMON_BINARY") {
        return PathBuf::from(path);
    }

    // Check current executable's directory
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let sibling = dir.join("courierd");
            if sibling.exists() {
                return sibling;
            }
        }
    }

    // Fall back to PATH lookup
    PathBuf::from("courierd")
}

/// Find the project root by walking up from current directory
///
/// Checks COURIER_PROJECT_ROOT first, then walks up looking for courier.toml.
pub fn find_project_root() -> Result<PathBuf, ClientError> {
    if let Ok(root) = std::env::var("COURIER_PROJECT_ROOT") {
        return Ok(PathBuf::from(root));
    }

    let cwd = std::env::current_dir().map_err(|_| ClientError::NoProjectRoot)?;
    let mut current = cwd.clone();
    loop {
        if current.join(CONFIG_FILE).is_file() {
            return Ok(current);
        }
        if !current.pop() {
            // No courier.toml found, use current directory as project root
            return Ok(cwd);
        }
    }
}

/// Remove an orphaned PID file left by a daemon that is no longer running
fn cleanup_stale_pid(paths: &DaemonPaths) {
    if paths.lock_path.exists() {
        let _ = std::fs::remove_file(&paths.lock_path);
    }
}

/// Get the PID from the daemon PID file, if it exists
pub fn read_daemon_pid(paths: &DaemonPaths) -> Option<u32> {
    std::fs::read_to_string(&paths.lock_path)
        .ok()
        .and_then(|content| content.trim().parse::<u32>().ok())
}

/// Whether `pid` is alive (`kill -0`)
pub fn process_exists(pid: u32) -> bool {
    send_signal(pid, "-0")
}

/// SIGKILL the daemon after a graceful shutdown did not take
pub fn force_kill_daemon(pid: u32) -> bool {
    send_signal(pid, "-9")
}

fn send_signal(pid: u32, signal: &str) -> bool {
    Command::new("kill")
        .args([signal, &pid.to_string()])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

/// Read daemon log from the last startup marker, looking for errors.
/// Returns the error message if found, None otherwise.
pub fn read_startup_error(project_root: &Path) -> Option<String> {
    let paths = DaemonPaths::for_project(project_root).ok()?;
    let content = std::fs::read_to_string(&paths.log_path).ok()?;
    startup_error_in(&content)
}

fn startup_error_in(log: &str) -> Option<String> {
    let attempt = &log[log.rfind(STARTUP_MARKER_PREFIX)?..];

    let failures: Vec<&str> = attempt
        .lines()
        .filter(|line| line.contains(" ERROR ") || line.contains("Failed to start"))
        .collect();
    if failures.is_empty() {
        return None;
    }

    // Prefer the message after the level/target prefix
    let messages: Vec<&str> = failures
        .iter()
        .copied()
        .filter_map(|line| line.split_once(": ").map(|(_, msg)| msg))
        .collect();
    let lines = if messages.is_empty() { failures } else { messages };
    Some(lines.join("\n"))
}

/// Wrap an error with startup log info if available.
fn wrap_with_startup_error(err: ClientError, project_root: &Path) -> ClientError {
    // Don't double-wrap
    if matches!(err, ClientError::DaemonStartFailed(_)) {
        return err;
    }

    if let Some(startup_error) = read_startup_error(project_root) {
        ClientError::DaemonStartFailed(startup_error)
    } else {
        err
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
