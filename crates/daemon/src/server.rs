// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Socket server and connection handling.

use tokio::net::UnixStream;
use tracing::{debug, error, info};

use crate::lifecycle::DaemonState;
use courier_daemon::protocol::{self, Request, Response, DEFAULT_TIMEOUT, PROTOCOL_VERSION};

/// Handle a single client connection
pub async fn handle_connection(
    daemon: &mut DaemonState,
    stream: UnixStream,
) -> Result<(), ServerError> {
    // Split stream for reading/writing
    let (mut reader, mut writer) = stream.into_split();

    // Read request with timeout
    let request = match protocol::read_request(&mut reader, DEFAULT_TIMEOUT).await {
        Ok(req) => req,
        Err(protocol::ProtocolError::Timeout) => {
            error!("Request read timeout");
            return Err(ServerError::Timeout);
        }
        Err(protocol::ProtocolError::ConnectionClosed) => {
            debug!("Client disconnected before sending request");
            return Ok(());
        }
        Err(e) => {
            error!("Failed to read request: {}", e);
            return Err(ServerError::Protocol(e));
        }
    };

    debug!("Received request: {:?}", request);

    let response = handle_request(daemon, request).await;

    debug!("Sending response: {:?}", response);

    // Write response with timeout
    protocol::write_response(&mut writer, &response, DEFAULT_TIMEOUT)
        .await
        .map_err(ServerError::Protocol)?;

    Ok(())
}

/// Handle a single request and return a response
async fn handle_request(daemon: &mut DaemonState, request: Request) -> Response {
    match request {
        Request::Ping => Response::Pong,

        Request::Hello { version: _ } => Response::Hello {
            version: PROTOCOL_VERSION.to_string(),
        },

        Request::Status => {
            let runtime = &daemon.runtime;
            Response::Status {
                uptime_secs: runtime.uptime().as_secs(),
                state: runtime.pacer_state(),
                scans: runtime.scans(),
                last_scan: runtime.last_summary(),
            }
        }

        Request::Scan => match daemon.manual_scan().await {
            Ok(summary) => {
                info!(counts = %summary.counts, "manual scan");
                Response::Scanned { summary }
            }
            Err(e) => Response::Error {
                message: e.to_string(),
            },
        },

        Request::Send { item_id, amount } => match daemon.runtime.send(&item_id, amount).await {
            Ok(receipt) => Response::Sent {
                moved: receipt.moved,
                requested: receipt.requested,
            },
            Err(e) => Response::Error {
                message: e.to_string(),
            },
        },

        Request::LastReport => Response::Report {
            lines: daemon
                .runtime
                .last_report()
                .map(|report| report.lines.iter().map(|l| l.text.clone()).collect())
                .unwrap_or_default(),
        },

        Request::Shutdown => {
            daemon.shutdown_requested = true;
            Response::ShuttingDown
        }
    }
}

/// Server errors
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Protocol error: {0}")]
    Protocol(#[from] protocol::ProtocolError),

    #[error("Request timeout")]
    Timeout,
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
