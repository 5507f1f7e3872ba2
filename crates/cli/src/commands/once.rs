// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process single scan, no daemon involved

use anyhow::{Context, Result};
use courier_adapters::{Bridge, NoOpDisplay, TracedColonyAdapter, TracedInventoryAdapter};
use courier_core::{CourierConfig, ScanTrigger, SystemClock};
use courier_engine::{Runtime, RuntimeConfig, RuntimeDeps};
use std::path::{Path, PathBuf};

use crate::output::{self, OutputFormat};

#[derive(clap::Args)]
pub struct OnceArgs {
    /// Config file to use instead of the project's courier.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub async fn handle(args: OnceArgs, project_root: &Path, format: OutputFormat) -> Result<()> {
    init_logging();

    let config = match &args.config {
        Some(path) => CourierConfig::load(path),
        None => CourierConfig::for_project(project_root),
    }
    .context("failed to load config")?;

    let bridge = Bridge::connect(&config.bridge, project_root)
        .await
        .context("failed to connect bridge")?;
    tracing::info!("Using bridge: {}", bridge.describe());

    let mut runtime = Runtime::new(
        RuntimeDeps {
            colony: TracedColonyAdapter::new(bridge.clone()),
            inventory: TracedInventoryAdapter::new(bridge.clone()),
            world: bridge,
            display: NoOpDisplay,
        },
        config.classifier(),
        SystemClock,
        RuntimeConfig::from_config(&config),
    );

    runtime.scan(ScanTrigger::Manual).await?;
    if let Some(report) = runtime.last_report() {
        output::print(report, format);
    }
    Ok(())
}

/// Diagnostics go to stderr so stdout carries only the report
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
