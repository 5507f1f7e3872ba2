// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot transfer that bypasses the scan pipeline

use anyhow::Result;
use courier_core::ItemId;
use serde::Serialize;
use std::fmt;

use crate::client::DaemonClient;
use crate::output::{self, OutputFormat};

#[derive(clap::Args)]
pub struct SendArgs {
    /// Item identifier, e.g. minecraft:cobblestone
    pub item: String,
    /// Number of units to move
    pub amount: u64,
}

#[derive(Serialize)]
struct SendView {
    item: ItemId,
    moved: u64,
    requested: u64,
}

impl fmt::Display for SendView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sent {}/{} {}", self.moved, self.requested, self.item)
    }
}

pub async fn handle(client: &DaemonClient, args: SendArgs, format: OutputFormat) -> Result<()> {
    if args.amount == 0 {
        anyhow::bail!("amount must be at least 1");
    }
    let item = ItemId::new(args.item);
    let (moved, requested) = client.send_items(item.clone(), args.amount).await?;
    output::print(
        &SendView {
            item,
            moved,
            requested,
        },
        format,
    );
    Ok(())
}
