// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One full pass over the colony's open requests

use crate::error::EngineError;
use crate::fulfill::FulfillmentController;
use courier_adapters::{ColonyAdapter, InventoryAdapter};
use courier_core::{ScanResult, ScanTrigger};
use std::time::Instant;

pub struct ScanOrchestrator<C, I> {
    colony: C,
    controller: FulfillmentController<I>,
}

impl<C, I> ScanOrchestrator<C, I>
where
    C: ColonyAdapter,
    I: InventoryAdapter,
{
    pub fn new(colony: C, controller: FulfillmentController<I>) -> Self {
        Self { colony, controller }
    }

    pub fn controller(&self) -> &FulfillmentController<I> {
        &self.controller
    }

    /// Fetch requests and stock once, then resolve every request in order
    ///
    /// Only a failed fetch aborts the scan. Every fetched request is
    /// resolved and counted, whatever the display can show.
    pub async fn run_scan(
        &mut self,
        now: Instant,
        trigger: ScanTrigger,
    ) -> Result<ScanResult, EngineError> {
        let requests = self.colony.open_requests().await?;
        let mut result = ScanResult::new(trigger);
        if requests.is_empty() {
            tracing::info!(?trigger, "no open requests");
            return Ok(result);
        }

        let snapshot = self.controller.inventory().snapshot().await?;
        tracing::debug!(
            requests = requests.len(),
            items = snapshot.len(),
            "scanning"
        );

        for request in requests {
            let outcome = self.controller.resolve(&request, &snapshot, now).await;
            tracing::debug!(
                name = %request.display_name,
                needed = request.needed,
                outcome = %outcome,
                "resolved"
            );
            result.push(request, outcome);
        }

        tracing::info!(?trigger, total = result.counts.total, counts = %result.counts, "scan complete");
        Ok(result)
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
