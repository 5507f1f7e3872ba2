// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime that drives the pacer and carries out its effects

use crate::error::EngineError;
use crate::fulfill::FulfillmentController;
use crate::scan::ScanOrchestrator;
use courier_adapters::{ColonyAdapter, DisplayAdapter, InventoryAdapter, WorldClockAdapter};
use courier_core::{
    Classifier, Clock, CourierConfig, ItemId, NightWindow, Pacer, PacerEffect, PacerEvent,
    PacerState, Report, ScanSummary, ScanTrigger,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Loop settings derived from `courier.toml`
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Ticks between timer-driven scans
    pub interval_ticks: u32,
    pub night_pause: bool,
    pub night: NightWindow,
    /// Display rows for the report; 0 means unlimited
    pub rows: usize,
    pub cooldown: Duration,
}

impl RuntimeConfig {
    pub fn from_config(config: &CourierConfig) -> Self {
        Self {
            interval_ticks: config.interval_ticks(),
            night_pause: config.night.pause,
            night: config.night_window(),
            rows: config.display.rows,
            cooldown: config.cooldown.window,
        }
    }
}

/// Runtime adapter dependencies
pub struct RuntimeDeps<C, I, W, D> {
    pub colony: C,
    pub inventory: I,
    pub world: W,
    pub display: D,
}

/// Events the loop feeds in, one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    Tick,
    ManualTrigger,
}

/// Result of a one-shot `send`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub moved: u64,
    pub requested: u64,
}

/// Owns everything mutated across scans: pacer, cooldowns, last report
pub struct Runtime<C, I, W, D, K: Clock> {
    scanner: ScanOrchestrator<C, I>,
    inventory: I,
    world: W,
    display: D,
    clock: K,
    pacer: Pacer,
    night: NightWindow,
    rows: usize,
    started: Instant,
    scans: u64,
    last_report: Option<Report>,
    last_summary: Option<ScanSummary>,
}

impl<C, I, W, D, K> Runtime<C, I, W, D, K>
where
    C: ColonyAdapter,
    I: InventoryAdapter,
    W: WorldClockAdapter,
    D: DisplayAdapter,
    K: Clock,
{
    pub fn new(
        deps: RuntimeDeps<C, I, W, D>,
        classifier: Classifier,
        clock: K,
        config: RuntimeConfig,
    ) -> Self {
        let controller =
            FulfillmentController::new(deps.inventory.clone(), classifier, config.cooldown);
        let started = clock.now();
        Self {
            scanner: ScanOrchestrator::new(deps.colony, controller),
            inventory: deps.inventory,
            world: deps.world,
            display: deps.display,
            clock,
            pacer: Pacer::new(config.interval_ticks, config.night_pause),
            night: config.night,
            rows: config.rows,
            started,
            scans: 0,
            last_report: None,
            last_summary: None,
        }
    }

    /// Handle one loop event
    ///
    /// Returns the summary when the event ran a scan. A failed scan is
    /// reported to the caller; the pacer has already been reset.
    pub async fn handle_event(
        &mut self,
        event: LoopEvent,
    ) -> Result<Option<ScanSummary>, EngineError> {
        let pacer_event = match event {
            LoopEvent::Tick => PacerEvent::Tick {
                night: self.is_night().await,
            },
            LoopEvent::ManualTrigger => PacerEvent::ManualTrigger,
        };

        let (pacer, effects) = self.pacer.clone().transition(pacer_event);
        self.pacer = pacer;

        let mut summary = None;
        for effect in effects {
            match effect {
                PacerEffect::RunScan(trigger) => summary = Some(self.scan(trigger).await?),
                PacerEffect::RenderCountdown { remaining } => {
                    if let Err(e) = self.display.render_countdown(remaining).await {
                        tracing::warn!(error = %e, "countdown render failed");
                    }
                }
                PacerEffect::RenderPaused => {
                    if let Err(e) = self.display.render_paused().await {
                        tracing::warn!(error = %e, "pause render failed");
                    }
                }
            }
        }
        Ok(summary)
    }

    /// Run a scan outside the pacer, e.g. once at startup
    pub async fn scan(&mut self, trigger: ScanTrigger) -> Result<ScanSummary, EngineError> {
        let result = match self.scanner.run_scan(self.clock.now(), trigger).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(?trigger, error = %e, "scan aborted");
                return Err(e);
            }
        };
        self.scans += 1;

        let report = Report::render(&result, self.rows);
        if let Err(e) = self.display.render_report(&report).await {
            tracing::warn!(error = %e, "report render failed");
        }

        let summary = result.summary();
        self.last_report = Some(report);
        self.last_summary = Some(summary);
        Ok(summary)
    }

    /// Move `amount` units straight to the intake point, bypassing the scan
    pub async fn send(&self, item_id: &ItemId, amount: u64) -> Result<SendReceipt, EngineError> {
        if amount == 0 {
            return Err(EngineError::InvalidAmount(amount));
        }
        let moved = self.inventory.transfer(item_id, amount).await?;
        tracing::info!(item = %item_id, moved, requested = amount, "manual send");
        Ok(SendReceipt {
            moved,
            requested: amount,
        })
    }

    /// Night only matters when pausing is on; otherwise the world clock is left alone
    async fn is_night(&self) -> bool {
        if !self.pacer.night_pause() {
            return false;
        }
        match self.world.time_of_day().await {
            Ok(hour) => self.night.contains(hour),
            Err(e) => {
                tracing::warn!(error = %e, "world clock unavailable, assuming day");
                false
            }
        }
    }

    pub fn pacer_state(&self) -> PacerState {
        self.pacer.state
    }

    pub fn scans(&self) -> u64 {
        self.scans
    }

    pub fn uptime(&self) -> Duration {
        self.clock.since(self.started)
    }

    pub fn last_report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }

    pub fn last_summary(&self) -> Option<ScanSummary> {
        self.last_summary
    }

    pub fn controller(&self) -> &FulfillmentController<I> {
        self.scanner.controller()
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
