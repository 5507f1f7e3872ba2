// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Display-ready rendering of a scan
//!
//! Layout is a title, two lines per request and a footer with the counters.
//! When the display has fewer rows than the scan needs, enumeration stops at
//! the last whole entry and an overflow line names how many were hidden.
//! Counters always cover every request, hidden or not.

use crate::outcome::{Outcome, OutcomeKind};
use crate::scan::{ScanEntry, ScanResult};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TITLE: &str = "Colony Requests";
pub const EMPTY_MESSAGE: &str = "No open requests";

/// Color hint for a display that can render one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Title,
    Plain,
    Good,
    Pending,
    Muted,
    Bad,
}

impl From<OutcomeKind> for Tone {
    fn from(kind: OutcomeKind) -> Self {
        match kind {
            OutcomeKind::Ok => Tone::Good,
            OutcomeKind::Scheduled | OutcomeKind::Wait => Tone::Pending,
            OutcomeKind::Skip => Tone::Muted,
            OutcomeKind::Fail => Tone::Bad,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub text: String,
    pub tone: Tone,
}

impl ReportLine {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub lines: Vec<ReportLine>,
    /// Entries that did not fit on the display
    pub hidden: usize,
}

impl Report {
    /// Render a scan into at most `rows` lines; `rows == 0` means unlimited
    ///
    /// Title and footer are always kept, so `rows` below 2 still yields two lines.
    pub fn render(result: &ScanResult, rows: usize) -> Self {
        let mut lines = vec![ReportLine::new(TITLE, Tone::Title)];
        let footer = ReportLine::new(result.counts.to_string(), Tone::Title);

        if result.is_empty() {
            if rows == 0 || rows > 2 {
                lines.push(ReportLine::new(EMPTY_MESSAGE, Tone::Muted));
            }
            lines.push(footer);
            return Self { lines, hidden: 0 };
        }

        let shown = visible_entries(result.entries.len(), rows);
        for entry in &result.entries[..shown] {
            lines.extend(entry_lines(entry));
        }

        let hidden = result.entries.len() - shown;
        if hidden > 0 && rows > 2 {
            lines.push(ReportLine::new(format!("... {} more", hidden), Tone::Muted));
        }

        lines.push(footer);
        Self { lines, hidden }
    }

    pub fn footer(&self) -> Option<&str> {
        self.lines.last().map(|l| l.text.as_str())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}

/// How many whole entries fit between title and footer
fn visible_entries(count: usize, rows: usize) -> usize {
    if rows == 0 {
        return count;
    }
    let body = rows.saturating_sub(2);
    if count * 2 <= body {
        return count;
    }
    // Reserve one row for the overflow marker
    body.saturating_sub(1) / 2
}

fn entry_lines(entry: &ScanEntry) -> [ReportLine; 2] {
    let request = &entry.request;
    let tone = Tone::from(entry.outcome.kind());
    let target = if request.target.is_empty() {
        "-"
    } else {
        request.target.as_str()
    };

    let destination = match &entry.outcome {
        Outcome::Ok { .. } | Outcome::Skip { .. } => {
            format!("[{}] {}", entry.outcome.tag(), target)
        }
        partial => match partial.provided() {
            0 => format!("[{}] {}", partial.tag(), target),
            provided => format!("[{}] {} ({} sent)", partial.tag(), target, provided),
        },
    };

    [
        ReportLine::new(
            format!("{}x {}", request.needed, request.display_name),
            Tone::Plain,
        ),
        ReportLine::new(destination, tone),
    ]
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
