// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::outcome::ScheduledVia;
use crate::request::Request;
use crate::scan::ScanTrigger;

fn scan_with(count: usize) -> ScanResult {
    let mut result = ScanResult::new(ScanTrigger::Timer);
    for i in 0..count {
        result.push(
            Request::new(format!("Item {}", i), 4)
                .with_item(format!("minecraft:item_{}", i))
                .with_target("Builder's Hut"),
            Outcome::Ok { provided: 4 },
        );
    }
    result
}

#[test]
fn empty_scan_renders_explicit_state() {
    let report = Report::render(&ScanResult::new(ScanTrigger::Timer), 20);
    let texts: Vec<_> = report.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![TITLE, EMPTY_MESSAGE, "OK 0  CRAFT 0  WAIT 0  SKIP 0  FAIL 0"]
    );
}

#[test]
fn entries_render_as_two_lines() {
    let report = Report::render(&scan_with(2), 0);
    assert_eq!(report.lines.len(), 1 + 4 + 1);
    assert_eq!(report.lines[1].text, "4x Item 0");
    assert_eq!(report.lines[2].text, "[OK] Builder's Hut");
    assert_eq!(report.lines[2].tone, Tone::Good);
    assert_eq!(report.hidden, 0);
}

#[test]
fn overflow_truncates_but_keeps_counters() {
    // 10 rows: title + footer + marker leave 7 rows, room for 3 whole entries
    let result = scan_with(8);
    let report = Report::render(&result, 10);

    assert_eq!(report.lines.len(), 9);
    assert_eq!(report.hidden, 5);
    assert_eq!(report.lines[7].text, "... 5 more");
    assert_eq!(report.footer(), Some("OK 8  CRAFT 0  WAIT 0  SKIP 0  FAIL 0"));
}

#[test]
fn exact_fit_needs_no_marker() {
    let report = Report::render(&scan_with(3), 8);
    assert_eq!(report.lines.len(), 8);
    assert_eq!(report.hidden, 0);
}

#[test]
fn tiny_display_keeps_title_and_footer() {
    let report = Report::render(&scan_with(3), 2);
    assert_eq!(report.lines.len(), 2);
    assert_eq!(report.hidden, 3);
}

#[test]
fn tiny_display_drops_empty_message() {
    let report = Report::render(&ScanResult::new(ScanTrigger::Timer), 2);
    let texts: Vec<_> = report.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec![TITLE, "OK 0  CRAFT 0  WAIT 0  SKIP 0  FAIL 0"]);
}

#[test]
fn never_exceeds_rows_from_two_up() {
    for rows in 2..12 {
        for count in 0..6 {
            let report = Report::render(&scan_with(count), rows);
            assert!(
                report.lines.len() <= rows,
                "{} entries in {} rows rendered {} lines",
                count,
                rows,
                report.lines.len()
            );
        }
    }
}

#[test]
fn partial_delivery_shows_sent_amount() {
    let mut result = ScanResult::new(ScanTrigger::Manual);
    result.push(
        Request::new("Oak Planks", 64)
            .with_item("minecraft:oak_planks")
            .with_target("Carpenter"),
        Outcome::Scheduled {
            provided: 20,
            via: ScheduledVia::Ordered,
        },
    );
    let report = Report::render(&result, 0);
    assert_eq!(report.lines[2].text, "[CRAFT] Carpenter (20 sent)");
    assert_eq!(report.lines[2].tone, Tone::Pending);
}

#[test]
fn in_progress_crafting_is_tagged_separately() {
    let mut result = ScanResult::new(ScanTrigger::Timer);
    result.push(
        Request::new("Glass", 8).with_item("minecraft:glass"),
        Outcome::Scheduled {
            provided: 0,
            via: ScheduledVia::AlreadyCrafting,
        },
    );
    let report = Report::render(&result, 0);
    assert_eq!(report.lines[2].text, "[CRAFTING] -");
}
