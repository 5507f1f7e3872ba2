// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

const DAY: PacerEvent = PacerEvent::Tick { night: false };
const NIGHT: PacerEvent = PacerEvent::Tick { night: true };

fn drive(pacer: Pacer, events: &[PacerEvent]) -> (Pacer, Vec<PacerEffect>) {
    let mut all = Vec::new();
    let mut pacer = pacer;
    for event in events {
        let (next, effects) = pacer.transition(*event);
        pacer = next;
        all.extend(effects);
    }
    (pacer, all)
}

fn scans(effects: &[PacerEffect]) -> Vec<ScanTrigger> {
    effects
        .iter()
        .filter_map(|e| match e {
            PacerEffect::RunScan(trigger) => Some(*trigger),
            _ => None,
        })
        .collect()
}

#[test]
fn new_pacer_counts_down_full_interval() {
    let pacer = Pacer::new(5, true);
    assert_eq!(pacer.state, PacerState::Countdown { remaining: 5 });
}

#[test]
fn tick_decrements_and_renders_countdown() {
    let (pacer, effects) = Pacer::new(5, true).transition(DAY);
    assert_eq!(pacer.state, PacerState::Countdown { remaining: 4 });
    assert_eq!(effects, vec![PacerEffect::RenderCountdown { remaining: 4 }]);
}

#[test]
fn countdown_reaching_zero_scans_and_resets() {
    let (pacer, effects) = drive(Pacer::new(3, true), &[DAY, DAY, DAY]);
    assert_eq!(scans(&effects), vec![ScanTrigger::Timer]);
    assert_eq!(pacer.state, PacerState::Countdown { remaining: 3 });
}

#[test]
fn night_freezes_countdown_without_scanning() {
    let (pacer, effects) = drive(Pacer::new(3, true), &[DAY, NIGHT, NIGHT, NIGHT, NIGHT]);
    assert!(scans(&effects).is_empty());
    assert_eq!(pacer.state, PacerState::NightPaused { remaining: 2 });
    assert_eq!(
        effects
            .iter()
            .filter(|e| **e == PacerEffect::RenderPaused)
            .count(),
        4
    );
}

#[test]
fn daybreak_resumes_from_frozen_countdown() {
    let (pacer, effects) = drive(Pacer::new(3, true), &[DAY, NIGHT, DAY, DAY]);
    assert_eq!(scans(&effects), vec![ScanTrigger::Timer]);
    assert_eq!(pacer.state, PacerState::Countdown { remaining: 3 });
}

#[test]
fn night_is_ignored_when_pause_disabled() {
    let (_, effects) = drive(Pacer::new(2, false), &[NIGHT, NIGHT]);
    assert_eq!(scans(&effects), vec![ScanTrigger::Timer]);
}

#[test]
fn manual_trigger_scans_at_night() {
    let (pacer, _) = drive(Pacer::new(10, true), &[NIGHT]);
    assert!(pacer.state.is_paused());

    let (pacer, effects) = pacer.transition(PacerEvent::ManualTrigger);
    assert_eq!(effects, vec![PacerEffect::RunScan(ScanTrigger::Manual)]);
    assert_eq!(pacer.state, PacerState::Countdown { remaining: 10 });
}

#[test]
fn manual_trigger_resets_pending_countdown() {
    let (pacer, _) = drive(Pacer::new(10, true), &[DAY, DAY, DAY]);
    assert_eq!(pacer.state.remaining(), 7);

    let (pacer, _) = pacer.transition(PacerEvent::ManualTrigger);
    assert_eq!(pacer.state.remaining(), 10);
}

#[test]
fn zero_interval_is_clamped_to_one() {
    let pacer = Pacer::new(0, false);
    assert_eq!(pacer.interval(), 1);
    let (_, effects) = pacer.transition(DAY);
    assert_eq!(effects, vec![PacerEffect::RunScan(ScanTrigger::Timer)]);
}

proptest! {
    #[test]
    fn timer_scans_once_per_interval(interval in 1u32..20, cycles in 1u32..5) {
        let ticks = vec![DAY; (interval * cycles) as usize];
        let (_, effects) = drive(Pacer::new(interval, true), &ticks);
        prop_assert_eq!(scans(&effects).len() as u32, cycles);
    }

    #[test]
    fn remaining_never_exceeds_interval(
        interval in 1u32..20,
        events in proptest::collection::vec(0u8..3, 0..60)
    ) {
        let mut pacer = Pacer::new(interval, true);
        for e in events {
            let event = match e {
                0 => DAY,
                1 => NIGHT,
                _ => PacerEvent::ManualTrigger,
            };
            let (next, _) = pacer.transition(event);
            pacer = next;
            prop_assert!(pacer.state.remaining() >= 1);
            prop_assert!(pacer.state.remaining() <= interval);
        }
    }
}
