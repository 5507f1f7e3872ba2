// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn fake_clock_only_moves_when_advanced() {
    let clock = FakeClock::new();
    let t1 = clock.now();
    std::thread::sleep(Duration::from_millis(2));
    assert_eq!(clock.now(), t1);

    clock.advance_secs(10);
    assert_eq!(clock.since(t1), Duration::from_secs(10));
}

#[test]
fn fake_clock_clones_share_time() {
    let held_by_test = FakeClock::new();
    let held_by_runtime = held_by_test.clone();
    let start = held_by_runtime.now();

    held_by_test.advance(Duration::from_millis(1500));

    assert_eq!(held_by_runtime.since(start), Duration::from_millis(1500));
}

#[test]
fn since_saturates_for_future_instants() {
    let clock = FakeClock::new();
    let future = clock.now() + Duration::from_secs(5);
    assert_eq!(clock.since(future), Duration::ZERO);
}

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock;
    let t1 = clock.now();
    let t2 = clock.now();
    assert!(t2 >= t1);
}
