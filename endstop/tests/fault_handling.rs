//! Fault suppression: whatever goes wrong mid-pass, the event is consumed,
//! applied scrolling stays, and the fault reaches the diagnostic sink.

use endstop::{CollectingSink, WheelEvent, WheelInterceptor};
use endstop_viewport::ScrollDirection;
use std::sync::Arc;
use viewport_fixture::FixtureViewport;

fn guard_with_sink(
    view: FixtureViewport,
) -> (WheelInterceptor<FixtureViewport>, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let guard = WheelInterceptor::new(view).with_sink(sink.clone());
    (guard, sink)
}

#[test]
fn layout_fault_mid_correction_keeps_the_applied_scroll() {
    // Query 1: pre-scroll gating. Query 2: post-scroll last line check.
    // Query 3 (first walk-back read) fails.
    let view = FixtureViewport::new(100, 300.0, 15.0)
        .with_top(75)
        .with_layout_failure_after(2);
    let (mut guard, sink) = guard_with_sink(view);

    let mut event = WheelEvent::new(-300.0);
    guard.handle(&mut event);

    assert!(event.is_handled());
    guard.viewport().assert_top(85);

    let faults = sink.faults();
    assert_eq!(faults.len(), 1);
    assert!(faults[0].contains("host viewport fault"));
}

#[test]
fn fault_on_the_first_query_turns_the_event_into_a_consumed_no_op() {
    let view = FixtureViewport::new(100, 300.0, 15.0)
        .with_top(10)
        .with_layout_failure_after(0);
    let (mut guard, sink) = guard_with_sink(view);

    let mut event = WheelEvent::new(-300.0);
    guard.handle(&mut event);

    assert!(event.is_handled());
    guard.viewport().assert_top(10);
    assert!(guard.viewport().scroll_log().is_empty());
    assert_eq!(sink.faults().len(), 1);
}

#[test]
fn upward_events_never_touch_the_layout() {
    // Every layout query is scripted to fail, but the upward path does not
    // issue any.
    let view = FixtureViewport::new(100, 300.0, 15.0)
        .with_top(50)
        .with_layout_failure_after(0);
    let (mut guard, sink) = guard_with_sink(view);

    let mut event = WheelEvent::new(300.0);
    guard.handle(&mut event);

    guard.viewport().assert_top(40);
    assert!(sink.is_empty());
}

#[test]
fn jammed_walk_back_is_reported_as_stalled() {
    let view = FixtureViewport::new(100, 300.0, 15.0)
        .with_top(75)
        .with_jammed_scrolling(ScrollDirection::Up);
    let (mut guard, sink) = guard_with_sink(view);

    let mut event = WheelEvent::new(-750.0);
    guard.handle(&mut event);

    assert!(event.is_handled());
    // The downward scroll landed (clamped by the host); only the corrective
    // walk-back went nowhere.
    guard.viewport().assert_top(99);

    let faults = sink.faults();
    assert_eq!(faults.len(), 1);
    assert!(faults[0].contains("no progress after 100"));
}

#[test]
fn faults_accumulate_per_event_in_the_collecting_sink() {
    let view = FixtureViewport::new(100, 300.0, 15.0)
        .with_top(10)
        .with_layout_failure_after(0);
    let (mut guard, sink) = guard_with_sink(view);

    for _ in 0..3 {
        let mut event = WheelEvent::new(-60.0);
        guard.handle(&mut event);
        assert!(event.is_handled());
    }

    assert_eq!(sink.faults().len(), 3);
}
