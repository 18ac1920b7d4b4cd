use std::sync::{mpsc, Once};
use std::time::Duration;

use subs_core::{CounterAnimator, CounterConfig, Platform, SlotRow};
use subs_engine::{
    run_counter, AnimationOutcome, CancellationToken, ChannelDisplaySink, DisplayEvent,
};
use tokio::time::Instant;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(subs_logging::initialize_for_tests);
}

#[tokio::test(start_paused = true)]
async fn counter_takes_the_configured_duration() {
    init_logging();
    let (tx, rx) = mpsc::channel();
    let sink = ChannelDisplaySink::new(tx);
    let mut animator = CounterAnimator::new(54_321, &CounterConfig::default()).unwrap();
    let mut slots = SlotRow::new(5);

    let start = Instant::now();
    let outcome = run_counter(
        Platform::LinkedIn,
        &mut animator,
        &mut slots,
        &sink,
        &CancellationToken::new(),
    )
    .await;
    let elapsed = start.elapsed();

    assert_eq!(outcome, AnimationOutcome::Completed);
    assert!(elapsed >= Duration::from_millis(2000), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(2100), "{elapsed:?}");
    assert_eq!(slots.text(), "54321");

    let events: Vec<DisplayEvent> = rx.try_iter().collect();
    let first_tick = events.first().cloned();
    assert_eq!(
        first_tick,
        Some(DisplayEvent::Frame {
            platform: Platform::LinkedIn,
            tick: 1,
            digits: "00543".to_string(),
        })
    );
    assert_eq!(
        events.last().cloned(),
        Some(DisplayEvent::CounterStopped {
            platform: Platform::LinkedIn,
            outcome: AnimationOutcome::Completed,
            digits: "54321".to_string(),
        })
    );
}

#[tokio::test(start_paused = true)]
async fn first_write_happens_one_interval_later() {
    init_logging();
    let (tx, rx) = mpsc::channel();
    let sink = ChannelDisplaySink::new(tx);
    let mut animator = CounterAnimator::new(0, &CounterConfig::default()).unwrap();
    let mut slots = SlotRow::from_cells(["", "", "", "", ""]);

    let start = Instant::now();
    run_counter(
        Platform::Medium,
        &mut animator,
        &mut slots,
        &sink,
        &CancellationToken::new(),
    )
    .await;

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(20), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(21), "{elapsed:?}");
    assert_eq!(slots.text(), "00000");
    assert_eq!(rx.try_iter().count(), 2);
}

#[tokio::test(start_paused = true)]
async fn cancelled_counter_stops_writing() {
    init_logging();
    let (tx, rx) = mpsc::channel();
    let sink = ChannelDisplaySink::new(tx);
    let mut animator = CounterAnimator::new(10_000, &CounterConfig::default()).unwrap();
    let mut slots = SlotRow::new(5);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let outcome = run_counter(Platform::YouTube, &mut animator, &mut slots, &sink, &cancel).await;

    assert_eq!(outcome, AnimationOutcome::Cancelled);
    assert_eq!(animator.ticks(), 0);
    assert_eq!(slots.text(), "00000");
    let events: Vec<DisplayEvent> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![DisplayEvent::CounterStopped {
            platform: Platform::YouTube,
            outcome: AnimationOutcome::Cancelled,
            digits: String::new(),
        }]
    );
}
