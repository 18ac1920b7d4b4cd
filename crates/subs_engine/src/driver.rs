use std::sync::mpsc;

use subs_core::{CounterAnimator, DigitSlots, Platform, TickOutcome};
use subs_logging::{subs_debug, subs_info};
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::{AnimationOutcome, DisplayEvent};

pub trait DisplaySink {
    fn emit(&self, event: DisplayEvent);
}

pub struct ChannelDisplaySink {
    tx: mpsc::Sender<DisplayEvent>,
}

impl ChannelDisplaySink {
    pub fn new(tx: mpsc::Sender<DisplayEvent>) -> Self {
        Self { tx }
    }
}

impl DisplaySink for ChannelDisplaySink {
    fn emit(&self, event: DisplayEvent) {
        let _ = self.tx.send(event);
    }
}

/// Drives `animator` with its own repeating timer until it finishes or
/// `cancel` fires.
///
/// The first tick lands one interval after the call, like a browser
/// `setInterval`. Late ticks are delayed rather than bunched up, so a
/// throttled host stretches the animation instead of skipping frames.
pub async fn run_counter(
    platform: Platform,
    animator: &mut CounterAnimator,
    slots: &mut dyn DigitSlots,
    sink: &dyn DisplaySink,
    cancel: &CancellationToken,
) -> AnimationOutcome {
    let period = animator.interval();
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    subs_debug!(
        "{} counter started: target={} steps={} interval={:?}",
        platform,
        animator.target(),
        animator.step_count(),
        period
    );

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                subs_info!(
                    "{} counter cancelled after {} ticks at {}",
                    platform,
                    animator.ticks(),
                    animator.rendered()
                );
                sink.emit(DisplayEvent::CounterStopped {
                    platform,
                    outcome: AnimationOutcome::Cancelled,
                    digits: animator.rendered().to_string(),
                });
                return AnimationOutcome::Cancelled;
            }
            _ = ticker.tick() => {}
        }

        subs_logging::set_tick(u64::from(animator.ticks()) + 1);
        let outcome = animator.tick(slots);
        sink.emit(DisplayEvent::Frame {
            platform,
            tick: animator.ticks(),
            digits: animator.rendered().to_string(),
        });

        if outcome == TickOutcome::Finished {
            subs_info!(
                "{} counter reached {} in {} ticks",
                platform,
                animator.rendered(),
                animator.ticks()
            );
            sink.emit(DisplayEvent::CounterStopped {
                platform,
                outcome: AnimationOutcome::Completed,
                digits: animator.rendered().to_string(),
            });
            return AnimationOutcome::Completed;
        }
    }
}
