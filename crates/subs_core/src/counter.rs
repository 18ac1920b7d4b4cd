use std::time::Duration;

use subs_logging::{subs_trace, subs_warn};

use crate::{ConfigError, CounterConfig};

/// A fixed row of single-digit display cells, written left to right.
pub trait DigitSlots {
    fn slot_count(&self) -> usize;
    fn set_slot(&mut self, index: usize, digit: char);
}

/// In-memory digit row; the engine mirrors markup `.digit` cells into one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotRow {
    slots: Vec<char>,
}

impl SlotRow {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec!['0'; count],
        }
    }

    /// Builds a row from the current text of each cell. Empty cells start as `'0'`.
    pub fn from_cells<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        let slots = cells
            .into_iter()
            .map(|cell| cell.trim().chars().next().unwrap_or('0'))
            .collect();
        Self { slots }
    }

    pub fn text(&self) -> String {
        self.slots.iter().collect()
    }

    pub fn cells(&self) -> &[char] {
        &self.slots
    }
}

impl DigitSlots for SlotRow {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn set_slot(&mut self, index: usize, digit: char) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = digit;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Finished,
}

/// Finite stepper for one count-up animation from zero to `target`.
///
/// Each [`tick`](Self::tick) adds a fixed step to a running total, rounds it,
/// zero-pads it to the configured width and writes it into the digit slots.
/// The animation finishes once the running total is within 0.5 of the target,
/// which makes the last visible value exactly the target. The tick on which
/// the configured duration elapses also finishes the animation. The final tick
/// always writes the integer target, so float drift on huge targets can
/// neither keep it running nor change the last digits.
///
/// Scheduling is left to the caller: a timer, a frame callback or a plain
/// loop in a test.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimator {
    target: u64,
    digits: usize,
    interval: Duration,
    step_count: u32,
    step: f64,
    current: f64,
    shown: u64,
    ticks: u32,
    done: bool,
    rendered: String,
    overflow_reported: bool,
}

impl CounterAnimator {
    pub fn new(target: u64, config: &CounterConfig) -> Result<Self, ConfigError> {
        let step_count = config.step_count()?;
        Ok(Self {
            target,
            digits: config.digits,
            interval: config.interval(),
            step_count,
            step: target as f64 / f64::from(step_count),
            current: 0.0,
            shown: 0,
            ticks: 0,
            done: false,
            rendered: String::new(),
            overflow_reported: false,
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Value shown after the most recent tick.
    pub fn displayed(&self) -> u64 {
        self.shown
    }

    /// Zero-padded text written by the most recent tick; empty before the first.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn tick(&mut self, slots: &mut dyn DigitSlots) -> TickOutcome {
        if self.done {
            return TickOutcome::Finished;
        }

        self.ticks += 1;
        self.current += self.step;
        let rounded = (self.current.round().max(0.0) as u64).min(self.target);
        // At exactly half a unit below the target the rounded value already
        // shows the target, so that tick is the final one as well.
        let converged = (self.current - self.target as f64).abs() < 0.5
            || rounded == self.target
            || self.ticks >= self.step_count;
        // Above 2^53 the running total cannot hold the target exactly, so the
        // final tick writes the integer target rather than the float.
        self.shown = if converged { self.target } else { rounded };

        self.rendered = format!("{:0>width$}", self.shown, width = self.digits);
        self.write_slots(slots);
        subs_trace!(
            "counter target={} tick={} shown={}",
            self.target,
            self.ticks,
            self.rendered
        );

        if converged {
            self.done = true;
            TickOutcome::Finished
        } else {
            TickOutcome::Running
        }
    }

    fn write_slots(&mut self, slots: &mut dyn DigitSlots) {
        let available = slots.slot_count();
        let needed = self.rendered.chars().count();
        if needed > available && !self.overflow_reported {
            // Left-aligned writes: trailing digits are dropped, not the leading ones.
            subs_warn!(
                "counter value {} needs {} digit slots but only {} exist; display is truncated",
                self.rendered,
                needed,
                available
            );
            self.overflow_reported = true;
        }
        for (index, digit) in self.rendered.chars().take(available).enumerate() {
            slots.set_slot(index, digit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CounterAnimator, DigitSlots, SlotRow, TickOutcome};
    use crate::CounterConfig;

    fn run_to_end(animator: &mut CounterAnimator, slots: &mut SlotRow) -> Vec<u64> {
        let mut shown = Vec::new();
        while animator.tick(slots) == TickOutcome::Running {
            shown.push(animator.displayed());
        }
        shown.push(animator.displayed());
        shown
    }

    #[test]
    fn reaches_target_on_final_tick() {
        let mut slots = SlotRow::new(5);
        let mut animator = CounterAnimator::new(1234, &CounterConfig::default()).unwrap();
        let shown = run_to_end(&mut animator, &mut slots);

        assert_eq!(slots.text(), "01234");
        assert_eq!(animator.rendered(), "01234");
        assert_eq!(shown.iter().filter(|v| **v == 1234).count(), 1);
        assert_eq!(shown.last(), Some(&1234));
        assert!(animator.ticks() <= animator.step_count());
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut slots = SlotRow::from_cells(["", "", ""]);
        let mut animator = CounterAnimator::new(
            0,
            &CounterConfig {
                digits: 3,
                ..CounterConfig::default()
            },
        )
        .unwrap();

        assert_eq!(animator.tick(&mut slots), TickOutcome::Finished);
        assert_eq!(slots.text(), "000");
        assert_eq!(animator.ticks(), 1);
        assert_eq!(animator.tick(&mut slots), TickOutcome::Finished);
        assert_eq!(animator.ticks(), 1);
    }

    #[test]
    fn small_targets_stop_before_the_full_duration() {
        let mut slots = SlotRow::new(5);
        let mut animator = CounterAnimator::new(1, &CounterConfig::default()).unwrap();
        run_to_end(&mut animator, &mut slots);

        assert_eq!(slots.text(), "00001");
        assert!(animator.ticks() < animator.step_count());
    }

    #[test]
    fn half_way_rounding_does_not_repeat_the_target() {
        let mut slots = SlotRow::new(5);
        let mut animator = CounterAnimator::new(50, &CounterConfig::default()).unwrap();
        let shown = run_to_end(&mut animator, &mut slots);

        assert_eq!(shown.iter().filter(|v| **v == 50).count(), 1);
        assert_eq!(animator.ticks(), 99);
        assert_eq!(slots.text(), "00050");
    }

    #[test]
    fn overflowing_value_writes_leading_digits_only() {
        let mut slots = SlotRow::new(3);
        let mut animator = CounterAnimator::new(
            123_456,
            &CounterConfig {
                digits: 3,
                ..CounterConfig::default()
            },
        )
        .unwrap();
        run_to_end(&mut animator, &mut slots);

        assert_eq!(animator.rendered(), "123456");
        assert_eq!(slots.text(), "123");
    }

    #[test]
    fn extra_slots_keep_their_initial_text() {
        let mut slots = SlotRow::from_cells(["-", "-", "-", "-"]);
        let mut animator = CounterAnimator::new(
            42,
            &CounterConfig {
                digits: 2,
                ..CounterConfig::default()
            },
        )
        .unwrap();
        run_to_end(&mut animator, &mut slots);

        assert_eq!(slots.cells(), &['4', '2', '-', '-']);
        assert_eq!(slots.slot_count(), 4);
    }
}
