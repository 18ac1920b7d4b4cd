use subs_core::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    Completed,
    Cancelled,
}

/// Display updates produced while a dashboard runs, in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    /// Digit cells were rewritten on a timer tick.
    Frame {
        platform: Platform,
        tick: u32,
        digits: String,
    },
    /// The counter's timer has stopped.
    CounterStopped {
        platform: Platform,
        outcome: AnimationOutcome,
        digits: String,
    },
    /// The "last updated" element received its display text.
    TimestampRendered { platform: Platform, text: String },
    /// The widget's markup could not be read; it shows the load error text.
    WidgetFailed { platform: Platform, message: String },
}

impl DisplayEvent {
    pub fn platform(&self) -> Platform {
        match self {
            DisplayEvent::Frame { platform, .. }
            | DisplayEvent::CounterStopped { platform, .. }
            | DisplayEvent::TimestampRendered { platform, .. }
            | DisplayEvent::WidgetFailed { platform, .. } => *platform,
        }
    }
}
