//! Subs counter core: pure counter animation, timestamp formatting and
//! view-model helpers. Nothing in here touches markup or timers.
mod config;
mod counter;
mod format;
mod platform;
mod timestamp;
mod view_model;

pub use config::{ConfigError, CounterConfig};
pub use counter::{CounterAnimator, DigitSlots, SlotRow, TickOutcome};
pub use format::{
    calculate_percentage, format_number, parse_count, platform_shares, PlatformShare,
    LOAD_ERROR_TEXT,
};
pub use platform::{Platform, PlatformError};
pub use timestamp::{
    format_long, TimestampError, TimestampFormatter, DISPLAY_OFFSET_HOURS, FALLBACK_TEXT,
};
pub use view_model::{DashboardView, WidgetStatus, WidgetView};
