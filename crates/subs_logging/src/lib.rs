#![deny(missing_docs)]
//! Shared logging utilities for the subs counter workspace.
//!
//! This crate provides the `subs_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every message is
//! prefixed with the animation tick the current thread is processing, so
//! interleaved widget animations can be told apart in the log.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the animation tick being processed.
    static ANIMATION_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Sets the animation tick for the current thread.
/// The animation driver calls this once per timer firing.
pub fn set_tick(tick: u64) {
    ANIMATION_TICK.with(|v| v.set(tick));
}

/// Retrieves the animation tick for the current thread.
/// Returns 0 outside of a running animation.
pub fn get_tick() -> u64 {
    ANIMATION_TICK.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! subs_trace {
    ($($arg:tt)*) => {{
        log::trace!("[tick {}] {}", $crate::get_tick(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! subs_info {
    ($($arg:tt)*) => {{
        log::info!("[tick {}] {}", $crate::get_tick(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! subs_debug {
    ($($arg:tt)*) => {{
        log::debug!("[tick {}] {}", $crate::get_tick(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! subs_warn {
    ($($arg:tt)*) => {{
        log::warn!("[tick {}] {}", $crate::get_tick(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! subs_error {
    ($($arg:tt)*) => {{
        log::error!("[tick {}] {}", $crate::get_tick(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Trace in debug builds so tick-by-tick output is visible with --nocapture.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
