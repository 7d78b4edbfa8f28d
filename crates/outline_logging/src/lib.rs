#![deny(missing_docs)]
//! Shared logging utilities for the outline workspace.
//!
//! This crate provides the `outline_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every message is
//! stamped with the extraction pass that was current on the logging thread, so
//! a log of a long streaming session can be read pass by pass.

use std::cell::Cell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Thread-local storage for the current extraction pass number.
    static EXTRACTION_PASS: Cell<u64> = const { Cell::new(0) };
}

/// Sets the extraction pass number for the current thread.
/// The session calls this once per extraction pass.
pub fn set_extraction_pass(pass: u64) {
    EXTRACTION_PASS.with(|v| v.set(pass));
}

/// Retrieves the extraction pass number for the current thread.
/// Returns 0 before the first pass.
pub fn extraction_pass() -> u64 {
    EXTRACTION_PASS.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! outline_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!("[pass {}] {}", $crate::extraction_pass(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! outline_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!("[pass {}] {}", $crate::extraction_pass(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! outline_info {
    ($($arg:tt)*) => {{
        $crate::log::info!("[pass {}] {}", $crate::extraction_pass(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! outline_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!("[pass {}] {}", $crate::extraction_pass(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! outline_error {
    ($($arg:tt)*) => {{
        $crate::log::error!("[pass {}] {}", $crate::extraction_pass(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
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
