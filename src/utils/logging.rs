//! Module-gated logging macros.
//!
//! Analysis stages can be noisy (one line per event, per run, per frame), so
//! every module that logs declares its own switch and the macros below consult
//! it before forwarding to the `log` facade:
//!
//! ```rust,ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_debug, log_info, log_warn};
//!
//! log_info!("detected {} contact events", events.len());
//! ```
//!
//! The level filter set up in [`crate::run`] (via `RUST_LOG`) still applies on
//! top of the module switch.

/// Debug-level logging, suppressed when the calling module sets `ENABLE_LOGS = false`.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}

/// Info-level logging, suppressed when the calling module sets `ENABLE_LOGS = false`.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn-level logging. Insufficient-data conditions are reported through this.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Error-level logging, suppressed when the calling module sets `ENABLE_LOGS = false`.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}
