//! Transcript macros shared by every crate.
//!
//! Thin wrappers over `tracing` so call sites read as transcript lines
//! rather than log statements. The formatter in the cli crate maps the
//! level (and the `faultr::ok` target) to a colored prefix.

/// Progress line for a stage being entered or worked on.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

/// Confirmation line for a stage that completed.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!(target: "faultr::ok", $($arg)*)
    };
}

/// Something worth flagging that required no recovery.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*)
    };
}

/// A caught failure. Routed to the error stream by the cli writer.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        tracing::error!($($arg)*)
    };
}
