//! Logging macros shared by every arpwarden crate.
//!
//! Thin wrappers over `tracing` so call sites stay terse and the terminal
//! layer can style each channel on its own.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

/// Positive completion messages. Routed through a dedicated target so the
/// terminal formatter can mark them apart from plain info lines.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!(target: "arpwarden::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        tracing::error!($($arg)*)
    };
}
