//! Status macros.
//!
//! Thin wrappers around `tracing` that tag events with a target the CLI
//! formatter knows how to decorate. Anything that is not a status line should
//! use `tracing` directly.

pub const SUCCESS_TARGET: &str = "sweepr::success";
pub const STATUS_TARGET: &str = "sweepr::status";
pub const PRINT_TARGET: &str = "sweepr::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__tracing::info!(target: $crate::log::STATUS_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::__tracing::warn!(target: $crate::log::STATUS_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__tracing::error!(target: $crate::log::STATUS_TARGET, $($arg)+)
    };
}
