//! Thin wrappers over `tracing` so every crate logs with the same targets.
//!
//! The CLI formatter keys its symbols off these targets.

pub const SUCCESS_TARGET: &str = "ipterm::success";
pub const PRINT_TARGET: &str = "ipterm::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::macros::SUCCESS_TARGET, $($arg)*)
    };
}
