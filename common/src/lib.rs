//! Shared building blocks for `ipterm`.
//!
//! * [`network::address`]: syntax validators for IPv4 and IPv6 literals.
//! * [`network::record`]: the geolocation record returned by the lookup service.
//! * [`messages`]: every user-facing string, in the form's fixed locale.
//! * [`config`]: runtime settings assembled by the CLI.

pub mod config;
pub mod macros;
pub mod messages;
pub mod network;

#[doc(hidden)]
pub use tracing as __tracing;
