//! Lookup engine behind the `ipterm` form.
//!
//! [`session::Session`] holds the form state and its pure transitions,
//! [`lookup`] talks to the geolocation service, [`countdown`] drives the
//! cosmetic progress counter and [`controller`] wires the three together.

pub mod controller;
pub mod countdown;
pub mod lookup;
pub mod session;
