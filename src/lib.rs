//! Core library for the `ha-stats` daemon.
//!
//! The binary polls the HAProxy statistics page (CSV export) on a fixed
//! interval, picks a handful of counters for every proxy/server row and
//! forwards them to statsd as gauges over UDP. The two pipeline stages live in
//! [`stats`] (fetch and parse) and [`statsd`] (name mapping and emission);
//! [`daemon`] drives them on a timer.
pub mod args;
pub mod config;
pub mod daemon;
pub mod entry;
pub mod error;
pub mod shutdown;
pub mod shutdown_handlers;
pub mod stats;
pub mod statsd;
pub mod system;

#[cfg(test)]
pub(crate) mod test_support;
