//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::StatsArgs;
pub use defaults::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_NAMESPACE, DEFAULT_SLEEP, DEFAULT_STATSD_HOST,
    DEFAULT_STATSD_PORT, DEFAULT_TIMEOUT, DEFAULT_URL,
};
pub(crate) use parsers::{parse_duration, parse_duration_arg};
