use clap::Parser;
use std::time::Duration;

use super::defaults::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_NAMESPACE, DEFAULT_SLEEP, DEFAULT_STATSD_HOST,
    DEFAULT_STATSD_PORT, DEFAULT_TIMEOUT, DEFAULT_URL,
};
use super::parsers::{parse_bool_env, parse_duration_arg};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Get HAProxy stats, pick the interesting counters, and push them to statsd as gauges."
)]
pub struct StatsArgs {
    /// Path to config file (TOML/JSON). Defaults to ./ha-stats.toml or ./ha-stats.json if present.
    #[arg(long = "config-file", short = 'f', alias = "config_file")]
    pub config_file: Option<String>,

    /// Execute once and terminate. For testing configuration.
    #[arg(long, short = 't')]
    pub test: bool,

    /// HAProxy stats URL (CSV export)
    #[arg(long, env = "HAPROXY_HOST", default_value = DEFAULT_URL)]
    pub url: String,

    /// HAProxy stats user (empty disables basic auth)
    #[arg(long, env = "HAPROXY_USER", default_value = "")]
    pub user: String,

    /// HAProxy stats password
    #[arg(long, env = "HAPROXY_PASS", default_value = "", hide_env_values = true)]
    pub password: String,

    /// Metric namespace; "(HOSTNAME)" is replaced with the local hostname
    #[arg(long, env = "STATSD_NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Statsd host
    #[arg(long = "statsd-host", env = "STATSD_HOST", default_value = DEFAULT_STATSD_HOST)]
    pub statsd_host: String,

    /// Statsd UDP port
    #[arg(long = "statsd-port", env = "STATSD_PORT", default_value = DEFAULT_STATSD_PORT)]
    pub statsd_port: u16,

    /// Pause between cycles (supports ms/s/m/h, bare numbers are seconds)
    #[arg(
        long,
        env = "HA_STATS_SLEEP",
        default_value = DEFAULT_SLEEP,
        value_parser = parse_duration_arg
    )]
    pub sleep: Duration,

    /// Stats request timeout (supports ms/s/m/h)
    #[arg(long, default_value = DEFAULT_TIMEOUT, value_parser = parse_duration_arg)]
    pub timeout: Duration,

    /// Timeout for connecting to the stats page (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        default_value = DEFAULT_CONNECT_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Duration,

    /// Stats to forward per row, comma separated (defaults to the built-in 13)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by HA_STATS_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
