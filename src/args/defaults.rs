pub const DEFAULT_URL: &str = "http://127.0.0.1:80/;csv";
pub const DEFAULT_NAMESPACE: &str = "haproxy.stats";
pub const DEFAULT_STATSD_HOST: &str = "127.0.0.1";
pub const DEFAULT_STATSD_PORT: &str = "8125";
pub const DEFAULT_SLEEP: &str = "10s";
pub const DEFAULT_TIMEOUT: &str = "10s";
pub const DEFAULT_CONNECT_TIMEOUT: &str = "5s";
