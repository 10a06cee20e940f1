use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Statsd host must not be empty.")]
    EmptyHost,
    #[error("Statsd port must be > 0.")]
    InvalidPort,
    #[error("Failed to resolve statsd target {host}:{port} ({source})")]
    Resolve {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("No addresses resolved for statsd target {host}:{port}.")]
    NoAddress { host: String, port: u16 },
    #[error("Failed to bind UDP socket on {addr}: {source}")]
    Bind {
        addr: &'static str,
        #[source]
        source: std::io::Error,
    },
}
