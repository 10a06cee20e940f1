use std::fmt;
use std::net::SocketAddr;

use tokio::net::{UdpSocket, lookup_host};
use tracing::{debug, trace};

use crate::error::TransportError;
use crate::stats::StatsRow;

use super::fields::FieldSelection;
use super::gauge::{Gauge, metric_prefix};

/// Statsd collector address as configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkTarget {
    pub host: String,
    pub port: u16,
}

impl SinkTarget {
    #[must_use]
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_owned(),
            port,
        }
    }

    async fn resolve(&self) -> Result<SocketAddr, TransportError> {
        if self.host.trim().is_empty() {
            return Err(TransportError::EmptyHost);
        }
        if self.port == 0 {
            return Err(TransportError::InvalidPort);
        }
        let addrs = lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|source| TransportError::Resolve {
                host: self.host.clone(),
                port: self.port,
                source,
            })?;
        prefer_ipv4(addrs).ok_or_else(|| TransportError::NoAddress {
            host: self.host.clone(),
            port: self.port,
        })
    }
}

impl fmt::Display for SinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// First IPv4 address, else the first address of any family.
pub(crate) fn prefer_ipv4<I>(addrs: I) -> Option<SocketAddr>
where
    I: IntoIterator<Item = SocketAddr>,
{
    let mut fallback = None;
    for addr in addrs {
        if addr.is_ipv4() {
            return Some(addr);
        }
        if fallback.is_none() {
            fallback = Some(addr);
        }
    }
    fallback
}

/// Turns stats rows into one gauge datagram per selected field.
#[derive(Debug, Clone)]
pub struct MetricEmitter {
    namespace: String,
    target: SinkTarget,
    fields: FieldSelection,
}

impl MetricEmitter {
    #[must_use]
    pub fn new(namespace: &str, target: SinkTarget, fields: FieldSelection) -> Self {
        Self {
            namespace: namespace.to_owned(),
            target,
            fields,
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub const fn target(&self) -> &SinkTarget {
        &self.target
    }

    /// Sends every selected field of every row, in row then field order.
    ///
    /// Sends are fire-and-forget: a failed datagram is logged and skipped.
    /// The returned count is the number of gauges built, not delivered.
    ///
    /// # Errors
    ///
    /// Returns an error when the target cannot be resolved or no local UDP
    /// socket can be bound.
    pub async fn emit<'table, I>(&self, rows: I) -> Result<usize, TransportError>
    where
        I: IntoIterator<Item = StatsRow<'table>>,
    {
        let endpoint = self.target.resolve().await?;
        let bind_addr = if endpoint.is_ipv4() {
            "0.0.0.0:0"
        } else {
            "[::]:0"
        };
        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|source| TransportError::Bind {
                addr: bind_addr,
                source,
            })?;

        let mut sent = 0_usize;
        for row in rows {
            let prefix = metric_prefix(&self.namespace, &row);
            for field in self.fields.iter() {
                let payload = Gauge::from_row(&prefix, field, &row).to_string();
                trace!("statsd <- {}", payload);
                if let Err(err) = socket.send_to(payload.as_bytes(), endpoint).await {
                    debug!("Dropped statsd datagram '{}': {}", payload, err);
                }
                sent = sent.saturating_add(1);
            }
        }
        Ok(sent)
    }
}

/// Emits rows with the default field selection.
///
/// # Errors
///
/// Returns an error when the target is invalid or no UDP socket can be bound.
pub async fn emit<'table, I>(
    rows: I,
    namespace: &str,
    host: &str,
    port: u16,
) -> Result<usize, TransportError>
where
    I: IntoIterator<Item = StatsRow<'table>>,
{
    MetricEmitter::new(
        namespace,
        SinkTarget::new(host, port),
        FieldSelection::default(),
    )
    .emit(rows)
    .await
}
