//! Mapping stats rows to statsd gauges and shipping them over UDP.
mod emitter;
mod fields;
mod gauge;


pub use emitter::{MetricEmitter, SinkTarget, emit};
pub use fields::{DEFAULT_FIELDS, FieldSelection};
pub use gauge::{Gauge, metric_prefix};
