use std::fmt;

use crate::stats::StatsRow;

/// Value sent when a row has no usable value for a field, so the collector
/// keeps seeing a continuous series.
const MISSING_VALUE: &str = "0";

/// `namespace.pxname.svname`, the prefix shared by every gauge of a row.
#[must_use]
pub fn metric_prefix(namespace: &str, row: &StatsRow<'_>) -> String {
    [namespace, row.proxy(), row.server()].join(".")
}

/// A single statsd gauge sample. Values are passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gauge<'sample> {
    prefix: &'sample str,
    field: &'sample str,
    value: &'sample str,
}

impl<'sample> Gauge<'sample> {
    #[must_use]
    pub fn new(prefix: &'sample str, field: &'sample str, value: Option<&'sample str>) -> Self {
        let value = value
            .filter(|value| !value.is_empty())
            .unwrap_or(MISSING_VALUE);
        Self {
            prefix,
            field,
            value,
        }
    }

    /// Reads `field` from `row`, substituting `0` when absent or empty.
    #[must_use]
    pub fn from_row(prefix: &'sample str, field: &'sample str, row: &StatsRow<'sample>) -> Self {
        Self::new(prefix, field, row.get(field))
    }

    #[must_use]
    pub fn name(&self) -> String {
        format!("{}.{}", self.prefix, self.field)
    }

    #[must_use]
    pub const fn value(&self) -> &'sample str {
        self.value
    }
}

/// Renders the statsd plaintext line, e.g. `haproxy.web.FRONTEND.bin:4096|g`.
impl fmt::Display for Gauge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}:{}|g", self.prefix, self.field, self.value)
    }
}
