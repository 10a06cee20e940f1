use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_duration;
use crate::error::{ConfigError, ValidationError};

/// On-disk configuration. Key names follow the `[ha-stats]` options of the
/// classic INI config so existing deployments translate one to one.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub ha_url: Option<String>,
    pub ha_user: Option<String>,
    pub ha_pass: Option<String>,
    pub statsd_namespace: Option<String>,
    pub statsd_host: Option<String>,
    pub statsd_port: Option<u16>,
    pub sleep: Option<DurationValue>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub fields: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    FractionalSeconds(f64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self, field: &'static str) -> Result<Duration, ConfigError> {
        match self {
            DurationValue::Seconds(0) => Err(ConfigError::InvalidDuration {
                field,
                source: ValidationError::DurationZero,
            }),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::FractionalSeconds(secs) => Duration::try_from_secs_f64(*secs)
                .ok()
                .filter(|duration| !duration.is_zero())
                .ok_or(ConfigError::InvalidSeconds {
                    field,
                    value: *secs,
                }),
            DurationValue::Text(text) => {
                parse_duration(text).map_err(|source| ConfigError::InvalidDuration { field, source })
            }
        }
    }
}
