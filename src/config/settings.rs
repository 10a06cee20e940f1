use std::time::Duration;

use reqwest::Url;

use crate::args::StatsArgs;
use crate::error::{AppError, AppResult, ValidationError};
use crate::stats::{Credentials, SourceSettings};
use crate::statsd::{FieldSelection, SinkTarget};

use super::hostname::{local_hostname, resolve_namespace};

/// Fully resolved, immutable runtime configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: SourceSettings,
    pub sink: SinkTarget,
    pub namespace: String,
    pub interval: Duration,
    pub fields: FieldSelection,
    pub once: bool,
}

impl Settings {
    /// Resolves arguments (already merged with the config file) into settings,
    /// substituting the local hostname into the namespace.
    ///
    /// # Errors
    ///
    /// Returns an error when the stats URL or the field list is invalid.
    pub fn from_args(args: &StatsArgs) -> AppResult<Self> {
        Self::from_args_with_hostname(args, local_hostname)
    }

    /// Same as [`Settings::from_args`] with an explicit hostname source.
    ///
    /// # Errors
    ///
    /// Returns an error when the stats URL or the field list is invalid.
    pub fn from_args_with_hostname<F>(args: &StatsArgs, hostname: F) -> AppResult<Self>
    where
        F: FnOnce() -> String,
    {
        let url = parse_source_url(&args.url)?;
        let mut source = SourceSettings::new(url, Credentials::from_parts(&args.user, &args.password));
        source.timeout = args.timeout;
        source.connect_timeout = args.connect_timeout;

        let fields = if args.fields.is_empty() {
            FieldSelection::default()
        } else {
            FieldSelection::from_names(&args.fields).map_err(AppError::config)?
        };

        Ok(Self {
            source,
            sink: SinkTarget::new(&args.statsd_host, args.statsd_port),
            namespace: resolve_namespace(&args.namespace, hostname),
            interval: args.sleep,
            fields,
            once: args.test,
        })
    }
}

fn parse_source_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw).map_err(|source| {
        AppError::validation(ValidationError::InvalidUrl {
            url: raw.to_owned(),
            source,
        })
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::validation(ValidationError::UnsupportedScheme {
            scheme: other.to_owned(),
        })),
    }
}
