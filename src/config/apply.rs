use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::StatsArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

/// Applies configuration file values to CLI arguments.
///
/// File values win over environment variables and defaults; flags given on
/// the command line win over the file.
///
/// # Errors
///
/// Returns an error when a duration in the file is invalid or `fields` is
/// an empty list.
pub fn apply_config(
    args: &mut StatsArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.ha_url.clone()
    {
        args.url = url;
    }

    if !is_cli(matches, "user")
        && let Some(user) = config.ha_user.clone()
    {
        args.user = user;
    }

    if !is_cli(matches, "password")
        && let Some(password) = config.ha_pass.clone()
    {
        args.password = password;
    }

    if !is_cli(matches, "namespace")
        && let Some(namespace) = config.statsd_namespace.clone()
    {
        args.namespace = namespace;
    }

    if !is_cli(matches, "statsd_host")
        && let Some(host) = config.statsd_host.clone()
    {
        args.statsd_host = host;
    }

    if !is_cli(matches, "statsd_port")
        && let Some(port) = config.statsd_port
    {
        args.statsd_port = port;
    }

    if !is_cli(matches, "sleep")
        && let Some(sleep) = config.sleep.as_ref()
    {
        args.sleep = sleep.to_duration("sleep").map_err(AppError::config)?;
    }

    if !is_cli(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.timeout = timeout.to_duration("timeout").map_err(AppError::config)?;
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = timeout
            .to_duration("connect_timeout")
            .map_err(AppError::config)?;
    }

    if !is_cli(matches, "fields")
        && let Some(fields) = config.fields.clone()
    {
        if fields.is_empty() {
            return Err(AppError::config(ConfigError::EmptyFields));
        }
        args.fields = fields;
    }

    Ok(())
}
