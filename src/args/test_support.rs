use clap::{CommandFactory, FromArgMatches};

use super::StatsArgs;
use crate::error::{AppError, AppResult};

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<StatsArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    parse_test_matches(args).map(|(args, _)| args)
}

pub(crate) fn parse_test_matches<I, T>(args: I) -> AppResult<(StatsArgs, clap::ArgMatches)>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = StatsArgs::command()
        .try_get_matches_from(args)
        .map_err(AppError::from)?;
    let args = StatsArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
