use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::StatsArgs;
use crate::config::{Settings, apply_config, load_config};
use crate::daemon;
use crate::error::AppResult;
use crate::shutdown_handlers::{setup_signal_shutdown_handler, shutdown_channel};

/// Parses the command line, resolves configuration and runs the poll loop.
///
/// # Errors
///
/// Returns an error for invalid arguments or configuration, or when a
/// single-shot run fails.
pub fn run() -> AppResult<()> {
    let (args, matches) = parse_args()?;

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args, &matches))
}

fn parse_args() -> AppResult<(StatsArgs, ArgMatches)> {
    let matches = StatsArgs::command().get_matches();
    let args = StatsArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

async fn run_async(mut args: StatsArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(args.config_file.as_deref())? {
        apply_config(&mut args, matches, &config)?;
    }
    let settings = Settings::from_args(&args)?;

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let result = daemon::run(&settings, shutdown_rx).await;

    drop(shutdown_tx.send(()));
    drop(signal_handle.await);
    result
}
