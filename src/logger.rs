//! Log setup for the CLI.
//!
//! Library code logs through the `log` facade; the binary routes it to
//! stderr with `env_logger`. `RUST_LOG` overrides the flag-derived level.

use log::LevelFilter;

/// Level for the CLI's verbosity flags. `--quiet` wins over `--verbose`.
pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    match (verbose, quiet) {
        (_, true) => LevelFilter::Error,
        (true, false) => LevelFilter::Debug,
        (false, false) => LevelFilter::Warn,
    }
}

/// Install the stderr logger.
///
/// Later calls fail with [`log::SetLoggerError`] once a logger is installed.
pub fn init(verbose: bool, quiet: bool) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level_for(verbose, quiet))
        .format_timestamp(None)
        .format_target(verbose)
        .parse_default_env()
        .try_init()
}
