use env_logger::{Builder, Env};

/// Environment variable that overrides the verbosity flag.
pub const LOG_ENV: &str = "AMALGAMATE_LOG";

/// Maps `-v` occurrences to a level filter, overridable through
/// [`LOG_ENV`]. Safe to call more than once; later calls are ignored.
pub fn init_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let level = match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };

    let env = Env::default().filter_or(LOG_ENV, level);

    match Builder::from_env(env).format_timestamp_secs().try_init() {
        Ok(()) => Ok(()),
        // a logger is already installed, e.g. by an earlier test
        Err(_) if log::max_level() != log::LevelFilter::Off => Ok(()),
        Err(err) => Err(err),
    }
}
