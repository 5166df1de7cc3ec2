//! Command line interface
use env_logger::Env;
use log::LevelFilter;

pub mod convert;
pub mod opt;

/// Variable to override the log filter, e.g. `IMAGE2C_LOG=debug`
pub const LOG_ENV: &str = "IMAGE2C_LOG";

/// Set up error reporting and logging, then parse the arguments
///
/// Invalid arguments print the usage and exit before any file is touched.
pub fn init<T: clap::Parser>() -> color_eyre::Result<T> {
    color_eyre::install()?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_env(Env::new().filter(LOG_ENV))
        .init();
    Ok(T::parse())
}
