//! Logger setup shared by the binary and the tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level used when `RUST_LOG` is unset.
///
/// `quiet` wins over `verbose`.
///
/// # Examples
/// ```
/// use coinrun::logging::default_level;
/// use log::LevelFilter;
/// assert_eq!(default_level(true, false), LevelFilter::Debug);
/// assert_eq!(default_level(true, true), LevelFilter::Warn);
/// ```
#[must_use]
pub const fn default_level(verbose: bool, quiet: bool) -> LevelFilter {
    match (verbose, quiet) {
        (_, true) => LevelFilter::Warn,
        (true, false) => LevelFilter::Debug,
        (false, false) => LevelFilter::Info,
    }
}

/// Initializes the global logger.
///
/// `RUST_LOG` takes precedence; otherwise the level comes from
/// [`default_level`]. Calling this more than once is harmless.
pub fn init(verbose: bool, quiet: bool) {
    let level = default_level(verbose, quiet);
    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    // `try_init` only fails if a logger was already set.
    if builder.try_init().is_err() {
        log::trace!("logger already initialised");
    }
}
