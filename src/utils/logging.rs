//! `env_logger` setup shared by the binaries.

use std::io::Write;

/// Initialises logging to stderr. `RUST_LOG` wins over the `debug` flag.
pub fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, default_level),
    );

    builder
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .target(env_logger::Target::Stderr);

    // A second call (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
