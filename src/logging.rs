//! tracing subscriber setup for the CLI.
//!
//! `RUST_LOG` wins when set; otherwise `--verbose` switches this crate from
//! `info` to `debug`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for the given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "comic_packer=debug,info"
    } else {
        "comic_packer=info"
    }
}

/// Install a compact stderr logger as the global subscriber.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
