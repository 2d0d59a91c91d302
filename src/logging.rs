//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global `fmt` subscriber on stderr.
///
/// `RUST_LOG` wins over `default_filter` when set. Calling this twice is a
/// no-op, so tests can call it freely.
pub fn init(default_filter: &str) {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
