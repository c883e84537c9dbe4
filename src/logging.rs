use tracing_subscriber::{EnvFilter, fmt};

pub const DEFAULT_DIRECTIVE: &str = "info";

pub fn init() {
    init_with_directive(DEFAULT_DIRECTIVE)
}

/// Install the global subscriber, `RUST_LOG` wins over `directive` when set
///
/// Safe to call more than once, only the first call installs anything
pub fn init_with_directive(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
