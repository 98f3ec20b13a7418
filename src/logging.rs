// src/logging.rs
use env_logger::{Builder, Env};

/// Install the stderr logger used by the binaries.
///
/// Defaults to `warn`; `RUST_LOG` overrides it. Calling this twice is harmless.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
