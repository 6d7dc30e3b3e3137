use std::sync::OnceLock;

use tracing::Level;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogLevel;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the stderr subscriber once. `cli_override` wins over the
/// configured level; `RUST_LOG` wins over both.
pub fn init(level: LogLevel, cli_override: Option<LogLevel>) {
    INIT.get_or_init(|| {
        let effective_level = cli_override.unwrap_or(level);

        let Some(tracing_level) = effective_level.as_tracing_level() else {
            return;
        };

        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_timer(UtcTime::rfc_3339())
            .with_ansi(true)
            .with_target(true);

        tracing_subscriber::registry()
            .with(build_env_filter(tracing_level))
            .with(stderr_layer)
            .init();
    });
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}
