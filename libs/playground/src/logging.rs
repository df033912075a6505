//! Process-wide logger setup for the binary and hosts embedding the crate.

use std::sync::Once;

/// Logger configuration.
///
/// `filter` uses the `env_logger` filter syntax, e.g. `"info"` or
/// `"shape_mesh=trace,shape_playground=debug"`. When unset, `RUST_LOG` is
/// read, then the level falls back to `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter, overriding `RUST_LOG`
    pub filter: Option<String>,
    /// ANSI coloring behavior
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }
        builder.write_style(config.write_style);

        // Another logger may already be installed by an embedding host
        if builder.try_init().is_err() {
            return;
        }
        log::debug!("logging initialized");
    });
}
