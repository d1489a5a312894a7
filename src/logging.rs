//! Logger bootstrap shared by the binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `verbose` lowers the default filter to debug, which reports controller
/// creation and registry churn. `RUST_LOG` still wins when set; use
/// `RUST_LOG=wander=trace` for per-frame collision detail.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    // A second call finds the logger already set; tests rely on that being
    // harmless.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init(false);
        init(true);
        log::info!("logger initialised twice without panicking");
    }
}
