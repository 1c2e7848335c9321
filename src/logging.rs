//! Logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CLIFFVIBE_LOG";

/// Filter used when neither `CLIFFVIBE_LOG` nor `RUST_LOG` is set.
pub fn default_filter() -> String {
    format!("{}=info", env!("CARGO_CRATE_NAME"))
}

/// Installs a `fmt` subscriber on stderr.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init_logging() {
    let filter = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_filter());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_targets_crate() {
        assert_eq!(default_filter(), "cliffvibe=info");
    }

    #[test]
    fn test_init_twice() {
        init_logging();
        init_logging();
    }
}
