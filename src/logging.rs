//! Diagnostic logging setup.
//!
//! Log output is separate from the user-facing status lines in `render`; it
//! stays at warn level unless raised via `-v` or `HEXCHAT_THEMER_LOG`.

use tracing_subscriber::EnvFilter;

/// Env var holding a `tracing` filter directive (falls back to `RUST_LOG`).
pub const LOG_ENV: &str = "HEXCHAT_THEMER_LOG";

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Pick the filter directive: explicit env directive wins, then verbosity.
pub fn select_directive<FEnv>(verbosity: u8, env_lookup: FEnv) -> String
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(LOG_ENV)
        .or_else(|| env_lookup("RUST_LOG"))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default_directive(verbosity).to_string())
}

/// Install the global stderr subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let directive = select_directive(verbosity, |name| std::env::var(name).ok());
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(5), "debug");
    }

    #[test]
    fn env_directive_wins_over_verbosity() {
        let directive =
            select_directive(0, |name| (name == LOG_ENV).then(|| "hexchat_themer=trace".into()));
        assert_eq!(directive, "hexchat_themer=trace");
    }

    #[test]
    fn rust_log_is_a_fallback() {
        let directive = select_directive(0, |name| (name == "RUST_LOG").then(|| "info".into()));
        assert_eq!(directive, "info");
    }

    #[test]
    fn blank_directive_uses_verbosity() {
        let directive = select_directive(2, |name| (name == LOG_ENV).then(|| "  ".into()));
        assert_eq!(directive, "debug");
    }
}
