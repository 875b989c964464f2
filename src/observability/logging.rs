//! Tracing subscriber setup
//!
//! One global `tracing` subscriber per process. `RUST_LOG`, when set, takes
//! precedence over the configured level.

use tracing_subscriber::EnvFilter;

/// Build the env filter, preferring `RUST_LOG` over `default_level`
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber
///
/// Returns `false` if a subscriber was already installed (tests, embedding).
pub fn init_tracing(default_level: &str, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(true);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        // Whichever call wins, the other must report the existing subscriber
        let first = init_tracing("info", false);
        let second = init_tracing("debug", true);
        assert!(!(first && second));
        assert!(!second);
    }
}
