//! Tracing setup for the simulator binary.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV_VAR;

/// Default filter for a CLI verbosity level.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    }
}

/// Initialize the tracing subscriber on stderr.
///
/// Respects the `THREES_LOG` environment variable for filtering, falling back
/// to a level derived from `verbosity`. Report lines go to stdout, so logs
/// never interleave with them in a pipe.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0), "error");
        assert_eq!(default_filter(1), "warn");
        assert_eq!(default_filter(2), "info");
        assert_eq!(default_filter(9), "debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
