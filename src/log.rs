// src/log.rs
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: OnceLock<()> = OnceLock::new();

/// Map `-v` count to a default filter. `RUST_LOG` wins when set.
fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,troopers_roster=info",
        1 => "info,troopers_roster=debug",
        _ => "debug,troopers_roster=trace",
    }
}

/// Install the global subscriber once. Later calls are no-ops.
/// Lines are stamped with elapsed time since startup.
pub fn init(verbosity: u8) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_timer(fmt::time::uptime())
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_crate_level() {
        assert!(default_filter(0).contains("troopers_roster=info"));
        assert!(default_filter(1).contains("troopers_roster=debug"));
        assert!(default_filter(5).contains("troopers_roster=trace"));
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
