//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the stderr subscriber once.
///
/// Levels come from `SUBSIFT_LOG` (e.g. `SUBSIFT_LOG=subsift_core=debug`),
/// falling back to `subsift=warn,subsift_core=warn`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SUBSIFT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("subsift=warn,subsift_core=warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
