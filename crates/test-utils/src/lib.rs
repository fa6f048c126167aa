pub mod builders;
pub mod fake_client;
pub mod recording_reporter;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};
use unglue::logging::LOG_ENV;

static INIT: Once = Once::new();

/// Filter used when neither `UNGLUE_LOG` nor `RUST_LOG` is set.
const TEST_DEFAULT_FILTER: &str = "unglue=debug";

/// Install a subscriber whose output is captured by the test harness.
///
/// The filter comes from `UNGLUE_LOG`, then `RUST_LOG`, then
/// `unglue=debug`, so discovery and dispatch traces show up next to a
/// failing assertion. Output of passing tests stays hidden unless run with
/// `--nocapture`, e.g. `UNGLUE_LOG=trace cargo test -- --nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(TEST_DEFAULT_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_can_be_called_from_every_test() {
        init_tracing();
        init_tracing();
        assert!(INIT.is_completed());
    }
}
