//! Tracing initialization.

use std::sync::Once;

use faqmine_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `FAQMINE_LOG` takes precedence over `observability.log_level`, e.g.
/// `FAQMINE_LOG=faqmine_subcluster=debug,info`. Calling this more than once
/// is a no-op, and so is calling it after the host installed its own
/// subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("FAQMINE_LOG")
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        let installed = if config.json_output {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        if installed.is_err() {
            tracing::debug!("global subscriber already set");
        }
    });
}
