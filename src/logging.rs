use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Config;
use crate::formatter::FrameFormatter;

static SUBSCRIBER_INIT: std::sync::Once = std::sync::Once::new();

/// Configure and initialize logging for the application
///
/// `RUST_LOG` overrides the configured level; other crates default to `warn`.
pub fn setup_logging(config: &Config) {
    SUBSCRIBER_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("warn,{name}={level}", name = env!("CARGO_CRATE_NAME"), level = config.log_level))
        });

        let subscriber = FmtSubscriber::builder()
            .with_target(true)
            .event_format(FrameFormatter)
            .with_env_filter(filter)
            .finish()
            .with(ErrorLayer::default());

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("A global tracing subscriber was already installed");
        }
    });
}
