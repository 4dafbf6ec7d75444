//! Logging initialization module

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
}

impl Profile {
    /// Filter applied when `RUST_LOG` is not set
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "company=debug",
            Profile::Production => "company=info",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at startup; later calls are no-ops. Output goes to stderr so
/// that command output on stdout stays machine-readable.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
///
/// Tests install `test_capture::init_test_capture` instead.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    });
}
