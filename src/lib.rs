pub mod config;
pub mod models;
pub mod pipeline;

pub use models::{CanonicalRequest, Domain, FieldValue, ParsedRecord, PatientInformation};
pub use pipeline::report::{extract_request, parse_report};

use tracing_subscriber::EnvFilter;

/// Log output style for the command-line entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `filter`; `filter` wins over `config::default_log_filter()`.
pub fn init_tracing(format: LogFormat, filter: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(filter.unwrap_or(config::default_log_filter()))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    // try_init: a second call (tests, embedding hosts) keeps the first subscriber
    let installed = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if installed.is_ok() {
        tracing::debug!("{} v{} tracing initialized", config::APP_NAME, config::APP_VERSION);
    }
}
