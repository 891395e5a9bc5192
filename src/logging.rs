//! Console logging for the CLI.
//!
//! # Configuration
//!
//! - **Log level**: controlled by the `LOG_LEVEL` environment variable
//!   (default: "warn", so tables and progress output stay readable)
//! - **Filtering**: noisy HTTP dependencies are held at warn
//! - **Format**: compact, with targets and source locations

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "studyhall={level},studyhall_client={level},studyhall_core={level},reqwest=warn,hyper=warn",
            level = log_level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
