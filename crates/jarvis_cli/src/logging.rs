use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "JARVIS_LOG";
const DEFAULT_LEVEL: &str = "warn";

/// Installs the stderr subscriber; stdout carries only user-facing text.
///
/// Call once, from `main`.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
