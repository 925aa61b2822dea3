use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter, e.g. `DIRINFO_LOG=debug`.
pub const LOG_ENV: &str = "DIRINFO_LOG";

/// Installs a stderr subscriber so stdout carries only the report.
///
/// Falls back to `warn` when the variable is unset or invalid. Calling this
/// more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
