use std::io;
use tracing_subscriber::EnvFilter;

pub struct Logging;

impl Logging {
    /// Diagnostics go to standard error, the launcher's only reporting
    /// channel; standard output is reserved for the help and `-v` echo.
    pub fn initialize() {
        log_panics::init();
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .without_time()
            .init();
    }
}
