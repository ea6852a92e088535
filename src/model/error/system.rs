#[allow(dead_code)]
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SystemError {
    #[error("%{variable}% is not defined")]
    InterpreterNotDefined { variable: &'static str },

    #[error("This tool requires Windows Vista or above (detected major version {major})")]
    UnsupportedOsVersion { major: u32 },

    #[error("De-elevated launch is not supported on this platform")]
    DeElevationUnsupported,
}

impl SystemError {
    pub fn level(&self) -> tracing::Level {
        tracing::Level::ERROR
    }
}
