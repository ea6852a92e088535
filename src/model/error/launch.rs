#[allow(dead_code)]
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("{application} could not be launched: {code}")]
    ShellExecuteFailed { application: String, code: u32 },

    #[error("Desktop automation failed at {step}: {code:#010x}")]
    DesktopAutomationFailed { step: &'static str, code: i32 },

    #[error("{application} could not be launched: {source}")]
    SpawnFailed {
        application: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wait for {application}: {source}")]
    WaitFailed {
        application: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    pub fn level(&self) -> tracing::Level {
        tracing::Level::ERROR
    }
}
