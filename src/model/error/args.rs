#[allow(dead_code)]
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Unrecognized Flag {flag}")]
    UnrecognizedFlag { flag: String },

    #[error("Flag -dir requires a path value")]
    MissingDirectoryValue,

    #[error("Command Line too long")]
    CommandLineTooLong,

    #[error("Invalid arguments")]
    InvalidArguments,
}

impl ArgsError {
    pub fn level(&self) -> tracing::Level {
        tracing::Level::ERROR
    }
}
