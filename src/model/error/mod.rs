pub mod args;
pub mod launch;
pub mod system;

use crate::model::error::args::ArgsError;
use crate::model::error::launch::LaunchError;
use crate::model::error::system::SystemError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Args(#[from] ArgsError),
    #[error(transparent)]
    Launch(#[from] LaunchError),
    #[error(transparent)]
    System(#[from] SystemError),
}

impl Error {
    pub fn level(&self) -> tracing::Level {
        match self {
            Self::Args(error) => error.level(),
            Self::Launch(error) => error.level(),
            Self::System(error) => error.level(),
        }
    }

    pub fn log(&self) {
        match self.level() {
            tracing::Level::ERROR => tracing::error!("{self}"),
            tracing::Level::WARN => tracing::warn!("{self}"),
            tracing::Level::INFO => tracing::info!("{self}"),
            tracing::Level::DEBUG => tracing::debug!("{self}"),
            tracing::Level::TRACE => tracing::trace!("{self}"),
        }
    }
}
