use crate::model::command::LaunchCommand;
use crate::model::error::Error;
use crate::model::error::system::SystemError;

/// There is no desktop-shell automation surface to hand the launch to.
pub fn launch(_command: &LaunchCommand) -> Result<(), Error> {
    Err(SystemError::DeElevationUnsupported.into())
}
