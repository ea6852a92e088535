use crate::model::error::system::SystemError;

/// No minimum-version gate outside Windows.
pub fn ensure_supported() -> Result<(), SystemError> {
    Ok(())
}
