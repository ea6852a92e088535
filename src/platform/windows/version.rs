use crate::model::error::system::SystemError;
use windows::Win32::System::SystemInformation::{GetVersionExW, OSVERSIONINFOW};

// The shell-execute elevation verb exists from Vista on.
const MIN_MAJOR_VERSION: u32 = 6;

/// Rejects pre-Vista systems. A failed version query does not block the run.
pub fn ensure_supported() -> Result<(), SystemError> {
    let mut info = OSVERSIONINFOW {
        dwOSVersionInfoSize: size_of::<OSVERSIONINFOW>() as u32,
        ..Default::default()
    };
    if unsafe { GetVersionExW(&mut info) }.is_ok() && info.dwMajorVersion < MIN_MAJOR_VERSION {
        return Err(SystemError::UnsupportedOsVersion {
            major: info.dwMajorVersion,
        });
    }
    Ok(())
}
