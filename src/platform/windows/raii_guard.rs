use crate::model::error::launch::LaunchError;
use std::ops::Deref;
use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Com::{
    CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED, COINIT_DISABLE_OLE1DDE,
};

/// Owns a kernel handle and closes it on drop. An invalid handle is left
/// untouched.
pub struct HandleGuard {
    handle: HANDLE,
}

impl HandleGuard {
    pub fn new(handle: HANDLE) -> Self {
        Self { handle }
    }

    pub fn is_valid(&self) -> bool {
        !self.handle.is_invalid()
    }
}

impl Deref for HandleGuard {
    type Target = HANDLE;

    fn deref(&self) -> &Self::Target {
        &self.handle
    }
}

impl Drop for HandleGuard {
    fn drop(&mut self) {
        unsafe {
            if !self.handle.is_invalid() {
                let _ = CloseHandle(self.handle);
            }
        }
    }
}

/// Balances `CoInitializeEx` with `CoUninitialize`. Only constructed when
/// initialization succeeded, so the drop is always owed.
pub struct ComInitGuard;

impl ComInitGuard {
    pub fn new() -> Result<Self, LaunchError> {
        let hr =
            unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED | COINIT_DISABLE_OLE1DDE) };
        if hr.is_err() {
            return Err(LaunchError::DesktopAutomationFailed {
                step: "CoInitializeEx",
                code: hr.0,
            });
        }
        Ok(Self)
    }
}

impl Drop for ComInitGuard {
    fn drop(&mut self) {
        unsafe { CoUninitialize() }
    }
}
