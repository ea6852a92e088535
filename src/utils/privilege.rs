#[cfg(target_os = "linux")]
use crate::platform::linux::privilege as platform;
#[cfg(target_os = "windows")]
use crate::platform::windows::privilege as platform;

pub fn is_elevated() -> bool {
    platform::is_elevated()
}
