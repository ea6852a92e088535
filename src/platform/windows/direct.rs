use crate::model::command::LaunchCommand;
use crate::model::error::Error;
use crate::model::error::launch::LaunchError;
use crate::platform::windows::helper::{as_pcwstr, opt_pcwstr, to_wide};
use crate::platform::windows::raii_guard::HandleGuard;
use tracing::warn;
use windows::core::PCWSTR;
use windows::Win32::Foundation::WAIT_FAILED;
use windows::Win32::System::Threading::{WaitForSingleObject, INFINITE};
use windows::Win32::UI::Shell::{
    ShellExecuteExW, SEE_MASK_FLAG_NO_UI, SEE_MASK_NOCLOSEPROCESS, SHELLEXECUTEINFOW,
};
use windows::Win32::UI::WindowsAndMessaging::{SW_HIDE, SW_SHOWNORMAL};

/// Launches through the shell-execute facility. With `elevate` the `runas`
/// verb is applied, which may raise a consent prompt; declining it surfaces
/// as a launch failure with the OS error code.
pub fn launch(command: &LaunchCommand) -> Result<(), Error> {
    let file = to_wide(&command.application);
    let parameters = to_wide(command.parameters());
    let directory = command.working_directory.as_ref().map(to_wide);
    let verb = to_wide("runas");

    let mut info = SHELLEXECUTEINFOW {
        cbSize: size_of::<SHELLEXECUTEINFOW>() as u32,
        fMask: SEE_MASK_FLAG_NO_UI | SEE_MASK_NOCLOSEPROCESS,
        lpVerb: if command.elevate {
            as_pcwstr(&verb)
        } else {
            PCWSTR::null()
        },
        lpFile: as_pcwstr(&file),
        lpParameters: as_pcwstr(&parameters),
        lpDirectory: opt_pcwstr(directory.as_ref()),
        nShow: if command.hide {
            SW_HIDE.0
        } else {
            SW_SHOWNORMAL.0
        },
        ..Default::default()
    };

    unsafe { ShellExecuteExW(&mut info) }.map_err(|err| LaunchError::ShellExecuteFailed {
        application: command.application.clone(),
        code: win32_code(&err),
    })?;

    // A hidden-window or DDE launch can succeed without a new process; only
    // a real handle can be waited on, and it is closed on every path.
    let process = HandleGuard::new(info.hProcess);
    if command.wait && process.is_valid() {
        if unsafe { WaitForSingleObject(*process, INFINITE) } == WAIT_FAILED {
            warn!(application = %command.application, "wait on the launched process failed");
        }
    }

    Ok(())
}

fn win32_code(err: &windows::core::Error) -> u32 {
    (err.code().0 as u32) & 0xFFFF
}
