use crate::model::command::LaunchCommand;
use crate::model::error::Error;
use crate::model::error::launch::LaunchError;
use crate::platform::windows::raii_guard::ComInitGuard;
use windows::core::{Interface, BSTR, VARIANT};
use windows::Win32::System::Com::{
    CoCreateInstance, IDispatch, IServiceProvider, CLSCTX_ALL,
};
use windows::Win32::UI::Shell::{
    IShellBrowser, IShellDispatch2, IShellFolderViewDual, IShellView, IShellWindows,
    ShellWindows, CSIDL_DESKTOP, SID_STopLevelBrowser, SVGIO_BACKGROUND, SWC_DESKTOP,
    SWFO_NEEDDISPATCH,
};
use windows::Win32::UI::WindowsAndMessaging::{SW_HIDE, SW_SHOWNORMAL};

/// Launches through the desktop shell's automation surface instead of the
/// caller's own token. The desktop shell runs unelevated in the interactive
/// session, so the child comes up unelevated as well. No process handle or
/// exit code can be observed on this path.
pub fn launch(command: &LaunchCommand) -> Result<(), Error> {
    let _com = ComInitGuard::new()?;

    let shell = desktop_shell_dispatch()?;

    let directory = command
        .working_directory
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();
    let show = if command.hide {
        SW_HIDE.0
    } else {
        SW_SHOWNORMAL.0
    };

    unsafe {
        shell.ShellExecute(
            &BSTR::from(command.application.as_str()),
            &VARIANT::from(BSTR::from(command.parameters().as_str())),
            &VARIANT::from(BSTR::from(directory.as_str())),
            &VARIANT::from(BSTR::new()),
            &VARIANT::from(show),
        )
    }
    .map_err(step("IShellDispatch2::ShellExecute"))?;

    Ok(())
}

/// Walks from the shell-windows object down to the desktop's shell dispatch.
/// Every intermediate interface is released on drop, whichever step aborts
/// the chain.
fn desktop_shell_dispatch() -> Result<IShellDispatch2, LaunchError> {
    let shell_windows: IShellWindows =
        unsafe { CoCreateInstance(&ShellWindows, None, CLSCTX_ALL) }
            .map_err(step("CoCreateInstance(ShellWindows)"))?;

    let location = VARIANT::from(CSIDL_DESKTOP as i32);
    let root = VARIANT::default();
    let mut hwnd = 0i32;
    let desktop: IDispatch = unsafe {
        shell_windows.FindWindowSW(
            &location,
            &root,
            SWC_DESKTOP.0,
            &mut hwnd,
            SWFO_NEEDDISPATCH.0,
        )
    }
    .map_err(step("IShellWindows::FindWindowSW"))?;

    let provider: IServiceProvider = desktop
        .cast()
        .map_err(step("IDispatch::QueryInterface(IServiceProvider)"))?;
    let browser: IShellBrowser = unsafe { provider.QueryService(&SID_STopLevelBrowser) }
        .map_err(step("IServiceProvider::QueryService"))?;
    let view: IShellView = unsafe { browser.QueryActiveShellView() }
        .map_err(step("IShellBrowser::QueryActiveShellView"))?;

    let background: IDispatch = unsafe { view.GetItemObject(SVGIO_BACKGROUND.0 as u32) }
        .map_err(step("IShellView::GetItemObject"))?;
    let folder_view: IShellFolderViewDual = background
        .cast()
        .map_err(step("IDispatch::QueryInterface(IShellFolderViewDual)"))?;
    let application: IDispatch = unsafe { folder_view.Application() }
        .map_err(step("IShellFolderViewDual::Application"))?;

    application
        .cast()
        .map_err(step("IDispatch::QueryInterface(IShellDispatch2)"))
}

fn step(step: &'static str) -> impl FnOnce(windows::core::Error) -> LaunchError {
    move |err| LaunchError::DesktopAutomationFailed {
        step,
        code: err.code().0,
    }
}
