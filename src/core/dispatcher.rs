use crate::core::strategy::LaunchStrategy;
use crate::model::args::LaunchRequest;
use crate::model::command::LaunchCommand;
use crate::model::error::Error;
use crate::model::error::args::ArgsError;
use crate::model::error::system::SystemError;
use crate::platform::{desktop, direct, interpreter};
use crate::utils::privilege;
use std::env;
use std::ffi::OsString;
use tracing::debug;

// The interpreter rewrite gets a wider buffer than the plain tail, matching
// the historical launcher.
const MAX_INTERPRETER_COMMAND: usize = 520;

const USAGE: &str = "\
Execute a program from the command line with elevated rights

Usage: Elevate [options] prog [args]
-?    - Shows this help
-v    - Echoes the parsed command line
-wait - Waits until prog terminates
-hide - Launches with hidden window
-unel - Will launch without elevation (from a currently elevated process)
          Precludes the -wait option.
-dir  - Working directory for the launched program
-k    - Starts the command interpreter (%COMSPEC%) and
          executes prog in it (CMD.EXE, 4NT.EXE, etc.)
prog  - The program to execute
args  - Optional command line arguments to prog
";

pub fn dispatch(mut request: LaunchRequest) -> Result<(), Error> {
    if request.show_help {
        print!("{USAGE}");
        return Ok(());
    }

    if request.start_comspec {
        rewrite_for_interpreter(&mut request, env::var_os(interpreter::VARIABLE))?;
    }

    let currently_elevated = privilege::is_elevated();
    let strategy = LaunchStrategy::select(request.unelevated, currently_elevated);
    debug!(?strategy, currently_elevated, "selected launch strategy");

    let command = LaunchCommand::from_request(&request)?;
    match strategy {
        LaunchStrategy::Direct => direct::launch(&command),
        LaunchStrategy::DeElevated => {
            if command.wait {
                // The automation surface hands back no process handle, so
                // there is nothing to wait on.
                debug!("-wait is ignored for a de-elevated launch");
            }
            desktop::launch(&command)
        }
    }
}

/// Replaces the application with the configured command interpreter and turns
/// the argument tail into its keep-open invocation. The environment value is
/// injected by the caller.
fn rewrite_for_interpreter(
    request: &mut LaunchRequest,
    interpreter_path: Option<OsString>,
) -> Result<(), Error> {
    let Some(interpreter_path) = interpreter_path.filter(|value| !value.is_empty()) else {
        return Err(SystemError::InterpreterNotDefined {
            variable: interpreter::VARIABLE,
        }
        .into());
    };

    let arguments = interpreter::keep_open_arguments(&request.command_line());
    if arguments.join(" ").encode_utf16().count() >= MAX_INTERPRETER_COMMAND {
        return Err(ArgsError::CommandLineTooLong.into());
    }

    request.application_name = Some(interpreter_path.to_string_lossy().into_owned());
    request.arguments = arguments;
    Ok(())
}
