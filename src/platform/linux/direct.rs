use crate::model::command::LaunchCommand;
use crate::model::error::Error;
use crate::model::error::launch::LaunchError;
use crate::platform::linux::privilege::privileged;
use std::process::Command;

/// There is no consent-prompt elevation here; an elevation request from an
/// unprivileged caller routes through sudo, everything else is a plain
/// spawn. `hide` has no window concept to act on and is accepted as a no-op.
pub fn launch(command: &LaunchCommand) -> Result<(), Error> {
    let mut process = if command.elevate && !privileged() {
        let mut process = Command::new("sudo");
        process
            .arg("--")
            .arg(&command.application)
            .args(&command.arguments);
        process
    } else {
        let mut process = Command::new(&command.application);
        process.args(&command.arguments);
        process
    };

    if let Some(dir) = &command.working_directory {
        process.current_dir(dir);
    }

    let mut child = process.spawn().map_err(|source| LaunchError::SpawnFailed {
        application: command.application.clone(),
        source,
    })?;

    if command.wait {
        // The launch outcome only reflects that the child started; its own
        // exit status is not propagated.
        child.wait().map_err(|source| LaunchError::WaitFailed {
            application: command.application.clone(),
            source,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_command(application: &str) -> LaunchCommand {
        LaunchCommand {
            application: application.to_string(),
            arguments: Vec::new(),
            working_directory: None,
            elevate: false,
            hide: false,
            wait: true,
        }
    }

    #[test]
    fn launching_an_existing_program_succeeds() {
        assert!(launch(&plain_command("true")).is_ok());
    }

    #[test]
    fn a_failing_child_still_counts_as_launched() {
        assert!(launch(&plain_command("false")).is_ok());
    }

    #[test]
    fn a_missing_program_surfaces_a_spawn_failure() {
        let err = launch(&plain_command("/nonexistent/program")).unwrap_err();
        assert!(matches!(
            err,
            Error::Launch(LaunchError::SpawnFailed { .. })
        ));
    }
}
