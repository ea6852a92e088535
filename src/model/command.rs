use crate::model::args::LaunchRequest;
use crate::model::error::args::ArgsError;
use std::path::PathBuf;

/// The resolved launch input consumed by the platform launchers. Built after
/// validation and interpreter resolution, so the application is always known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub application: String,
    pub arguments: Vec<String>,
    pub working_directory: Option<PathBuf>,
    pub elevate: bool,
    pub hide: bool,
    pub wait: bool,
}

impl LaunchCommand {
    pub fn from_request(request: &LaunchRequest) -> Result<Self, ArgsError> {
        let application = request
            .application_name
            .clone()
            .ok_or(ArgsError::InvalidArguments)?;
        Ok(Self {
            application,
            arguments: request.arguments.clone(),
            working_directory: request.working_directory.clone(),
            elevate: !request.unelevated,
            hide: request.hide,
            wait: request.wait,
        })
    }

    pub fn parameters(&self) -> String {
        self.arguments.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_request_requires_an_application() {
        let request = LaunchRequest::default();
        assert_eq!(
            LaunchCommand::from_request(&request),
            Err(ArgsError::InvalidArguments)
        );
    }

    #[test]
    fn elevation_is_the_inverse_of_the_unelevated_flag() {
        let mut request = LaunchRequest {
            application_name: Some("prog".to_string()),
            ..LaunchRequest::default()
        };
        assert!(LaunchCommand::from_request(&request).unwrap().elevate);

        request.unelevated = true;
        assert!(!LaunchCommand::from_request(&request).unwrap().elevate);
    }

    #[test]
    fn parameters_join_with_single_spaces() {
        let request = LaunchRequest {
            application_name: Some("prog".to_string()),
            arguments: vec!["a".to_string(), "b c".to_string()],
            ..LaunchRequest::default()
        };
        let command = LaunchCommand::from_request(&request).unwrap();
        assert_eq!(command.parameters(), "a b c");
    }
}
