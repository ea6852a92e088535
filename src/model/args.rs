use crate::model::error::args::ArgsError;
use std::fmt;
use std::path::PathBuf;

// Matches the fixed accumulation buffer of the classic launcher: the joined
// argument tail must stay below 260 UTF-16 code units.
pub const MAX_COMMAND_LINE: usize = 260;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchRequest {
    pub application_name: Option<String>,
    pub arguments: Vec<String>,
    pub wait: bool,
    pub hide: bool,
    pub unelevated: bool,
    pub start_comspec: bool,
    pub working_directory: Option<PathBuf>,
    pub show_help: bool,
    pub debug: bool,
}

impl LaunchRequest {
    /// Builds a request from the raw argument tokens (program name excluded).
    /// Flags are case-insensitive and may be prefixed with `-` or `/`; the
    /// first non-flag token ends flag parsing.
    pub fn parse<I>(tokens: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut request = Self::default();
        let mut tokens = tokens.into_iter();
        let mut flags_done = false;
        let mut seen_any = false;

        while let Some(token) = tokens.next() {
            seen_any = true;
            if !flags_done && (token.starts_with('-') || token.starts_with('/')) {
                match token[1..].to_ascii_lowercase().as_str() {
                    "v" => request.debug = true,
                    "?" => request.show_help = true,
                    "wait" => request.wait = true,
                    "k" => request.start_comspec = true,
                    "hide" => request.hide = true,
                    "unel" => request.unelevated = true,
                    "dir" => {
                        let dir = tokens.next().ok_or(ArgsError::MissingDirectoryValue)?;
                        request.working_directory = Some(PathBuf::from(dir));
                    }
                    _ => {
                        return Err(ArgsError::UnrecognizedFlag {
                            flag: token[1..].to_string(),
                        });
                    }
                }
            } else {
                flags_done = true;
                if request.application_name.is_none() && !request.start_comspec {
                    request.application_name = Some(token);
                } else {
                    request.arguments.push(token);
                }
            }
        }

        if !seen_any {
            request.show_help = true;
        }

        Ok(request)
    }

    pub fn command_line(&self) -> String {
        self.arguments.join(" ")
    }

    pub fn validate(&self) -> Result<(), ArgsError> {
        if self.show_help {
            return Ok(());
        }
        if self.start_comspec && self.arguments.is_empty() {
            return Err(ArgsError::InvalidArguments);
        }
        if !self.start_comspec && self.application_name.is_none() {
            return Err(ArgsError::InvalidArguments);
        }
        if self.command_line().encode_utf16().count() >= MAX_COMMAND_LINE {
            return Err(ArgsError::CommandLineTooLong);
        }
        Ok(())
    }
}

fn yn(value: bool) -> &'static str {
    if value { "Y" } else { "N" }
}

impl fmt::Display for LaunchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ShowHelp:        {}", yn(self.show_help))?;
        writeln!(f, "Wait:            {}", yn(self.wait))?;
        writeln!(f, "Hide:            {}", yn(self.hide))?;
        writeln!(f, "Unelevated:      {}", yn(self.unelevated))?;
        writeln!(
            f,
            "Dir:             {}",
            self.working_directory
                .as_ref()
                .map(|dir| dir.display().to_string())
                .unwrap_or_default()
        )?;
        writeln!(f, "StartComspec:    {}", yn(self.start_comspec))?;
        writeln!(
            f,
            "ApplicationName: {}",
            self.application_name.as_deref().unwrap_or_default()
        )?;
        write!(f, "CommandLine:     {}", self.command_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: &[&str]) -> Result<LaunchRequest, ArgsError> {
        LaunchRequest::parse(tokens.iter().map(|token| token.to_string()))
    }

    #[test]
    fn no_tokens_shows_help() {
        let request = parse(&[]).unwrap();
        assert!(request.show_help);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn flags_are_case_insensitive() {
        let request = parse(&["-WAIT", "-Hide", "-UNEL", "prog"]).unwrap();
        assert!(request.wait);
        assert!(request.hide);
        assert!(request.unelevated);
    }

    #[test]
    fn slash_prefix_is_accepted() {
        let request = parse(&["/wait", "/v", "prog"]).unwrap();
        assert!(request.wait);
        assert!(request.debug);
        assert_eq!(request.application_name.as_deref(), Some("prog"));
    }

    #[test]
    fn dir_consumes_the_next_token() {
        let request = parse(&["-dir", r"C:\tmp", "prog"]).unwrap();
        assert_eq!(request.working_directory, Some(PathBuf::from(r"C:\tmp")));
        assert_eq!(request.application_name.as_deref(), Some("prog"));
    }

    #[test]
    fn dir_without_a_value_is_rejected() {
        assert_eq!(parse(&["-dir"]), Err(ArgsError::MissingDirectoryValue));
    }

    #[test]
    fn unrecognized_flags_are_rejected() {
        assert_eq!(
            parse(&["-bogus", "prog"]),
            Err(ArgsError::UnrecognizedFlag {
                flag: "bogus".to_string()
            })
        );
    }

    #[test]
    fn first_non_flag_token_is_the_program() {
        let request = parse(&["-hide", "notepad.exe", "a", "b"]).unwrap();
        assert_eq!(request.application_name.as_deref(), Some("notepad.exe"));
        assert_eq!(request.command_line(), "a b");
    }

    #[test]
    fn flags_after_the_program_are_arguments() {
        let request = parse(&["prog", "-wait", "/hide"]).unwrap();
        assert!(!request.wait);
        assert!(!request.hide);
        assert_eq!(request.command_line(), "-wait /hide");
    }

    #[test]
    fn comspec_keeps_every_non_flag_token_in_the_tail() {
        let request = parse(&["-k", "dir", "/b"]).unwrap();
        assert!(request.start_comspec);
        assert_eq!(request.application_name, None);
        assert_eq!(request.command_line(), "dir /b");
    }

    #[test]
    fn missing_program_fails_validation() {
        let request = parse(&["-wait"]).unwrap();
        assert_eq!(request.validate(), Err(ArgsError::InvalidArguments));
    }

    #[test]
    fn comspec_with_an_empty_tail_fails_validation() {
        let request = parse(&["-k"]).unwrap();
        assert_eq!(request.validate(), Err(ArgsError::InvalidArguments));
    }

    #[test]
    fn help_skips_validation_of_other_fields() {
        let request = parse(&["-?", "-k"]).unwrap();
        assert!(request.show_help);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn overlong_command_lines_are_rejected() {
        let long = "x".repeat(MAX_COMMAND_LINE);
        let request = parse(&["prog", &long]).unwrap();
        assert_eq!(request.validate(), Err(ArgsError::CommandLineTooLong));
    }

    #[test]
    fn debug_echo_lists_the_parsed_fields() {
        let request = parse(&["-v", "-wait", "prog", "arg"]).unwrap();
        let echo = request.to_string();
        assert!(echo.contains("Wait:            Y"));
        assert!(echo.contains("ApplicationName: prog"));
        assert!(echo.contains("CommandLine:     arg"));
    }
}
