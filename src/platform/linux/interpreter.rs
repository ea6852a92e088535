pub const VARIABLE: &str = "SHELL";

/// POSIX shells have no keep-open equivalent of `cmd /K`; the closest match
/// is running the command string and returning to the caller's terminal.
pub fn keep_open_arguments(command_line: &str) -> Vec<String> {
    vec!["-c".to_string(), command_line.to_string()]
}
