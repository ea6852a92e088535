pub const VARIABLE: &str = "COMSPEC";

/// `/K` keeps the interpreter open after running the command, and the tail
/// is quoted as a single token the way `cmd.exe` expects it.
pub fn keep_open_arguments(command_line: &str) -> Vec<String> {
    vec![format!("/K \"{command_line}\"")]
}
