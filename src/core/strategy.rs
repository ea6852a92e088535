/// Which of the two OS launch mechanisms to use. `Direct` goes through the
/// shell-execute facility and yields a process handle; `DeElevated` goes
/// through the desktop shell's automation surface and yields nothing to wait
/// on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStrategy {
    Direct,
    DeElevated,
}

impl LaunchStrategy {
    /// The native elevation mechanism can only raise privileges, never drop
    /// them, so the automation detour is taken exactly when an elevated
    /// caller asks to run unelevated.
    pub fn select(request_unelevated: bool, currently_elevated: bool) -> Self {
        if request_unelevated && currently_elevated {
            Self::DeElevated
        } else {
            Self::Direct
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevation_requests_always_go_direct() {
        assert_eq!(LaunchStrategy::select(false, false), LaunchStrategy::Direct);
        assert_eq!(LaunchStrategy::select(false, true), LaunchStrategy::Direct);
    }

    #[test]
    fn unelevated_request_from_an_unelevated_caller_goes_direct() {
        assert_eq!(LaunchStrategy::select(true, false), LaunchStrategy::Direct);
    }

    #[test]
    fn unelevated_request_from_an_elevated_caller_de_elevates() {
        assert_eq!(
            LaunchStrategy::select(true, true),
            LaunchStrategy::DeElevated
        );
    }
}
