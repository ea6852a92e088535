use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use windows::core::PCWSTR;

/// Nul-terminated UTF-16 buffer for the Win32 string APIs. The buffer must
/// outlive any `PCWSTR` pointing into it.
pub fn to_wide(value: impl AsRef<OsStr>) -> Vec<u16> {
    value.as_ref().encode_wide().chain(Some(0)).collect()
}

pub fn as_pcwstr(buffer: &[u16]) -> PCWSTR {
    PCWSTR(buffer.as_ptr())
}

pub fn opt_pcwstr(buffer: Option<&Vec<u16>>) -> PCWSTR {
    buffer.map_or(PCWSTR::null(), |buffer| PCWSTR(buffer.as_ptr()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_strings_are_nul_terminated() {
        let wide = to_wide("runas");
        assert_eq!(wide.last(), Some(&0));
        assert_eq!(wide.len(), 6);
    }

    #[test]
    fn absent_buffers_become_null_pointers() {
        assert!(opt_pcwstr(None).is_null());
        let buffer = to_wide("x");
        assert!(!opt_pcwstr(Some(&buffer)).is_null());
    }
}
