//! Small helpers shared by the cell and column modules.

use std::collections::TryReserveError;

use console::measure_text_width;

/// Returns the display width of a string in terminal columns.
///
/// ANSI escape sequences are not counted; wide characters count as 2.
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Copies a string into freshly reserved storage.
///
/// Unlike `to_string()`, allocation failure is reported instead of aborting.
pub(crate) fn try_copy_str(s: &str) -> Result<String, TryReserveError> {
    let mut out = String::new();
    out.try_reserve_exact(s.len())?;
    out.push_str(s);
    Ok(out)
}

/// Fallible copy of an optional string.
pub(crate) fn try_copy_opt(s: Option<&str>) -> Result<Option<String>, TryReserveError> {
    s.map(try_copy_str).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn display_width_ignores_ansi() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(display_width("\x1b[38;5;196mcolor\x1b[0m"), 5);
    }

    #[test]
    fn display_width_wide_chars() {
        assert_eq!(display_width("日本語"), 6);
    }

    #[test]
    fn try_copy_str_is_independent() {
        let src = String::from("header");
        let copy = try_copy_str(&src).unwrap();
        assert_eq!(copy, src);
        assert_ne!(copy.as_ptr(), src.as_ptr());
    }

    #[test]
    fn try_copy_opt_none() {
        assert_eq!(try_copy_opt(None).unwrap(), None);
        assert_eq!(try_copy_opt(Some("x")).unwrap(), Some("x".to_string()));
    }
}
