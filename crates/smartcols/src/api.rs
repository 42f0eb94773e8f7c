//! Handle-level functions for callers that may not have a column.
//!
//! These functions take `Option<&ColumnRef>` and give every operation a
//! defined answer when the column is absent:
//!
//! | Operation | Absent column |
//! |-----------|---------------|
//! | [`column_retain`], [`column_release`] | no-op |
//! | [`column_duplicate`] | `Err(InvalidArgument)` |
//! | setters, flag getters, [`column_width_hint`] | `Err(InvalidArgument)` |
//! | [`column_header`] | `None` |
//! | [`column_color`] | `None` (not an error) |
//!
//! ```rust
//! use smartcols::api::*;
//! use smartcols::ColumnRef;
//!
//! let cl = ColumnRef::new();
//! column_set_trunc(Some(&cl), true).unwrap();
//! assert!(column_is_trunc(Some(&cl)).unwrap());
//!
//! assert!(column_is_trunc(None).unwrap_err().is_invalid_argument());
//! assert_eq!(column_color(None), None);
//! ```

use std::cell::RefMut;

use crate::cell::Cell;
use crate::column::ColumnRef;
use crate::error::{ColumnError, Result};
use crate::scheme::ColorScheme;

fn require(cl: Option<&ColumnRef>) -> Result<&ColumnRef> {
    cl.ok_or_else(ColumnError::absent)
}

/// Creates a column with one reference.
pub fn column_new() -> ColumnRef {
    ColumnRef::new()
}

/// Adds a reference. Returns `None` for an absent column.
pub fn column_retain(cl: Option<&ColumnRef>) -> Option<ColumnRef> {
    cl.map(ColumnRef::retain)
}

/// Drops a reference. Returns `true` when the column was torn down.
pub fn column_release(cl: Option<ColumnRef>) -> bool {
    cl.is_some_and(ColumnRef::release)
}

/// Duplicates a column.
pub fn column_duplicate(cl: Option<&ColumnRef>) -> Result<ColumnRef> {
    require(cl)?.duplicate()
}

/// Sets the width hint. Any value is stored unchanged.
pub fn column_set_width_hint(cl: Option<&ColumnRef>, hint: f64) -> Result<()> {
    require(cl)?.set_width_hint(hint);
    Ok(())
}

/// The width hint; an absent column is an invalid argument.
pub fn column_width_hint(cl: Option<&ColumnRef>) -> Result<f64> {
    Ok(require(cl)?.width_hint())
}

/// The header cell, borrowed mutably from the column.
pub fn column_header(cl: Option<&ColumnRef>) -> Option<RefMut<'_, Cell>> {
    cl.map(ColumnRef::header_mut)
}

/// Sets or clears the color, resolving scheme names through `scheme`.
///
/// On error the stored color is unchanged.
pub fn column_set_color(
    cl: Option<&ColumnRef>,
    color: Option<&str>,
    scheme: &dyn ColorScheme,
) -> Result<()> {
    require(cl)?.set_color_with(color, scheme)
}

/// The resolved color; `None` both for "no color" and for an absent column.
pub fn column_color(cl: Option<&ColumnRef>) -> Option<String> {
    cl.and_then(ColumnRef::color)
}

/// Whether content may be truncated.
pub fn column_is_trunc(cl: Option<&ColumnRef>) -> Result<bool> {
    Ok(require(cl)?.is_trunc())
}

/// Whether this is the tree column.
pub fn column_is_tree(cl: Option<&ColumnRef>) -> Result<bool> {
    Ok(require(cl)?.is_tree())
}

/// Whether content is right-justified.
pub fn column_is_right(cl: Option<&ColumnRef>) -> Result<bool> {
    Ok(require(cl)?.is_right())
}

/// Whether the width hint is a hard constraint.
pub fn column_is_strict_width(cl: Option<&ColumnRef>) -> Result<bool> {
    Ok(require(cl)?.is_strict_width())
}

/// Whether the column is left out of extreme-value detection.
pub fn column_is_no_extremes(cl: Option<&ColumnRef>) -> Result<bool> {
    Ok(require(cl)?.is_no_extremes())
}

/// Sets the truncate flag.
pub fn column_set_trunc(cl: Option<&ColumnRef>, enable: bool) -> Result<()> {
    require(cl)?.set_trunc(enable);
    Ok(())
}

/// Sets the tree flag.
pub fn column_set_tree(cl: Option<&ColumnRef>, enable: bool) -> Result<()> {
    require(cl)?.set_tree(enable);
    Ok(())
}

/// Sets the right-justify flag.
pub fn column_set_right(cl: Option<&ColumnRef>, enable: bool) -> Result<()> {
    require(cl)?.set_right(enable);
    Ok(())
}

/// Sets the strict-width flag.
pub fn column_set_strict_width(cl: Option<&ColumnRef>, enable: bool) -> Result<()> {
    require(cl)?.set_strict_width(enable);
    Ok(())
}

/// Sets the no-extremes flag.
pub fn column_set_no_extremes(cl: Option<&ColumnRef>, enable: bool) -> Result<()> {
    require(cl)?.set_no_extremes(enable);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::default_scheme;

    #[test]
    fn absent_column_setters_fail() {
        assert!(column_set_width_hint(None, 0.5).unwrap_err().is_invalid_argument());
        assert!(column_set_trunc(None, true).is_err());
        assert!(column_set_tree(None, true).is_err());
        assert!(column_set_right(None, true).is_err());
        assert!(column_set_strict_width(None, true).is_err());
        assert!(column_set_no_extremes(None, true).is_err());
        assert!(column_set_color(None, Some("red"), default_scheme())
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn absent_column_getters_fail() {
        assert!(column_width_hint(None).unwrap_err().is_invalid_argument());
        assert!(column_is_trunc(None).is_err());
        assert!(column_is_tree(None).is_err());
        assert!(column_is_right(None).is_err());
        assert!(column_is_strict_width(None).is_err());
        assert!(column_is_no_extremes(None).is_err());
    }

    #[test]
    fn absent_column_optional_results() {
        assert_eq!(column_color(None), None);
        assert!(column_header(None).is_none());
        assert!(column_retain(None).is_none());
        assert!(!column_release(None));
        assert!(column_duplicate(None).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn present_column_passes_through() {
        let cl = column_new();
        column_set_width_hint(Some(&cl), 3.0).unwrap();
        assert_eq!(column_width_hint(Some(&cl)).unwrap(), 3.0);

        column_set_color(Some(&cl), Some("red"), default_scheme()).unwrap();
        assert_eq!(column_color(Some(&cl)).as_deref(), Some("\x1b[31m"));

        column_header(Some(&cl)).unwrap().set_data("PID");
        assert_eq!(cl.name().as_deref(), Some("PID"));
    }

    #[test]
    fn retain_release_through_options() {
        let cl = column_new();
        let extra = column_retain(Some(&cl));
        assert_eq!(cl.refcount(), 2);
        assert!(!column_release(extra));
        assert!(column_release(Some(cl)));
    }

    #[test]
    fn scenario_trunc_and_right() {
        let cl = column_new();
        column_set_trunc(Some(&cl), true).unwrap();
        column_set_right(Some(&cl), true).unwrap();
        assert!(column_is_trunc(Some(&cl)).unwrap());
        assert!(column_is_right(Some(&cl)).unwrap());
        assert!(!column_is_tree(Some(&cl)).unwrap());
    }
}
