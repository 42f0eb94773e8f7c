//! Bitmask view over a column's layout flags.
//!
//! Columns store each flag as its own `bool`; [`ColumnFlags`] is a compact
//! way to read or assign them all at once, e.g. when a table builder takes
//! a flag word per column.
//!
//! ```rust
//! use smartcols::{ColumnFlags, ColumnRef};
//!
//! let cl = ColumnRef::new();
//! cl.set_flags(ColumnFlags::TRUNC | ColumnFlags::RIGHT);
//! assert!(cl.is_trunc());
//! assert!(cl.is_right());
//! assert!(!cl.is_tree());
//! assert_eq!(cl.flags(), ColumnFlags::TRUNC | ColumnFlags::RIGHT);
//! ```

use crate::error::{ColumnError, Result};

bitflags::bitflags! {
    /// Layout flags of a column.
    ///
    /// The flags are independent: no combination is rejected here.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[repr(transparent)]
    pub struct ColumnFlags: u32 {
        /// Content may be truncated when space is short.
        const TRUNC = 1 << 0;
        /// Render as a tree column.
        const TREE = 1 << 1;
        /// Right-justify content.
        const RIGHT = 1 << 2;
        /// Treat the width hint as a hard constraint.
        const STRICT_WIDTH = 1 << 3;
        /// Leave this column out of extreme-value detection.
        const NOEXTREMES = 1 << 4;
    }
}

impl ColumnFlags {
    /// Parses a comma-separated list of flag names (`trunc,right`).
    ///
    /// Names are case-insensitive; `noextremes` and `no_extremes` are both
    /// accepted, as are `strict_width` and `strictwidth`. An unknown name
    /// is a [`ColumnError::Config`].
    pub fn parse_list(s: &str) -> Result<Self> {
        let mut flags = ColumnFlags::empty();
        for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            flags |= match name.to_ascii_lowercase().as_str() {
                "trunc" => ColumnFlags::TRUNC,
                "tree" => ColumnFlags::TREE,
                "right" => ColumnFlags::RIGHT,
                "strict_width" | "strictwidth" => ColumnFlags::STRICT_WIDTH,
                "no_extremes" | "noextremes" => ColumnFlags::NOEXTREMES,
                _ => {
                    return Err(ColumnError::Config(format!(
                        "unknown column flag: {}",
                        name
                    )))
                }
            };
        }
        Ok(flags)
    }
}
