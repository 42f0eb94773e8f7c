//! Table cells.
//!
//! A [`Cell`] holds one value: its text, an optional color and an optional
//! user payload. Columns own exactly one cell, their header; data cells
//! live in the (external) table lines.
//!
//! ```rust
//! use smartcols::Cell;
//!
//! let mut cell = Cell::new();
//! cell.set_data("NAME");
//! cell.set_color(Some("\x1b[1m"));
//! assert_eq!(cell.data(), Some("NAME"));
//! assert_eq!(cell.width(), 4);
//! ```

use serde_json::Value;

use crate::error::Result;
use crate::util::{display_width, try_copy_opt};

/// A single value holder: text, color and user payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    /// Cell text.
    data: Option<String>,
    /// Color specification, stored as given.
    color: Option<String>,
    /// Arbitrary caller payload.
    userdata: Option<Value>,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Cell::default()
    }

    /// Creates a cell holding `data`.
    pub fn with_data(data: impl Into<String>) -> Self {
        Cell {
            data: Some(data.into()),
            ..Default::default()
        }
    }

    /// Returns the cell text.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Sets the cell text.
    pub fn set_data(&mut self, data: impl Into<String>) {
        self.data = Some(data.into());
    }

    /// Removes the cell text.
    pub fn clear_data(&mut self) {
        self.data = None;
    }

    /// Returns the cell color.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Sets or clears the cell color.
    ///
    /// The value is stored verbatim. Use a column's color for scheme names.
    pub fn set_color(&mut self, color: Option<&str>) {
        self.color = color.map(str::to_string);
    }

    /// Returns the user payload.
    pub fn userdata(&self) -> Option<&Value> {
        self.userdata.as_ref()
    }

    /// Sets or clears the user payload.
    pub fn set_userdata(&mut self, userdata: Option<Value>) {
        self.userdata = userdata;
    }

    /// Returns true when the cell holds no text, color or payload.
    pub fn is_empty(&self) -> bool {
        self.data.is_none() && self.color.is_none() && self.userdata.is_none()
    }

    /// Releases all owned content. The cell stays valid and empty.
    pub fn reset(&mut self) {
        self.data = None;
        self.color = None;
        self.userdata = None;
    }

    /// Deep-copies the content of `other` into this cell.
    ///
    /// Text and color are copied into fresh storage; on allocation failure
    /// the error is returned and this cell is left unchanged.
    pub fn try_copy_content_from(&mut self, other: &Cell) -> Result<()> {
        let data = try_copy_opt(other.data())?;
        let color = try_copy_opt(other.color())?;
        self.data = data;
        self.color = color;
        self.userdata = other.userdata.clone();
        Ok(())
    }

    /// Display width of the cell text, in terminal columns.
    pub fn width(&self) -> usize {
        self.data().map(display_width).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_cell_is_empty() {
        let cell = Cell::new();
        assert!(cell.is_empty());
        assert_eq!(cell.data(), None);
        assert_eq!(cell.color(), None);
        assert_eq!(cell.width(), 0);
    }

    #[test]
    fn set_and_clear_data() {
        let mut cell = Cell::with_data("PID");
        assert_eq!(cell.data(), Some("PID"));
        cell.clear_data();
        assert_eq!(cell.data(), None);
    }

    #[test]
    fn reset_releases_everything() {
        let mut cell = Cell::with_data("NAME");
        cell.set_color(Some("\x1b[32m"));
        cell.set_userdata(Some(json!({"id": 7})));
        cell.reset();
        assert!(cell.is_empty());
    }

    #[test]
    fn copy_content_is_deep() {
        let mut src = Cell::with_data("SIZE");
        src.set_color(Some("\x1b[33m"));
        src.set_userdata(Some(json!(42)));

        let mut dst = Cell::new();
        dst.try_copy_content_from(&src).unwrap();
        assert_eq!(dst, src);

        dst.set_data("CHANGED");
        assert_eq!(src.data(), Some("SIZE"));
    }

    #[test]
    fn copy_content_overwrites_existing() {
        let mut dst = Cell::with_data("old");
        dst.set_color(Some("\x1b[31m"));
        dst.try_copy_content_from(&Cell::new()).unwrap();
        assert!(dst.is_empty());
    }

    #[test]
    fn width_ignores_escape_sequences() {
        let cell = Cell::with_data("\x1b[1mMOUNT\x1b[0m");
        assert_eq!(cell.width(), 5);
    }
}
