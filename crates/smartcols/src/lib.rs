//! # smartcols - Column Descriptors for Terminal Tables
//!
//! `smartcols` provides the column model a terminal table renderer works
//! from: how each field is labeled, colored, sized and laid out. It does not
//! allocate widths or format rows itself; a layout engine reads the width
//! parameters and flags stored here and writes its measurements back.
//!
//! ## Core Concepts
//!
//! - [`Column`]: header cell, resolved color, widths, width hint and
//!   layout flags
//! - [`ColumnRef`]: reference-counted handle; the last release tears the
//!   column down
//! - [`Cell`]: text, color and user payload, used for the column header
//! - [`ColorScheme`]: resolves symbolic color names when a color is set
//! - [`ColumnList`]: insertion-ordered collection of columns, as a table
//!   keeps them
//! - [`ColumnSpec`]: serializable column definition for YAML/JSON config
//!
//! ## Quick Start
//!
//! ```rust
//! use smartcols::{ColumnList, ColumnRef};
//!
//! let name = ColumnRef::new();
//! name.set_name("NAME");
//! name.set_tree(true);
//!
//! let size = ColumnRef::new();
//! size.set_name("SIZE");
//! size.set_right(true);
//! size.set_color(Some("green")).unwrap();
//!
//! let mut columns = ColumnList::new();
//! columns.push(&name).unwrap();
//! columns.push(&size).unwrap();
//!
//! assert_eq!(columns.len(), 2);
//! assert_eq!(size.color().as_deref(), Some("\x1b[32m"));
//! ```
//!
//! ## Colors
//!
//! A color starting with an alphanumeric character is a scheme name and is
//! resolved once, when it is set; anything else (such as an escape
//! sequence) is stored as given. The built-in scheme knows the usual
//! terminal color names; [`SchemeTable`] adds user-defined names from YAML.
//!
//! ```rust
//! use smartcols::{ColumnRef, SchemeTable};
//!
//! let scheme = SchemeTable::from_yaml("size: lightgreen").unwrap();
//! let cl = ColumnRef::new();
//! cl.set_color_with(Some("size"), &scheme).unwrap();
//! assert_eq!(cl.color().as_deref(), Some("\x1b[1;32m"));
//!
//! cl.set_color(Some("\x1b[4m")).unwrap();
//! assert_eq!(cl.color().as_deref(), Some("\x1b[4m"));
//!
//! assert!(cl.set_color(Some("not-a-real-scheme")).is_err());
//! assert_eq!(cl.color().as_deref(), Some("\x1b[4m"));
//! ```

pub mod api;
pub mod cell;
pub mod column;
pub mod config;
mod error;
pub mod flags;
pub mod list;
pub mod scheme;
mod util;

pub use cell::Cell;
pub use column::{Column, ColumnRef, WeakColumnRef};
pub use config::{build_list, parse_columns_json, parse_columns_yaml, ColumnSpec};
pub use error::{ColumnError, Result, SchemeError};
pub use flags::ColumnFlags;
pub use list::{ColumnList, ListId};
pub use scheme::{default_scheme, AnsiScheme, ColorScheme, SchemeTable};
pub use util::display_width;
