//! Declarative column definitions.
//!
//! [`ColumnSpec`] is the serializable description of a column, so table
//! layouts can live in YAML or JSON next to the rest of an application's
//! configuration:
//!
//! ```rust
//! use smartcols::config::parse_columns_yaml;
//! use smartcols::scheme::default_scheme;
//!
//! let specs = parse_columns_yaml(r#"
//! - name: NAME
//!   tree: true
//! - name: SIZE
//!   right: true
//!   color: green
//!   width_hint: 0.1
//! "#).unwrap();
//!
//! let size = specs[1].build(default_scheme()).unwrap();
//! assert!(size.is_right());
//! assert_eq!(size.color().as_deref(), Some("\x1b[32m"));
//! ```

use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnRef};
use crate::error::Result;
use crate::flags::ColumnFlags;
use crate::list::ColumnList;
use crate::scheme::ColorScheme;

/// Serializable description of a column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnSpec {
    /// Header text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Default color: a scheme name or a literal sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Header-only color, stored verbatim on the header cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_color: Option<String>,
    /// Width hint.
    pub width_hint: f64,
    pub trunc: bool,
    pub tree: bool,
    pub right: bool,
    pub strict_width: bool,
    pub no_extremes: bool,
    /// Comma-separated flag names (`"trunc,right"`), added to the flags
    /// set by the individual fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
}

impl ColumnSpec {
    /// Creates a spec with just a header text.
    pub fn named(name: impl Into<String>) -> Self {
        ColumnSpec {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Builds a new column, resolving the color through `scheme`.
    ///
    /// An unknown name in `flags` is a [`ColumnError::Config`](crate::ColumnError::Config).
    pub fn build(&self, scheme: &dyn ColorScheme) -> Result<ColumnRef> {
        let listed = match self.flags.as_deref() {
            Some(list) => ColumnFlags::parse_list(list)?,
            None => ColumnFlags::empty(),
        };

        let mut col = Column::new();
        if let Some(name) = &self.name {
            col.set_name(name.as_str());
        }
        col.header_mut().set_color(self.header_color.as_deref());
        col.set_color_with(self.color.as_deref(), scheme)?;
        col.set_width_hint(self.width_hint);
        col.set_trunc(self.trunc);
        col.set_tree(self.tree);
        col.set_right(self.right);
        col.set_strict_width(self.strict_width);
        col.set_no_extremes(self.no_extremes);
        col.set_flags(col.flags() | listed);
        Ok(col.into())
    }

    /// Describes an existing column. The color is its resolved sequence.
    pub fn from_column(col: &Column) -> Self {
        ColumnSpec {
            name: col.name().map(str::to_string),
            color: col.color().map(str::to_string),
            header_color: col.header().color().map(str::to_string),
            width_hint: col.width_hint(),
            trunc: col.is_trunc(),
            tree: col.is_tree(),
            right: col.is_right(),
            strict_width: col.is_strict_width(),
            no_extremes: col.is_no_extremes(),
            flags: None,
        }
    }
}

/// Parses a YAML sequence of column specs.
pub fn parse_columns_yaml(yaml: &str) -> Result<Vec<ColumnSpec>> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Parses a JSON array of column specs.
pub fn parse_columns_json(json: &str) -> Result<Vec<ColumnSpec>> {
    Ok(serde_json::from_str(json)?)
}

/// Builds every spec into a new list, in order.
///
/// Stops at the first column that fails to build; columns already built
/// are released with the list.
pub fn build_list(specs: &[ColumnSpec], scheme: &dyn ColorScheme) -> Result<ColumnList> {
    let mut list = ColumnList::new();
    for spec in specs {
        let col = spec.build(scheme)?;
        list.push(&col)?;
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColumnError;
    use crate::scheme::{default_scheme, SchemeTable};

    #[test]
    fn defaults_are_empty() {
        let spec = ColumnSpec::default();
        assert_eq!(spec.name, None);
        assert_eq!(spec.width_hint, 0.0);
        assert!(!spec.trunc);
    }

    #[test]
    fn parse_yaml_with_defaults() {
        let specs = parse_columns_yaml(
            r#"
- name: TARGET
  tree: true
- name: FSTYPE
  trunc: true
  width_hint: 8
"#,
        )
        .unwrap();
        assert_eq!(specs.len(), 2);
        assert!(specs[0].tree);
        assert_eq!(specs[1].width_hint, 8.0);
        assert!(!specs[1].right);
    }

    #[test]
    fn parse_yaml_rejects_unknown_fields() {
        let err = parse_columns_yaml("- name: X\n  hidden: true\n").unwrap_err();
        assert!(matches!(err, ColumnError::Config(_)));
    }

    #[test]
    fn parse_json() {
        let specs = parse_columns_json(r#"[{"name": "PID", "right": true}]"#).unwrap();
        assert_eq!(specs[0], ColumnSpec { right: true, ..ColumnSpec::named("PID") });
    }

    #[test]
    fn build_applies_every_field() {
        let spec = ColumnSpec {
            name: Some("SIZE".into()),
            color: Some("red".into()),
            header_color: Some("\x1b[1m".into()),
            width_hint: 0.3,
            trunc: true,
            tree: false,
            right: true,
            strict_width: true,
            no_extremes: true,
            flags: None,
        };
        let col = spec.build(default_scheme()).unwrap();
        let col = col.borrow();
        assert_eq!(col.name(), Some("SIZE"));
        assert_eq!(col.color(), Some("\x1b[31m"));
        assert_eq!(col.header().color(), Some("\x1b[1m"));
        assert_eq!(col.width_hint(), 0.3);
        assert!(col.is_trunc());
        assert!(col.is_right());
        assert!(col.is_strict_width());
        assert!(col.is_no_extremes());
        assert!(!col.is_tree());
    }

    #[test]
    fn flag_list_adds_to_individual_flags() {
        let specs = parse_columns_yaml(
            r#"
- name: SIZE
  right: true
  flags: "trunc, noextremes"
"#,
        )
        .unwrap();
        let col = specs[0].build(default_scheme()).unwrap();
        assert_eq!(
            col.flags(),
            ColumnFlags::RIGHT | ColumnFlags::TRUNC | ColumnFlags::NOEXTREMES
        );
    }

    #[test]
    fn flag_list_unknown_name_fails() {
        let spec = ColumnSpec {
            flags: Some("tree,hidden".into()),
            ..ColumnSpec::named("X")
        };
        let err = spec.build(default_scheme()).unwrap_err();
        assert!(matches!(err, ColumnError::Config(_)));
    }

    #[test]
    fn build_unknown_color_fails() {
        let spec = ColumnSpec {
            color: Some("sparkly".into()),
            ..ColumnSpec::named("X")
        };
        assert!(spec.build(default_scheme()).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn build_with_custom_scheme() {
        let table = SchemeTable::new().with("sizecol", "\x1b[35m").unwrap();
        let spec = ColumnSpec {
            color: Some("sizecol".into()),
            ..ColumnSpec::named("SIZE")
        };
        let col = spec.build(&table).unwrap();
        assert_eq!(col.color().as_deref(), Some("\x1b[35m"));
    }

    #[test]
    fn from_column_rebuilds_same_column() {
        let spec = ColumnSpec {
            color: Some("blue".into()),
            tree: true,
            width_hint: 0.5,
            ..ColumnSpec::named("NAME")
        };
        let col = spec.build(default_scheme()).unwrap();
        let described = ColumnSpec::from_column(&col.borrow());
        assert_eq!(described.color.as_deref(), Some("\x1b[34m"));

        let rebuilt = described.build(default_scheme()).unwrap();
        assert_eq!(ColumnSpec::from_column(&rebuilt.borrow()), described);
    }

    #[test]
    fn build_list_keeps_order() {
        let specs = vec![ColumnSpec::named("A"), ColumnSpec::named("B")];
        let list = build_list(&specs, default_scheme()).unwrap();
        let names: Vec<_> = list.iter().filter_map(|c| c.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(list.iter().all(|c| c.is_linked() && c.refcount() == 1));
    }

    #[test]
    fn build_list_stops_on_error() {
        let specs = vec![
            ColumnSpec::named("A"),
            ColumnSpec {
                color: Some("nope".into()),
                ..ColumnSpec::named("B")
            },
        ];
        assert!(build_list(&specs, default_scheme()).is_err());
    }
}
