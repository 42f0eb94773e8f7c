//! Named color schemes.
//!
//! A column color may be given either as a literal terminal sequence
//! (`"\x1b[31m"`) or as a symbolic name (`"red"`). Symbolic names are
//! resolved through a [`ColorScheme`] when the color is assigned, so the
//! column only ever stores concrete sequences.
//!
//! Three kinds of scheme are available:
//!
//! - [`AnsiScheme`]: the built-in table of terminal color names, also
//!   reachable through [`default_scheme`].
//! - [`SchemeTable`]: a user table loaded from YAML, falling back to the
//!   built-in names.
//! - Any closure `Fn(&str) -> Option<String>`, handy for tests.
//!
//! # Built-in names
//!
//! | Name | Sequence |
//! |------|----------|
//! | `black`, `red`, `green`, `brown`, `blue`, `magenta`, `cyan`, `gray` | `ESC[30m` … `ESC[37m` |
//! | `darkgray`, `lightred`, `lightgreen`, `yellow`, `lightblue`, `lightmagenta`, `lightcyan`, `white` | `ESC[1;30m` … `ESC[1;37m` |
//! | `bold`, `halfbright`, `blink`, `reverse`, `reset` | `ESC[1m`, `ESC[2m`, `ESC[5m`, `ESC[7m`, `ESC[0m` |
//! | `bright_<color>` | `ESC[90m` … `ESC[97m` |
//! | `0` … `255` | `ESC[38;5;<n>m` |
//!
//! # YAML tables
//!
//! ```rust
//! use smartcols::scheme::{ColorScheme, SchemeTable};
//!
//! let table = SchemeTable::from_yaml(r#"
//! header: bold
//! error: "\e[1;31m"
//! "#).unwrap();
//!
//! assert_eq!(table.resolve("header").as_deref(), Some("\x1b[1m"));
//! assert_eq!(table.resolve("error").as_deref(), Some("\x1b[1;31m"));
//! // Built-in names still resolve.
//! assert_eq!(table.resolve("green").as_deref(), Some("\x1b[32m"));
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::SchemeError;

/// Resolves symbolic color names to concrete terminal sequences.
pub trait ColorScheme {
    /// Returns the sequence for `name`, or `None` when the name is unknown.
    fn resolve(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<F> ColorScheme for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, name: &str) -> Option<Cow<'_, str>> {
        self(name).map(Cow::Owned)
    }
}

/// Returns true when `s` would be treated as a scheme name rather than a
/// literal sequence.
pub fn is_scheme_name(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
}

const ANSI_NAMES: &[(&str, &str)] = &[
    ("black", "\x1b[30m"),
    ("blink", "\x1b[5m"),
    ("blue", "\x1b[34m"),
    ("bold", "\x1b[1m"),
    ("brown", "\x1b[33m"),
    ("cyan", "\x1b[36m"),
    ("darkgray", "\x1b[1;30m"),
    ("gray", "\x1b[37m"),
    ("green", "\x1b[32m"),
    ("halfbright", "\x1b[2m"),
    ("lightblue", "\x1b[1;34m"),
    ("lightcyan", "\x1b[1;36m"),
    ("lightgray", "\x1b[37m"),
    ("lightgreen", "\x1b[1;32m"),
    ("lightmagenta", "\x1b[1;35m"),
    ("lightred", "\x1b[1;31m"),
    ("magenta", "\x1b[35m"),
    ("red", "\x1b[31m"),
    ("reset", "\x1b[0m"),
    ("reverse", "\x1b[7m"),
    ("white", "\x1b[1;37m"),
    ("yellow", "\x1b[1;33m"),
];

const BRIGHT_NAMES: &[(&str, &str)] = &[
    ("black", "\x1b[90m"),
    ("red", "\x1b[91m"),
    ("green", "\x1b[92m"),
    ("yellow", "\x1b[93m"),
    ("blue", "\x1b[94m"),
    ("magenta", "\x1b[95m"),
    ("cyan", "\x1b[96m"),
    ("white", "\x1b[97m"),
];

/// The built-in terminal color names.
#[derive(Debug, Clone)]
pub struct AnsiScheme {
    names: HashMap<&'static str, &'static str>,
    bright: HashMap<&'static str, &'static str>,
}

impl Default for AnsiScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl AnsiScheme {
    /// Builds the built-in table.
    pub fn new() -> Self {
        AnsiScheme {
            names: ANSI_NAMES.iter().copied().collect(),
            bright: BRIGHT_NAMES.iter().copied().collect(),
        }
    }

    /// Iterates over the plain color names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        ANSI_NAMES.iter().map(|(name, _)| *name)
    }

    fn lookup(&self, name: &str) -> Option<Cow<'static, str>> {
        let lower = name.to_ascii_lowercase();

        if let Some(seq) = self.names.get(lower.as_str()) {
            return Some(Cow::Borrowed(*seq));
        }

        if let Some(base) = lower.strip_prefix("bright_") {
            return self.bright.get(base).map(|seq| Cow::Borrowed(*seq));
        }

        // 256-color palette index
        lower
            .parse::<u8>()
            .ok()
            .map(|index| Cow::Owned(format!("\x1b[38;5;{}m", index)))
    }
}

impl ColorScheme for AnsiScheme {
    fn resolve(&self, name: &str) -> Option<Cow<'_, str>> {
        self.lookup(name)
    }
}

static DEFAULT_SCHEME: Lazy<AnsiScheme> = Lazy::new(AnsiScheme::new);

/// Returns the process-wide built-in scheme.
pub fn default_scheme() -> &'static AnsiScheme {
    &DEFAULT_SCHEME
}

/// A user-defined scheme, typically loaded from a YAML file.
///
/// Each entry maps a name to either a literal sequence or another color
/// name. Names are resolved against the built-in scheme when the entry is
/// added, so lookups never chain. Names not in the table fall back to the
/// built-in scheme.
#[derive(Debug, Clone, Default)]
pub struct SchemeTable {
    entries: HashMap<String, String>,
}

impl SchemeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, resolving `value` if it is a name.
    ///
    /// Entry names are case-insensitive. Re-adding a name replaces it.
    pub fn insert(&mut self, name: &str, value: &str) -> Result<(), SchemeError> {
        if !is_scheme_name(name) {
            return Err(SchemeError::InvalidName(name.to_string()));
        }

        let resolved = if is_scheme_name(value) {
            default_scheme()
                .resolve(value)
                .ok_or_else(|| SchemeError::UnknownColor {
                    entry: name.to_string(),
                    value: value.to_string(),
                })?
                .into_owned()
        } else {
            value.to_string()
        };

        self.entries.insert(name.to_ascii_lowercase(), resolved);
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: &str, value: &str) -> Result<Self, SchemeError> {
        self.insert(name, value)?;
        Ok(self)
    }

    /// Parses a table from YAML: a flat mapping of names to values.
    ///
    /// YAML double-quoted strings accept `\e` for the escape character.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemeError> {
        Self::parse(yaml, None)
    }

    /// Loads a table from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SchemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, Some(path))
    }

    fn parse(yaml: &str, path: Option<&Path>) -> Result<Self, SchemeError> {
        let raw: BTreeMap<String, String> =
            serde_yaml::from_str(yaml).map_err(|e| SchemeError::Parse {
                path: path.map(Path::to_path_buf),
                message: e.to_string(),
            })?;

        let mut table = SchemeTable::new();
        for (name, value) in &raw {
            table.insert(name, value)?;
        }
        Ok(table)
    }

    /// Number of entries defined by the table itself.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table defines no entries of its own.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ColorScheme for SchemeTable {
    fn resolve(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.entries.get(&name.to_ascii_lowercase()) {
            Some(seq) => Some(Cow::Borrowed(seq.as_str())),
            None => default_scheme().resolve(name),
        }
    }
}
