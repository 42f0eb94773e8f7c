//! Column descriptors.
//!
//! A [`Column`] describes how one field of a table is labeled, colored,
//! sized and laid out. It carries a header [`Cell`], a resolved color, the
//! width measurements a layout engine fills in, a width hint and a set of
//! independent layout flags.
//!
//! Columns are shared through [`ColumnRef`], a reference-counted handle:
//! the table that lists a column and any caller holding on to it each own
//! one reference, and the last release tears the column down.
//!
//! # Example
//!
//! ```rust
//! use smartcols::ColumnRef;
//!
//! let cl = ColumnRef::new();
//! cl.set_name("SIZE");
//! cl.set_right(true);
//! cl.set_width_hint(0.25);
//! cl.set_color(Some("red")).unwrap();
//!
//! assert_eq!(cl.name().as_deref(), Some("SIZE"));
//! assert_eq!(cl.color().as_deref(), Some("\x1b[31m"));
//!
//! let copy = cl.duplicate().unwrap();
//! assert_eq!(copy.width_hint(), 0.25);
//! assert!(copy.is_right());
//! ```
//!
//! # Width hint
//!
//! The hint is advisory input for the layout engine: a value in `0.0..=1.0`
//! requests that fraction of the available width, a value above `1.0`
//! requests at least that many characters. Columns store it unchecked.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::cell::Cell;
use crate::error::{ColumnError, Result};
use crate::flags::ColumnFlags;
use crate::list::ListId;
use crate::scheme::{default_scheme, is_scheme_name, ColorScheme};
use crate::util::try_copy_str;

/// Display and layout configuration for one table field.
#[derive(Debug, Default)]
pub struct Column {
    /// Column title.
    header: Cell,
    /// Resolved default color for header and data cells.
    color: Option<String>,

    /// Final width, set by the layout engine.
    width: usize,
    /// Narrowest content seen.
    width_min: usize,
    /// Widest content seen.
    width_max: usize,
    /// Average content width.
    width_avg: usize,
    /// Fraction (`<= 1.0`) or absolute minimum (`> 1.0`) requested.
    width_hint: f64,

    /// The layout engine found this column's content unusually wide.
    is_extreme: bool,
    trunc: bool,
    tree: bool,
    right: bool,
    strict_width: bool,
    no_extremes: bool,

    /// The list this column is linked into, if any.
    link: Option<ListId>,
}

impl Column {
    /// Creates a detached column with an empty header and zeroed fields.
    pub fn new() -> Self {
        Column::default()
    }

    /// Creates an independent copy of this column.
    ///
    /// Color and header content are copied into fresh storage; widths,
    /// hint and flags are copied by value. The copy is never linked into a
    /// list. On allocation failure the partial copy is dropped and the
    /// error returned.
    pub fn try_duplicate(&self) -> Result<Column> {
        let mut ret = Column::new();

        if let Some(color) = self.color.as_deref() {
            ret.color = Some(try_copy_str(color)?);
        }
        ret.header.try_copy_content_from(&self.header)?;

        ret.width = self.width;
        ret.width_min = self.width_min;
        ret.width_max = self.width_max;
        ret.width_avg = self.width_avg;
        ret.width_hint = self.width_hint;
        ret.is_extreme = self.is_extreme;
        ret.trunc = self.trunc;
        ret.tree = self.tree;
        ret.right = self.right;
        ret.strict_width = self.strict_width;
        ret.no_extremes = self.no_extremes;

        Ok(ret)
    }

    // --- header ---

    /// The header cell.
    pub fn header(&self) -> &Cell {
        &self.header
    }

    /// The header cell, for setting header-specific text or color.
    pub fn header_mut(&mut self) -> &mut Cell {
        &mut self.header
    }

    /// Header text.
    pub fn name(&self) -> Option<&str> {
        self.header.data()
    }

    /// Sets the header text.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.header.set_data(name);
    }

    /// Display width of the header text.
    pub fn header_width(&self) -> usize {
        self.header.width()
    }

    // --- color ---

    /// The resolved default color, if any.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Sets the default color, resolving names through the built-in scheme.
    ///
    /// See [`set_color_with`](Self::set_color_with).
    pub fn set_color(&mut self, color: Option<&str>) -> Result<()> {
        self.set_color_with(color, default_scheme())
    }

    /// Sets or clears the default color.
    ///
    /// A color whose first character is alphanumeric is a scheme name and
    /// is resolved through `scheme`; anything else is stored as given.
    /// Unknown names yield [`ColumnError::InvalidArgument`], allocation
    /// failure yields [`ColumnError::OutOfMemory`]; in both cases the
    /// current color is kept.
    pub fn set_color_with(&mut self, color: Option<&str>, scheme: &dyn ColorScheme) -> Result<()> {
        self.color = resolve_color(color, scheme)?;
        Ok(())
    }

    // --- widths ---

    /// Final width computed by the layout engine.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sets the final width.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Narrowest content width.
    pub fn width_min(&self) -> usize {
        self.width_min
    }

    /// Sets the narrowest content width.
    pub fn set_width_min(&mut self, width: usize) {
        self.width_min = width;
    }

    /// Widest content width.
    pub fn width_max(&self) -> usize {
        self.width_max
    }

    /// Sets the widest content width.
    pub fn set_width_max(&mut self, width: usize) {
        self.width_max = width;
    }

    /// Average content width.
    pub fn width_avg(&self) -> usize {
        self.width_avg
    }

    /// Sets the average content width.
    pub fn set_width_avg(&mut self, width: usize) {
        self.width_avg = width;
    }

    /// The width hint.
    pub fn width_hint(&self) -> f64 {
        self.width_hint
    }

    /// Stores a width hint. No range check is made.
    pub fn set_width_hint(&mut self, hint: f64) {
        self.width_hint = hint;
    }

    // --- flags ---

    /// Content may be truncated.
    pub fn is_trunc(&self) -> bool {
        self.trunc
    }

    /// Enables or disables truncation.
    pub fn set_trunc(&mut self, enable: bool) {
        self.trunc = enable;
    }

    /// Rendered as a tree.
    pub fn is_tree(&self) -> bool {
        self.tree
    }

    /// Enables or disables tree rendering.
    pub fn set_tree(&mut self, enable: bool) {
        self.tree = enable;
    }

    /// Right-justified.
    pub fn is_right(&self) -> bool {
        self.right
    }

    /// Enables or disables right justification.
    pub fn set_right(&mut self, enable: bool) {
        self.right = enable;
    }

    /// The width hint is a hard constraint.
    pub fn is_strict_width(&self) -> bool {
        self.strict_width
    }

    /// Enables or disables strict width.
    pub fn set_strict_width(&mut self, enable: bool) {
        self.strict_width = enable;
    }

    /// Excluded from extreme-value detection.
    pub fn is_no_extremes(&self) -> bool {
        self.no_extremes
    }

    /// Includes or excludes the column from extreme-value detection.
    pub fn set_no_extremes(&mut self, enable: bool) {
        self.no_extremes = enable;
    }

    /// Marked by the layout engine as holding an extreme width.
    pub fn is_extreme(&self) -> bool {
        self.is_extreme
    }

    /// Marks or unmarks the column as extreme.
    pub fn set_extreme(&mut self, extreme: bool) {
        self.is_extreme = extreme;
    }

    /// The five layout flags as a bitmask. `is_extreme` is not included.
    pub fn flags(&self) -> ColumnFlags {
        let mut flags = ColumnFlags::empty();
        flags.set(ColumnFlags::TRUNC, self.trunc);
        flags.set(ColumnFlags::TREE, self.tree);
        flags.set(ColumnFlags::RIGHT, self.right);
        flags.set(ColumnFlags::STRICT_WIDTH, self.strict_width);
        flags.set(ColumnFlags::NOEXTREMES, self.no_extremes);
        flags
    }

    /// Assigns all five layout flags from a bitmask.
    pub fn set_flags(&mut self, flags: ColumnFlags) {
        self.trunc = flags.contains(ColumnFlags::TRUNC);
        self.tree = flags.contains(ColumnFlags::TREE);
        self.right = flags.contains(ColumnFlags::RIGHT);
        self.strict_width = flags.contains(ColumnFlags::STRICT_WIDTH);
        self.no_extremes = flags.contains(ColumnFlags::NOEXTREMES);
    }

    // --- list membership ---

    /// Whether the column is linked into a [`ColumnList`](crate::ColumnList).
    pub fn is_linked(&self) -> bool {
        self.link.is_some()
    }

    pub(crate) fn link(&self) -> Option<ListId> {
        self.link
    }

    pub(crate) fn set_link(&mut self, link: Option<ListId>) {
        self.link = link;
    }

    /// Releases owned content; runs once, when the last reference goes.
    fn teardown(&mut self) {
        self.link = None;
        self.header.reset();
        self.color = None;
    }
}

/// Turns a color argument into the string a column stores.
///
/// Names are looked up in `scheme`, literals are copied as given. Nothing
/// is borrowed from a column, so the scheme may freely read other columns.
fn resolve_color(color: Option<&str>, scheme: &dyn ColorScheme) -> Result<Option<String>> {
    match color {
        None => Ok(None),
        Some(name) if is_scheme_name(name) => {
            let seq = scheme.resolve(name).ok_or_else(|| {
                ColumnError::InvalidArgument(format!("unknown color name '{}'", name))
            })?;
            Ok(Some(try_copy_str(&seq)?))
        }
        Some(literal) => Ok(Some(try_copy_str(literal)?)),
    }
}

/// Shared handle to a [`Column`].
///
/// Cloning the handle (or calling [`retain`](Self::retain)) adds a
/// reference; dropping it (or calling [`release`](Self::release)) removes
/// one. The count is not atomic, so handles stay on one thread.
#[derive(Clone, Default)]
pub struct ColumnRef(Rc<RefCell<Column>>);

/// Non-owning handle to a [`Column`], used to observe teardown.
#[derive(Clone)]
pub struct WeakColumnRef(Weak<RefCell<Column>>);

impl WeakColumnRef {
    /// Returns an owning handle if the column is still alive.
    pub fn upgrade(&self) -> Option<ColumnRef> {
        self.0.upgrade().map(ColumnRef)
    }
}

impl fmt::Debug for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(col) => f
                .debug_struct("ColumnRef")
                .field("refcount", &self.refcount())
                .field("column", &*col)
                .finish(),
            Err(_) => f.write_str("ColumnRef(<borrowed>)"),
        }
    }
}

impl From<Column> for ColumnRef {
    fn from(column: Column) -> Self {
        ColumnRef(Rc::new(RefCell::new(column)))
    }
}

impl ColumnRef {
    /// Creates a new column with a reference count of one.
    pub fn new() -> Self {
        Column::new().into()
    }

    /// Adds a reference and returns it.
    pub fn retain(&self) -> ColumnRef {
        self.clone()
    }

    /// Gives up this reference.
    ///
    /// Returns `true` when it was the last one: the column has then been
    /// unlinked and its header and color released.
    pub fn release(self) -> bool {
        match Rc::try_unwrap(self.0) {
            Ok(cell) => {
                cell.into_inner().teardown();
                true
            }
            Err(_) => false,
        }
    }

    /// Number of live references.
    pub fn refcount(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// A weak handle that does not keep the column alive.
    pub fn downgrade(&self) -> WeakColumnRef {
        WeakColumnRef(Rc::downgrade(&self.0))
    }

    /// Whether both handles refer to the same column.
    pub fn ptr_eq(&self, other: &ColumnRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Borrows the column.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, Column> {
        self.0.borrow()
    }

    /// Mutably borrows the column.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, Column> {
        self.0.borrow_mut()
    }

    /// Duplicates the column into a new, unlinked handle with one reference.
    pub fn duplicate(&self) -> Result<ColumnRef> {
        self.borrow().try_duplicate().map(ColumnRef::from)
    }

    /// The header cell.
    pub fn header(&self) -> Ref<'_, Cell> {
        Ref::map(self.borrow(), Column::header)
    }

    /// The header cell, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn header_mut(&self) -> RefMut<'_, Cell> {
        RefMut::map(self.borrow_mut(), Column::header_mut)
    }

    /// Header text.
    pub fn name(&self) -> Option<String> {
        self.borrow().name().map(str::to_string)
    }

    /// Sets the header text.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn set_name(&self, name: impl Into<String>) {
        self.borrow_mut().set_name(name);
    }

    /// The resolved default color.
    pub fn color(&self) -> Option<String> {
        self.borrow().color().map(str::to_string)
    }

    /// Sets the default color using the built-in scheme.
    pub fn set_color(&self, color: Option<&str>) -> Result<()> {
        self.set_color_with(color, default_scheme())
    }

    /// Sets the default color using `scheme` for names.
    ///
    /// The name is resolved before the column is borrowed, so `scheme` may
    /// read this column through any handle. If the column is borrowed when
    /// the new color is stored, [`ColumnError::InvalidArgument`] is
    /// returned and the color is unchanged.
    pub fn set_color_with(&self, color: Option<&str>, scheme: &dyn ColorScheme) -> Result<()> {
        let resolved = resolve_color(color, scheme)?;
        let mut col = self.0.try_borrow_mut().map_err(|_| {
            ColumnError::InvalidArgument("column is borrowed elsewhere".to_string())
        })?;
        col.color = resolved;
        Ok(())
    }

    /// Final width.
    pub fn width(&self) -> usize {
        self.borrow().width()
    }

    /// Sets the final width.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn set_width(&self, width: usize) {
        self.borrow_mut().set_width(width);
    }

    /// Narrowest content width.
    pub fn width_min(&self) -> usize {
        self.borrow().width_min()
    }

    /// Sets the narrowest content width.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn set_width_min(&self, width: usize) {
        self.borrow_mut().set_width_min(width);
    }

    /// Widest content width.
    pub fn width_max(&self) -> usize {
        self.borrow().width_max()
    }

    /// Sets the widest content width.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn set_width_max(&self, width: usize) {
        self.borrow_mut().set_width_max(width);
    }

    /// Average content width.
    pub fn width_avg(&self) -> usize {
        self.borrow().width_avg()
    }

    /// Sets the average content width.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn set_width_avg(&self, width: usize) {
        self.borrow_mut().set_width_avg(width);
    }

    /// The width hint.
    pub fn width_hint(&self) -> f64 {
        self.borrow().width_hint()
    }

    /// Stores a width hint.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn set_width_hint(&self, hint: f64) {
        self.borrow_mut().set_width_hint(hint);
    }

    /// Content may be truncated.
    pub fn is_trunc(&self) -> bool {
        self.borrow().is_trunc()
    }

    /// Enables or disables truncation.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn set_trunc(&self, enable: bool) {
        self.borrow_mut().set_trunc(enable);
    }

    /// Rendered as a tree.
    pub fn is_tree(&self) -> bool {
        self.borrow().is_tree()
    }

    /// Enables or disables tree rendering.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn set_tree(&self, enable: bool) {
        self.borrow_mut().set_tree(enable);
    }

    /// Right-justified.
    pub fn is_right(&self) -> bool {
        self.borrow().is_right()
    }

    /// Enables or disables right justification.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn set_right(&self, enable: bool) {
        self.borrow_mut().set_right(enable);
    }

    /// The width hint is a hard constraint.
    pub fn is_strict_width(&self) -> bool {
        self.borrow().is_strict_width()
    }

    /// Enables or disables strict width.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn set_strict_width(&self, enable: bool) {
        self.borrow_mut().set_strict_width(enable);
    }

    /// Excluded from extreme-value detection.
    pub fn is_no_extremes(&self) -> bool {
        self.borrow().is_no_extremes()
    }

    /// Includes or excludes the column from extreme-value detection.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn set_no_extremes(&self, enable: bool) {
        self.borrow_mut().set_no_extremes(enable);
    }

    /// Marked by the layout engine as holding an extreme width.
    pub fn is_extreme(&self) -> bool {
        self.borrow().is_extreme()
    }

    /// Marks or unmarks the column as extreme.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn set_extreme(&self, extreme: bool) {
        self.borrow_mut().set_extreme(extreme);
    }

    /// The five layout flags as a bitmask.
    pub fn flags(&self) -> ColumnFlags {
        self.borrow().flags()
    }

    /// Assigns all five layout flags from a bitmask.
    ///
    /// # Panics
    ///
    /// Panics if the column is currently borrowed.
    pub fn set_flags(&self, flags: ColumnFlags) {
        self.borrow_mut().set_flags(flags);
    }

    /// Whether the column is linked into a list.
    pub fn is_linked(&self) -> bool {
        self.borrow().is_linked()
    }
}
