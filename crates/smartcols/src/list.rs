//! Ordered column collections.
//!
//! A table keeps its columns in insertion order. [`ColumnList`] is that
//! collection: it holds one reference to each column it contains and
//! records the membership on the column itself, so a column can report
//! whether it is linked and can sit in at most one list at a time.
//!
//! ```rust
//! use smartcols::{ColumnList, ColumnRef};
//!
//! let mut list = ColumnList::new();
//! let name = ColumnRef::new();
//! name.set_name("NAME");
//! list.push(&name).unwrap();
//!
//! assert!(name.is_linked());
//! assert_eq!(name.refcount(), 2);
//!
//! list.remove(&name);
//! assert!(!name.is_linked());
//! assert_eq!(name.refcount(), 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use crate::column::ColumnRef;
use crate::error::{ColumnError, Result};

/// Identity of a [`ColumnList`], recorded on linked columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListId(u64);

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

impl ListId {
    pub(crate) fn next() -> Self {
        ListId(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Insertion-ordered collection of shared columns.
#[derive(Debug)]
pub struct ColumnList {
    id: ListId,
    columns: Vec<ColumnRef>,
}

impl Default for ColumnList {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnList {
    /// Creates an empty list.
    pub fn new() -> Self {
        ColumnList {
            id: ListId::next(),
            columns: Vec::new(),
        }
    }

    /// This list's identity.
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Appends a column, taking a reference to it.
    ///
    /// Fails with [`ColumnError::InvalidArgument`] if the column is
    /// already linked into a list (this one or another).
    pub fn push(&mut self, column: &ColumnRef) -> Result<()> {
        let index = self.columns.len();
        self.insert(index, column)
    }

    /// Inserts a column at `index`, taking a reference to it.
    ///
    /// Fails if the column is already linked or `index > len()`.
    pub fn insert(&mut self, index: usize, column: &ColumnRef) -> Result<()> {
        if index > self.columns.len() {
            return Err(ColumnError::InvalidArgument(format!(
                "insert position {} out of range (len {})",
                index,
                self.columns.len()
            )));
        }

        {
            let mut col = column.borrow_mut();
            if col.is_linked() {
                return Err(ColumnError::InvalidArgument(
                    "column is already linked into a list".to_string(),
                ));
            }
            col.set_link(Some(self.id));
        }

        self.columns.insert(index, column.retain());
        Ok(())
    }

    /// Removes a column, detaching it and dropping the list's reference.
    ///
    /// Returns `false` if the column was not in this list.
    pub fn remove(&mut self, column: &ColumnRef) -> bool {
        match self.position(column) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the column at `index`, detached.
    ///
    /// The returned handle is the list's former reference; dropping it
    /// releases that reference.
    pub fn remove_at(&mut self, index: usize) -> Option<ColumnRef> {
        if index >= self.columns.len() {
            return None;
        }
        let column = self.columns.remove(index);
        column.borrow_mut().set_link(None);
        Some(column)
    }

    /// Detaches and releases every column.
    pub fn clear(&mut self) {
        for column in self.columns.drain(..) {
            column.borrow_mut().set_link(None);
        }
    }

    /// Index of `column` in this list.
    pub fn position(&self, column: &ColumnRef) -> Option<usize> {
        if column.borrow().link() != Some(self.id) {
            return None;
        }
        self.columns.iter().position(|c| c.ptr_eq(column))
    }

    /// Whether `column` is in this list.
    pub fn contains(&self, column: &ColumnRef) -> bool {
        self.position(column).is_some()
    }

    /// The column at `index`.
    pub fn get(&self, index: usize) -> Option<&ColumnRef> {
        self.columns.get(index)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates over the columns in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnRef> {
        self.columns.iter()
    }
}

impl Drop for ColumnList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a> IntoIterator for &'a ColumnList {
    type Item = &'a ColumnRef;
    type IntoIter = std::slice::Iter<'a, ColumnRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
