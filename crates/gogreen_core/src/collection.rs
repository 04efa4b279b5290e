//! Ordered collection that reports every mutation as a change event.
//!
//! # Responsibility
//! - Hold an ordered sequence bound to UI list controls.
//! - Describe each edit with a `CollectionChange` so derived views can
//!   repeat the same edit without re-scanning the sequence.
//!
//! # Invariants
//! - Every successful mutation returns exactly one change event.
//! - Failed mutations (out-of-range index) leave the sequence untouched.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CollectionResult<T> = Result<T, CollectionError>;

/// Structured description of one edit on an ordered collection.
///
/// Indices refer to positions in the collection at the time of the edit:
/// `Insert`/`Replace` use post-edit positions, `Remove` the pre-edit one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CollectionChange {
    Insert { index: usize },
    Remove { index: usize },
    /// List move: remove at `from`, then insert at `to`.
    Move { from: usize, to: usize },
    Replace { index: usize },
    /// Whole contents replaced or cleared.
    Reset,
}

impl CollectionChange {
    /// Stable action name used in log events.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "insert",
            Self::Remove { .. } => "remove",
            Self::Move { .. } => "move",
            Self::Replace { .. } => "replace",
            Self::Reset => "reset",
        }
    }
}

/// Rejected collection edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    IndexOutOfRange {
        op: &'static str,
        index: usize,
        len: usize,
    },
}

impl Display for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { op, index, len } => {
                write!(f, "{op} index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for CollectionError {}

/// Vector wrapper whose mutators return the change they performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableVec<T> {
    items: Vec<T>,
}

impl<T> Default for ObservableVec<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ObservableVec<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Inserts `value` at `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> CollectionResult<CollectionChange> {
        if index > self.items.len() {
            return Err(self.out_of_range("insert", index));
        }
        self.items.insert(index, value);
        Ok(CollectionChange::Insert { index })
    }

    /// Appends `value` at the end.
    pub fn push(&mut self, value: T) -> CollectionChange {
        self.items.push(value);
        CollectionChange::Insert {
            index: self.items.len() - 1,
        }
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> CollectionResult<(T, CollectionChange)> {
        if index >= self.items.len() {
            return Err(self.out_of_range("remove", index));
        }
        let value = self.items.remove(index);
        Ok((value, CollectionChange::Remove { index }))
    }

    /// Moves the element at `from` so it ends up at `to`.
    ///
    /// Both indices must address existing elements. `from == to` still
    /// reports a move, like a list control would.
    pub fn move_item(&mut self, from: usize, to: usize) -> CollectionResult<CollectionChange> {
        let len = self.items.len();
        if from >= len {
            return Err(self.out_of_range("move", from));
        }
        if to >= len {
            return Err(self.out_of_range("move", to));
        }
        let value = self.items.remove(from);
        self.items.insert(to, value);
        Ok(CollectionChange::Move { from, to })
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn replace(&mut self, index: usize, value: T) -> CollectionResult<(T, CollectionChange)> {
        match self.items.get_mut(index) {
            Some(slot) => {
                let old = std::mem::replace(slot, value);
                Ok((old, CollectionChange::Replace { index }))
            }
            None => Err(self.out_of_range("replace", index)),
        }
    }

    /// Replaces the whole contents.
    pub fn reset<I>(&mut self, values: I) -> CollectionChange
    where
        I: IntoIterator<Item = T>,
    {
        self.items.clear();
        self.items.extend(values);
        CollectionChange::Reset
    }

    pub fn clear(&mut self) -> CollectionChange {
        self.items.clear();
        CollectionChange::Reset
    }

    fn out_of_range(&self, op: &'static str, index: usize) -> CollectionError {
        CollectionError::IndexOutOfRange {
            op,
            index,
            len: self.items.len(),
        }
    }
}

impl<T> From<Vec<T>> for ObservableVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for ObservableVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ObservableVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
