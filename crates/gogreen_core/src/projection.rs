//! Capped prefix view over an observable source collection.
//!
//! # Responsibility
//! - Keep a derived collection equal to the first `capacity` elements of a
//!   source collection.
//! - Repair the derived collection incrementally from one change event at a
//!   time; only `Reset` rebuilds it.
//!
//! # Invariants
//! - After `apply` returns `Ok`, `derived == source[..min(capacity, len)]`.
//! - `derived.len() <= capacity` at every observable point.
//! - Each event triggers at most one drop-last and at most one backfill.
//!
//! # See also
//! - `crate::collection::CollectionChange`

use crate::collection::{CollectionChange, CollectionError, ObservableVec};
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Capacity of group top-item views.
pub const DEFAULT_TOP_ITEMS_CAPACITY: usize = 12;

pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Projection failures. Everything except `ZeroCapacity` is a broken
/// contract on the event emitter side and is not recoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    ZeroCapacity,
    /// Event indices do not fit the post-edit source length.
    EventOutOfRange {
        change: CollectionChange,
        source_len: usize,
    },
    /// Derived view edit failed; the view no longer mirrors the source.
    Derived(CollectionError),
}

impl Display for ProjectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "projection capacity must be at least 1"),
            Self::EventOutOfRange { change, source_len } => write!(
                f,
                "{} event {change:?} does not fit source length {source_len}",
                change.action()
            ),
            Self::Derived(err) => write!(f, "derived view out of sync: {err}"),
        }
    }
}

impl Error for ProjectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Derived(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CollectionError> for ProjectionError {
    fn from(value: CollectionError) -> Self {
        Self::Derived(value)
    }
}

/// Bounded prefix projector.
#[derive(Debug, Clone)]
pub struct BoundedPrefix<T> {
    capacity: usize,
    derived: ObservableVec<T>,
}

impl<T: Clone> BoundedPrefix<T> {
    /// Creates a projector whose view starts as `prefix(source, capacity)`.
    pub fn new(capacity: usize, source: &[T]) -> ProjectionResult<Self> {
        if capacity == 0 {
            return Err(ProjectionError::ZeroCapacity);
        }
        let derived = source.iter().take(capacity).cloned().collect();
        Ok(Self { capacity, derived })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read-only derived view.
    pub fn view(&self) -> &ObservableVec<T> {
        &self.derived
    }

    /// Applies one source event. `source` must already reflect the edit.
    ///
    /// Returns the edits performed on the derived view, in order, so that
    /// observers of the view can replay them.
    pub fn apply(
        &mut self,
        source: &[T],
        change: CollectionChange,
    ) -> ProjectionResult<Vec<CollectionChange>> {
        if let Err(err) = check_event(source.len(), change) {
            error!(
                "event=projection_contract module=projection status=error action={} source_len={} derived_len={}",
                change.action(),
                source.len(),
                self.derived.len()
            );
            return Err(err);
        }

        let result = self.repair(source, change);
        if let Err(err) = &result {
            error!(
                "event=projection_contract module=projection status=error action={} source_len={} derived_len={} error={}",
                change.action(),
                source.len(),
                self.derived.len(),
                err
            );
        }
        result
    }

    /// Returns whether the view equals the source prefix under `eq`.
    pub fn matches_prefix_by<F>(&self, source: &[T], eq: F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        let expected = &source[..source.len().min(self.capacity)];
        expected.len() == self.derived.len()
            && expected
                .iter()
                .zip(self.derived.iter())
                .all(|(left, right)| eq(left, right))
    }

    fn repair(
        &mut self,
        source: &[T],
        change: CollectionChange,
    ) -> ProjectionResult<Vec<CollectionChange>> {
        let k = self.capacity;
        let mut edits = Vec::new();

        match change {
            CollectionChange::Insert { index } => {
                if index < k {
                    edits.push(self.derived.insert(index, source[index].clone())?);
                    self.drop_overflow(&mut edits)?;
                }
            }
            CollectionChange::Remove { index } => {
                if index < k {
                    edits.push(self.derived.remove(index)?.1);
                    self.backfill(source, &mut edits);
                }
            }
            CollectionChange::Move { from, to } => match (from < k, to < k) {
                (true, true) => edits.push(self.derived.move_item(from, to)?),
                (true, false) => {
                    edits.push(self.derived.remove(from)?.1);
                    self.backfill(source, &mut edits);
                }
                (false, true) => {
                    edits.push(self.derived.insert(to, source[to].clone())?);
                    self.drop_overflow(&mut edits)?;
                }
                (false, false) => {}
            },
            CollectionChange::Replace { index } => {
                if index < k {
                    edits.push(self.derived.replace(index, source[index].clone())?.1);
                }
            }
            CollectionChange::Reset => {
                edits.push(self.derived.reset(source.iter().take(k).cloned()));
                debug!(
                    "event=projection_reset module=projection status=ok source_len={} derived_len={}",
                    source.len(),
                    self.derived.len()
                );
            }
        }

        Ok(edits)
    }

    fn drop_overflow(&mut self, edits: &mut Vec<CollectionChange>) -> ProjectionResult<()> {
        if self.derived.len() > self.capacity {
            let last = self.derived.len() - 1;
            edits.push(self.derived.remove(last)?.1);
        }
        Ok(())
    }

    fn backfill(&mut self, source: &[T], edits: &mut Vec<CollectionChange>) {
        if source.len() >= self.capacity {
            edits.push(self.derived.push(source[self.capacity - 1].clone()));
        }
    }
}

fn check_event(source_len: usize, change: CollectionChange) -> ProjectionResult<()> {
    let fits = match change {
        CollectionChange::Insert { index } | CollectionChange::Replace { index } => {
            index < source_len
        }
        // Removed index was valid against the pre-edit length.
        CollectionChange::Remove { index } => index <= source_len,
        CollectionChange::Move { from, to } => from < source_len && to < source_len,
        CollectionChange::Reset => true,
    };
    if fits {
        Ok(())
    } else {
        Err(ProjectionError::EventOutOfRange { change, source_len })
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundedPrefix, ProjectionError};
    use crate::collection::{CollectionChange, ObservableVec};

    fn source(values: &[&'static str]) -> ObservableVec<&'static str> {
        values.iter().copied().collect()
    }

    fn view(projector: &BoundedPrefix<&'static str>) -> Vec<&'static str> {
        projector.view().iter().copied().collect()
    }

    #[test]
    fn rejects_zero_capacity() {
        let err = BoundedPrefix::<u8>::new(0, &[]).expect_err("zero capacity must fail");
        assert_eq!(err, ProjectionError::ZeroCapacity);
    }

    #[test]
    fn inserts_past_capacity_are_ignored() {
        let mut items = source(&[]);
        let mut top = BoundedPrefix::new(3, items.as_slice()).unwrap();
        for (index, value) in ["a", "b", "c", "d"].into_iter().enumerate() {
            let change = items.insert(index, value).unwrap();
            top.apply(items.as_slice(), change).unwrap();
        }
        assert_eq!(view(&top), vec!["a", "b", "c"]);
    }

    #[test]
    fn insert_inside_window_drops_last() {
        let mut items = source(&["a", "b", "c"]);
        let mut top = BoundedPrefix::new(3, items.as_slice()).unwrap();
        let change = items.insert(1, "x").unwrap();
        let edits = top.apply(items.as_slice(), change).unwrap();
        assert_eq!(view(&top), vec!["a", "x", "b"]);
        assert_eq!(
            edits,
            vec![
                CollectionChange::Insert { index: 1 },
                CollectionChange::Remove { index: 3 }
            ]
        );
    }

    #[test]
    fn remove_inside_window_backfills_from_source() {
        let mut items = source(&["a", "b", "c", "d"]);
        let mut top = BoundedPrefix::new(3, items.as_slice()).unwrap();
        let (_, change) = items.remove(0).unwrap();
        top.apply(items.as_slice(), change).unwrap();
        assert_eq!(view(&top), vec!["b", "c", "d"]);
    }

    #[test]
    fn remove_from_short_source_does_not_backfill() {
        let mut items = source(&["a", "b"]);
        let mut top = BoundedPrefix::new(3, items.as_slice()).unwrap();
        let (_, change) = items.remove(1).unwrap();
        let edits = top.apply(items.as_slice(), change).unwrap();
        assert_eq!(view(&top), vec!["a"]);
        assert_eq!(edits.len(), 1);
    }

    #[test]
    fn move_into_window_evicts_last() {
        let mut items = source(&["a", "b", "c", "d"]);
        let mut top = BoundedPrefix::new(3, items.as_slice()).unwrap();
        let change = items.move_item(3, 0).unwrap();
        top.apply(items.as_slice(), change).unwrap();
        assert_eq!(view(&top), vec!["d", "a", "b"]);
    }

    #[test]
    fn move_out_of_window_backfills() {
        let mut items = source(&["a", "b", "c", "d", "e"]);
        let mut top = BoundedPrefix::new(3, items.as_slice()).unwrap();
        let change = items.move_item(0, 4).unwrap();
        top.apply(items.as_slice(), change).unwrap();
        assert_eq!(view(&top), vec!["b", "c", "d"]);
    }

    #[test]
    fn move_outside_window_is_noop() {
        let mut items = source(&["a", "b", "c", "d", "e"]);
        let mut top = BoundedPrefix::new(3, items.as_slice()).unwrap();
        let change = items.move_item(4, 3).unwrap();
        let edits = top.apply(items.as_slice(), change).unwrap();
        assert!(edits.is_empty());
        assert_eq!(view(&top), vec!["a", "b", "c"]);
    }

    #[test]
    fn replace_outside_window_is_noop() {
        let mut items = source(&["a", "b", "c", "d"]);
        let mut top = BoundedPrefix::new(3, items.as_slice()).unwrap();
        let (_, change) = items.replace(3, "z").unwrap();
        assert!(top.apply(items.as_slice(), change).unwrap().is_empty());

        let (_, change) = items.replace(2, "y").unwrap();
        top.apply(items.as_slice(), change).unwrap();
        assert_eq!(view(&top), vec!["a", "b", "y"]);
    }

    #[test]
    fn out_of_range_event_is_a_contract_error() {
        let items = source(&["a"]);
        let mut top = BoundedPrefix::new(3, items.as_slice()).unwrap();
        let err = top
            .apply(items.as_slice(), CollectionChange::Insert { index: 4 })
            .expect_err("index beyond source must fail");
        assert_eq!(
            err,
            ProjectionError::EventOutOfRange {
                change: CollectionChange::Insert { index: 4 },
                source_len: 1
            }
        );
        assert_eq!(view(&top), vec!["a"]);
    }

    #[test]
    fn out_of_range_remove_move_and_replace_are_contract_errors() {
        let items = source(&["a", "b"]);
        let mut top = BoundedPrefix::new(3, items.as_slice()).unwrap();
        let malformed = [
            CollectionChange::Remove { index: 3 },
            CollectionChange::Move { from: 2, to: 0 },
            CollectionChange::Move { from: 0, to: 2 },
            CollectionChange::Replace { index: 2 },
        ];

        for change in malformed {
            let err = top
                .apply(items.as_slice(), change)
                .expect_err("malformed event must fail");
            assert_eq!(
                err,
                ProjectionError::EventOutOfRange {
                    change,
                    source_len: 2
                }
            );
        }
        assert_eq!(view(&top), vec!["a", "b"]);
    }

    #[test]
    fn event_inconsistent_with_view_surfaces_derived_error() {
        let items = source(&["a", "b"]);
        let mut top = BoundedPrefix::new(3, &["a"]).unwrap();
        let err = top
            .apply(items.as_slice(), CollectionChange::Replace { index: 1 })
            .expect_err("view is missing index 1");
        assert!(matches!(err, ProjectionError::Derived(_)));
        assert!(!top.matches_prefix_by(items.as_slice(), |l, r| l == r));
    }
}
