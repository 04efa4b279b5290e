//! Group record owning a full item list and its capped top-items view.
//!
//! # Responsibility
//! - Be the only mutation path for a group's items.
//! - Feed every item edit to the top-items projector in the same call.
//!
//! # Invariants
//! - `top_items` equals the first `capacity` entries of `items` (by identity)
//!   whenever control returns to the caller.
//! - Clients never edit `top_items` directly.

use crate::collection::{CollectionChange, CollectionError, ObservableVec};
use crate::model::entry::{Entry, EntryCommon, NewEntry, SharedEntry};
use crate::projection::{BoundedPrefix, ProjectionError};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type GroupResult<T> = Result<T, GroupError>;

/// Errors from group item operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// Requested item edit does not fit the item list.
    Items(CollectionError),
    /// Top-items view could not follow the edit.
    Projection(ProjectionError),
}

impl Display for GroupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Items(err) => write!(f, "group item edit rejected: {err}"),
            Self::Projection(err) => write!(f, "group top items broken: {err}"),
        }
    }
}

impl Error for GroupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Items(err) => Some(err),
            Self::Projection(err) => Some(err),
        }
    }
}

impl From<CollectionError> for GroupError {
    fn from(value: CollectionError) -> Self {
        Self::Items(value)
    }
}

impl From<ProjectionError> for GroupError {
    fn from(value: ProjectionError) -> Self {
        Self::Projection(value)
    }
}

/// Construction input for one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub image_path: Option<String>,
    pub description: String,
}

impl NewGroup {
    pub fn new(unique_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            title: title.into(),
            subtitle: String::new(),
            image_path: None,
            description: String::new(),
        }
    }
}

/// Result of one item edit: the edit on `items` and the follow-up edits on
/// `top_items`, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupUpdate {
    pub items: CollectionChange,
    pub top_items: Vec<CollectionChange>,
}

#[derive(Debug)]
pub struct Group {
    common: EntryCommon,
    items: ObservableVec<SharedEntry>,
    top_items: BoundedPrefix<SharedEntry>,
}

impl Group {
    /// Creates an empty group whose top-items view holds `capacity` entries.
    pub fn new(input: NewGroup, capacity: usize) -> GroupResult<Self> {
        let items = ObservableVec::new();
        let top_items = BoundedPrefix::new(capacity, items.as_slice())?;
        Ok(Self {
            common: EntryCommon::new(
                input.unique_id,
                input.title,
                input.subtitle,
                input.image_path.as_deref(),
                input.description,
            ),
            items,
            top_items,
        })
    }

    pub fn common(&self) -> &EntryCommon {
        &self.common
    }

    pub fn common_mut(&mut self) -> &mut EntryCommon {
        &mut self.common
    }

    pub fn unique_id(&self) -> &str {
        self.common.unique_id()
    }

    pub fn title(&self) -> &str {
        self.common.title()
    }

    /// Full ordered item list.
    pub fn items(&self) -> &ObservableVec<SharedEntry> {
        &self.items
    }

    /// Capped prefix of `items`.
    pub fn top_items(&self) -> &ObservableVec<SharedEntry> {
        self.top_items.view()
    }

    pub fn capacity(&self) -> usize {
        self.top_items.capacity()
    }

    /// Builds an entry owned by this group and appends it.
    pub fn push_new(&mut self, input: NewEntry) -> GroupResult<SharedEntry> {
        let mut entry = Entry::new(input);
        entry.set_group_id(Some(self.unique_id().to_string()));
        entry.take_changes();
        let shared = Rc::new(RefCell::new(entry));
        self.push_item(Rc::clone(&shared))?;
        Ok(shared)
    }

    pub fn push_item(&mut self, entry: SharedEntry) -> GroupResult<GroupUpdate> {
        let change = self.items.push(entry);
        self.project(change)
    }

    pub fn insert_item(&mut self, index: usize, entry: SharedEntry) -> GroupResult<GroupUpdate> {
        let change = self.items.insert(index, entry)?;
        self.project(change)
    }

    /// Removes the item at `index`, returning it with the applied edits.
    pub fn remove_item(&mut self, index: usize) -> GroupResult<(SharedEntry, GroupUpdate)> {
        let (removed, change) = self.items.remove(index)?;
        let update = self.project(change)?;
        Ok((removed, update))
    }

    pub fn move_item(&mut self, from: usize, to: usize) -> GroupResult<GroupUpdate> {
        let change = self.items.move_item(from, to)?;
        self.project(change)
    }

    /// Replaces the item at `index`, returning the previous one.
    pub fn replace_item(
        &mut self,
        index: usize,
        entry: SharedEntry,
    ) -> GroupResult<(SharedEntry, GroupUpdate)> {
        let (old, change) = self.items.replace(index, entry)?;
        let update = self.project(change)?;
        Ok((old, update))
    }

    pub fn reset_items<I>(&mut self, entries: I) -> GroupResult<GroupUpdate>
    where
        I: IntoIterator<Item = SharedEntry>,
    {
        let change = self.items.reset(entries);
        self.project(change)
    }

    pub fn clear_items(&mut self) -> GroupResult<GroupUpdate> {
        let change = self.items.clear();
        self.project(change)
    }

    /// Returns whether `top_items` mirrors the prefix of `items` by identity.
    pub fn top_items_consistent(&self) -> bool {
        self.top_items
            .matches_prefix_by(self.items.as_slice(), Rc::ptr_eq)
    }

    fn project(&mut self, change: CollectionChange) -> GroupResult<GroupUpdate> {
        let top_items = self.top_items.apply(self.items.as_slice(), change)?;
        Ok(GroupUpdate {
            items: change,
            top_items,
        })
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.common.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::{Group, GroupError, NewGroup};
    use crate::collection::{CollectionChange, CollectionError};
    use crate::model::entry::{Entry, NewEntry, SharedEntry};
    use crate::projection::ProjectionError;

    fn entry(id: &str) -> SharedEntry {
        Entry::shared(NewEntry::new(id, id))
    }

    fn top_ids(group: &Group) -> Vec<String> {
        group
            .top_items()
            .iter()
            .map(|entry| entry.borrow().unique_id().to_string())
            .collect()
    }

    #[test]
    fn new_group_rejects_zero_capacity() {
        let err = Group::new(NewGroup::new("Group-1", "Ways"), 0).expect_err("zero capacity");
        assert_eq!(err, GroupError::Projection(ProjectionError::ZeroCapacity));
    }

    #[test]
    fn push_new_assigns_owner_without_pending_notifications() {
        let mut group = Group::new(NewGroup::new("Group-1", "Ways"), 12).unwrap();
        let item = group
            .push_new(NewEntry::new("Big-Group-1-Item1", "Save energy"))
            .unwrap();
        assert_eq!(item.borrow().group_id(), Some("Group-1"));
        assert!(item.borrow().common().pending_changes().is_empty());
        assert_eq!(group.items().len(), 1);
        assert!(group.top_items_consistent());
    }

    #[test]
    fn update_reports_item_and_top_item_edits() {
        let mut group = Group::new(NewGroup::new("g", "g"), 2).unwrap();
        group.push_item(entry("a")).unwrap();
        group.push_item(entry("b")).unwrap();

        let update = group.insert_item(0, entry("c")).unwrap();
        assert_eq!(update.items, CollectionChange::Insert { index: 0 });
        assert_eq!(
            update.top_items,
            vec![
                CollectionChange::Insert { index: 0 },
                CollectionChange::Remove { index: 2 }
            ]
        );
        assert_eq!(top_ids(&group), vec!["c", "a"]);
    }

    #[test]
    fn field_edits_are_visible_through_top_items() {
        let mut group = Group::new(NewGroup::new("g", "g"), 12).unwrap();
        let item = group.push_new(NewEntry::new("x", "Old")).unwrap();
        item.borrow_mut().common_mut().set_title("New");
        assert_eq!(group.top_items().as_slice()[0].borrow().title(), "New");
    }

    #[test]
    fn rejected_item_edit_leaves_both_views_untouched() {
        let mut group = Group::new(NewGroup::new("g", "g"), 3).unwrap();
        group.push_item(entry("a")).unwrap();

        let err = group.move_item(0, 1).expect_err("target out of range");
        assert_eq!(
            err,
            GroupError::Items(CollectionError::IndexOutOfRange {
                op: "move",
                index: 1,
                len: 1
            })
        );
        assert_eq!(top_ids(&group), vec!["a"]);
        assert!(group.top_items_consistent());
    }

    #[test]
    fn replace_with_same_entry_only_reports_replace() {
        let mut group = Group::new(NewGroup::new("g", "g"), 3).unwrap();
        let first = entry("a");
        group.push_item(first.clone()).unwrap();

        let (old, update) = group.replace_item(0, first.clone()).unwrap();
        assert!(std::rc::Rc::ptr_eq(&old, &first));
        assert_eq!(update.top_items, vec![CollectionChange::Replace { index: 0 }]);
        assert_eq!(top_ids(&group), vec!["a"]);
    }

    #[test]
    fn clear_items_empties_top_items() {
        let mut group = Group::new(NewGroup::new("g", "g"), 3).unwrap();
        group.reset_items(["a", "b", "c", "d"].map(entry)).unwrap();
        assert_eq!(top_ids(&group), vec!["a", "b", "c"]);

        let update = group.clear_items().unwrap();
        assert_eq!(update.top_items, vec![CollectionChange::Reset]);
        assert!(group.top_items().is_empty());
    }
}
