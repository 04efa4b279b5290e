//! Property-change notifications for bindable records.
//!
//! # Invariants
//! - A notification is queued only when a stored value actually changes,
//!   except for explicit "refresh" notifications (`ChangeQueue::notify`).
//! - Notifications are delivered in mutation order.

use std::fmt::{Display, Formatter};

/// Observable fields of entries and groups.
///
/// `name()` matches the binding names used by item templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Title,
    Subtitle,
    Description,
    Image,
    Content,
    RowSpan,
    ColSpan,
    Group,
}

impl Property {
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Subtitle => "Subtitle",
            Self::Description => "Description",
            Self::Image => "Image",
            Self::Content => "Content",
            Self::RowSpan => "RowSpan",
            Self::ColSpan => "ColSpan",
            Self::Group => "Group",
        }
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pending notifications for one record, drained by the view layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeQueue {
    pending: Vec<Property>,
}

impl ChangeQueue {
    /// Stores `value` into `slot` and queues `property` when it differs.
    ///
    /// Returns whether the slot changed.
    pub fn set<V: PartialEq>(&mut self, slot: &mut V, value: V, property: Property) -> bool {
        if *slot == value {
            return false;
        }
        *slot = value;
        self.pending.push(property);
        true
    }

    /// Queues `property` unconditionally.
    pub fn notify(&mut self, property: Property) {
        self.pending.push(property);
    }

    pub fn pending(&self) -> &[Property] {
        &self.pending
    }

    pub fn take(&mut self) -> Vec<Property> {
        std::mem::take(&mut self.pending)
    }
}
