//! Bindable item records.
//!
//! # Responsibility
//! - Define the fields shared by items and groups (`EntryCommon`).
//! - Define the item record (`Entry`) with its tile layout metadata.
//!
//! # Invariants
//! - `unique_id` is fixed at construction; there is no setter.
//! - Setters queue a `Property` notification only when the value changes.
//! - The image slot holds either a pending path or a resolved handle, never both.

use crate::model::image::{ImageError, ImageHandle, ImageResolver, ImageSlot};
use crate::model::notify::{ChangeQueue, Property};
use log::debug;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Entry shared between a group's full item list and its top-items view.
pub type SharedEntry = Rc<RefCell<Entry>>;

/// Fields common to items and groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryCommon {
    unique_id: String,
    title: String,
    subtitle: String,
    description: String,
    image: ImageSlot,
    #[serde(skip)]
    changes: ChangeQueue,
}

impl EntryCommon {
    /// Builds the common fields. No notifications are queued.
    pub fn new(
        unique_id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image_path: Option<&str>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            unique_id: unique_id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            image: ImageSlot::from_path(image_path),
            changes: ChangeQueue::default(),
        }
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_title(&mut self, value: impl Into<String>) -> bool {
        self.changes.set(&mut self.title, value.into(), Property::Title)
    }

    pub fn set_subtitle(&mut self, value: impl Into<String>) -> bool {
        self.changes
            .set(&mut self.subtitle, value.into(), Property::Subtitle)
    }

    pub fn set_description(&mut self, value: impl Into<String>) -> bool {
        self.changes
            .set(&mut self.description, value.into(), Property::Description)
    }

    /// Current image state without resolving anything.
    pub fn image_slot(&self) -> &ImageSlot {
        &self.image
    }

    /// Returns the image, resolving a pending path first.
    ///
    /// Resolution happens at most once per assigned path; the handle is
    /// cached in the slot. On failure the path stays pending so the next
    /// read retries. Lazy resolution does not queue a notification.
    pub fn image(
        &mut self,
        resolver: &dyn ImageResolver,
    ) -> Result<Option<&ImageHandle>, ImageError> {
        if let ImageSlot::Pending(path) = &self.image {
            let handle = resolver.resolve(path)?;
            debug!(
                "event=image_resolve module=model status=ok entry_id={} uri={}",
                self.unique_id,
                handle.uri()
            );
            self.image = ImageSlot::Resolved(handle);
        }
        Ok(self.image.resolved())
    }

    /// Assigns a resolved image (or none), discarding any pending path.
    ///
    /// Notifies only when the resolved handle changes.
    pub fn set_image(&mut self, handle: Option<ImageHandle>) -> bool {
        let current = self.image.resolved().cloned();
        if current == handle {
            if self.image.is_pending() {
                self.image = ImageSlot::Empty;
            }
            return false;
        }
        self.image = match handle {
            Some(handle) => ImageSlot::Resolved(handle),
            None => ImageSlot::Empty,
        };
        self.changes.notify(Property::Image);
        true
    }

    /// Assigns an image path to resolve lazily, discarding any resolved image.
    ///
    /// Always notifies so bound views re-read the image.
    pub fn set_image_path(&mut self, path: impl Into<String>) {
        self.image = ImageSlot::Pending(path.into());
        self.changes.notify(Property::Image);
    }

    pub fn pending_changes(&self) -> &[Property] {
        self.changes.pending()
    }

    /// Drains queued notifications in mutation order.
    pub fn take_changes(&mut self) -> Vec<Property> {
        self.changes.take()
    }
}

impl Display for EntryCommon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

/// Construction input for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub image_path: Option<String>,
    pub description: String,
    /// Multi-line body shown on the detail page.
    pub content: String,
    pub col_span: u32,
    pub row_span: u32,
}

impl NewEntry {
    /// Minimal input with a 1x1 tile and empty text fields.
    pub fn new(unique_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            title: title.into(),
            subtitle: String::new(),
            image_path: None,
            description: String::new(),
            content: String::new(),
            col_span: 1,
            row_span: 1,
        }
    }
}

/// Item record displayed as a tile inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    #[serde(flatten)]
    common: EntryCommon,
    content: String,
    row_span: u32,
    col_span: u32,
    /// Owning group id, when the entry belongs to one.
    group_id: Option<String>,
}

impl Entry {
    pub fn new(input: NewEntry) -> Self {
        Self {
            common: EntryCommon::new(
                input.unique_id,
                input.title,
                input.subtitle,
                input.image_path.as_deref(),
                input.description,
            ),
            content: input.content,
            row_span: input.row_span,
            col_span: input.col_span,
            group_id: None,
        }
    }

    /// Builds an entry ready to be shared between item views.
    pub fn shared(input: NewEntry) -> SharedEntry {
        Rc::new(RefCell::new(Self::new(input)))
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

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn row_span(&self) -> u32 {
        self.row_span
    }

    pub fn col_span(&self) -> u32 {
        self.col_span
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn set_content(&mut self, value: impl Into<String>) -> bool {
        self.common
            .changes
            .set(&mut self.content, value.into(), Property::Content)
    }

    pub fn set_row_span(&mut self, value: u32) -> bool {
        self.common
            .changes
            .set(&mut self.row_span, value, Property::RowSpan)
    }

    pub fn set_col_span(&mut self, value: u32) -> bool {
        self.common
            .changes
            .set(&mut self.col_span, value, Property::ColSpan)
    }

    pub fn set_group_id(&mut self, value: Option<String>) -> bool {
        self.common
            .changes
            .set(&mut self.group_id, value, Property::Group)
    }

    pub fn take_changes(&mut self) -> Vec<Property> {
        self.common.take_changes()
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.common.fmt(f)
    }
}
