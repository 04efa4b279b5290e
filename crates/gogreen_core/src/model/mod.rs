//! Bindable data model for groups and items.
//!
//! # Responsibility
//! - Define the records bound by group and item views.
//! - Keep property notifications and lazy image state next to the data.
//!
//! # Invariants
//! - Identifiers never change after construction.
//! - A group's top items are derived, never edited directly.

pub mod entry;
pub mod group;
pub mod image;
pub mod notify;
