//! Data-model core for the Go Green app.
//! Groups, items, and the capped top-items views bound by group pages.

pub mod catalog;
pub mod collection;
pub mod config;
pub mod logging;
pub mod model;
pub mod projection;

pub use catalog::{
    Catalog, CatalogError, CatalogResult, CatalogSeeder, SampleSeeder, SharedGroup,
};
pub use collection::{CollectionChange, CollectionError, CollectionResult, ObservableVec};
pub use config::{ConfigError, CoreConfig, DEFAULT_GROUP_SET_NAME};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::entry::{Entry, EntryCommon, NewEntry, SharedEntry};
pub use model::group::{Group, GroupError, GroupResult, GroupUpdate, NewGroup};
pub use model::image::{BaseUriResolver, ImageError, ImageHandle, ImageResolver, ImageSlot};
pub use model::notify::{ChangeQueue, Property};
pub use projection::{
    BoundedPrefix, ProjectionError, ProjectionResult, DEFAULT_TOP_ITEMS_CAPACITY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
