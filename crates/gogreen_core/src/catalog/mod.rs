//! Group registry and query surface for the view layer.
//!
//! # Responsibility
//! - Own the ordered group list for one application instance.
//! - Answer id lookups for groups and for items across all groups.
//!
//! # Invariants
//! - Lookups return a value only when exactly one record matches.
//! - Groups are created with the configured top-items capacity.
//! - The catalog is passed to consumers explicitly; there is no global.

pub mod sample;

use crate::collection::ObservableVec;
use crate::config::{ConfigError, CoreConfig};
use crate::model::entry::SharedEntry;
use crate::model::group::{Group, GroupError, NewGroup};
use crate::model::image::BaseUriResolver;
use log::{debug, info};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use std::time::Instant;

pub use sample::SampleSeeder;

/// Group shared between the catalog and views holding on to it.
pub type SharedGroup = Rc<RefCell<Group>>;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Requested group set is not the configured one.
    UnsupportedScope { requested: String, supported: String },
    Config(ConfigError),
    Group(GroupError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedScope {
                requested,
                supported,
            } => write!(
                f,
                "group set `{requested}` is unsupported; only `{supported}` is available"
            ),
            Self::Config(err) => write!(f, "{err}"),
            Self::Group(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnsupportedScope { .. } => None,
            Self::Config(err) => Some(err),
            Self::Group(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CatalogError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<GroupError> for CatalogError {
    fn from(value: GroupError) -> Self {
        Self::Group(value)
    }
}

/// Populates a fresh catalog at startup.
pub trait CatalogSeeder {
    fn seed(&self, catalog: &mut Catalog) -> CatalogResult<()>;
}

#[derive(Debug)]
pub struct Catalog {
    config: CoreConfig,
    groups: ObservableVec<SharedGroup>,
}

impl Catalog {
    /// Creates an empty catalog after validating `config`.
    pub fn new(config: CoreConfig) -> CatalogResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            groups: ObservableVec::new(),
        })
    }

    /// Creates a catalog and runs `seeder` on it.
    ///
    /// # Side effects
    /// - Emits one `catalog_seed` event with group/item counts and duration.
    pub fn seeded(config: CoreConfig, seeder: &dyn CatalogSeeder) -> CatalogResult<Self> {
        let started_at = Instant::now();
        let mut catalog = Self::new(config)?;
        seeder.seed(&mut catalog)?;
        info!(
            "event=catalog_seed module=catalog status=ok groups={} items={} duration_ms={}",
            catalog.groups.len(),
            catalog.item_count(),
            started_at.elapsed().as_millis()
        );
        Ok(catalog)
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Resolver for image paths of this catalog's records.
    pub fn image_resolver(&self) -> BaseUriResolver {
        BaseUriResolver::new(self.config.image_base_uri.as_str())
    }

    /// Creates a group with the configured capacity and appends it.
    pub fn add_group(&mut self, input: NewGroup) -> CatalogResult<SharedGroup> {
        let group = Rc::new(RefCell::new(Group::new(
            input,
            self.config.top_items_capacity,
        )?));
        self.groups.push(Rc::clone(&group));
        Ok(group)
    }

    /// All groups in display order.
    pub fn list_groups(&self) -> &[SharedGroup] {
        self.groups.as_slice()
    }

    /// Groups for a named group set.
    ///
    /// # Errors
    /// - `UnsupportedScope` unless `scope` is the configured group-set name.
    pub fn groups(&self, scope: &str) -> CatalogResult<&[SharedGroup]> {
        if scope != self.config.group_set_name {
            return Err(CatalogError::UnsupportedScope {
                requested: scope.to_string(),
                supported: self.config.group_set_name.clone(),
            });
        }
        Ok(self.list_groups())
    }

    /// Finds the group with `unique_id`; ambiguous ids count as not found.
    pub fn find_group(&self, unique_id: &str) -> Option<SharedGroup> {
        // Why: catalogs hold tens of groups, so a linear scan is enough.
        let matches: Vec<SharedGroup> = self
            .groups
            .iter()
            .filter(|group| group.borrow().unique_id() == unique_id)
            .cloned()
            .collect();
        single_match("group_lookup", unique_id, matches)
    }

    /// Finds the item with `unique_id` across all groups; ambiguous ids
    /// count as not found.
    pub fn find_entry(&self, unique_id: &str) -> Option<SharedEntry> {
        let mut matches = Vec::new();
        for group in self.groups.iter() {
            let group = group.borrow();
            matches.extend(
                group
                    .items()
                    .iter()
                    .filter(|entry| entry.borrow().unique_id() == unique_id)
                    .cloned(),
            );
        }
        single_match("entry_lookup", unique_id, matches)
    }

    pub fn item_count(&self) -> usize {
        self.groups
            .iter()
            .map(|group| group.borrow().items().len())
            .sum()
    }
}

fn single_match<T>(event: &str, unique_id: &str, mut matches: Vec<T>) -> Option<T> {
    let status = match matches.len() {
        0 => "not_found",
        1 => "ok",
        _ => "ambiguous",
    };
    debug!(
        "event={event} module=catalog status={status} id={unique_id} matches={}",
        matches.len()
    );
    if matches.len() == 1 {
        matches.pop()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError, SampleSeeder};
    use crate::config::{ConfigError, CoreConfig};
    use crate::model::entry::NewEntry;
    use crate::model::group::NewGroup;

    #[test]
    fn new_rejects_invalid_config() {
        let config = CoreConfig {
            top_items_capacity: 0,
            ..CoreConfig::default()
        };
        let err = Catalog::new(config).expect_err("zero capacity must fail");
        assert_eq!(err, CatalogError::Config(ConfigError::ZeroCapacity));
    }

    #[test]
    fn add_group_uses_configured_capacity() {
        let config = CoreConfig {
            top_items_capacity: 4,
            ..CoreConfig::default()
        };
        let mut catalog = Catalog::seeded(config, &SampleSeeder).unwrap();
        let group = catalog.add_group(NewGroup::new("Group-9", "Nine")).unwrap();
        assert_eq!(group.borrow().capacity(), 4);
        assert_eq!(catalog.list_groups().len(), 3);
        assert!(catalog
            .list_groups()
            .iter()
            .all(|group| group.borrow().capacity() == 4));
    }

    #[test]
    fn duplicate_group_ids_are_not_found() {
        let mut catalog = Catalog::new(CoreConfig::default()).unwrap();
        catalog.add_group(NewGroup::new("Group-1", "First")).unwrap();
        catalog.add_group(NewGroup::new("Group-1", "Second")).unwrap();
        catalog.add_group(NewGroup::new("Group-2", "Third")).unwrap();

        assert!(catalog.find_group("Group-1").is_none());
        let found = catalog.find_group("Group-2").expect("unique id resolves");
        assert_eq!(found.borrow().title(), "Third");
    }

    #[test]
    fn duplicate_entry_ids_across_groups_are_not_found() {
        let mut catalog = Catalog::new(CoreConfig::default()).unwrap();
        let first = catalog.add_group(NewGroup::new("g1", "g1")).unwrap();
        let second = catalog.add_group(NewGroup::new("g2", "g2")).unwrap();
        first
            .borrow_mut()
            .push_new(NewEntry::new("shared-id", "a"))
            .unwrap();
        second
            .borrow_mut()
            .push_new(NewEntry::new("shared-id", "b"))
            .unwrap();

        assert!(catalog.find_entry("shared-id").is_none());
        assert_eq!(catalog.item_count(), 2);
    }

    #[test]
    fn groups_scope_is_checked() {
        let catalog = Catalog::seeded(CoreConfig::default(), &SampleSeeder).unwrap();
        assert_eq!(catalog.groups("AllGroups").unwrap().len(), 2);

        let err = catalog.groups("Favorites").expect_err("unknown scope must fail");
        assert_eq!(
            err.to_string(),
            "group set `Favorites` is unsupported; only `AllGroups` is available"
        );
    }

    #[test]
    fn image_resolver_uses_configured_base() {
        let config = CoreConfig {
            image_base_uri: "https://cdn.example.org/".to_string(),
            ..CoreConfig::default()
        };
        let catalog = Catalog::seeded(config, &SampleSeeder).unwrap();
        let group = catalog.find_group("Group-1").unwrap();
        let resolver = catalog.image_resolver();
        let mut group = group.borrow_mut();
        let handle = group
            .common_mut()
            .image(&resolver)
            .unwrap()
            .cloned()
            .expect("seeded group has an image");
        assert_eq!(handle.uri(), "https://cdn.example.org/Assets/10.jpg");
    }
}
