use std::collections::HashMap;

use once_cell::sync::OnceCell;
use tracing::{debug, info};

use super::{PropertyMappingTable, Shape, ShapePair, fields_are_valid};
use crate::error::{QueryError, Result};

static GLOBAL_REGISTRY: OnceCell<MappingRegistry> = OnceCell::new();

/// Collects mapping tables during startup.
///
/// Registration is the only write path into the mapping state; calling
/// [`build`](Self::build) consumes the builder and yields a frozen
/// [`MappingRegistry`].
#[derive(Debug, Default)]
pub struct MappingRegistryBuilder {
    tables: HashMap<ShapePair, PropertyMappingTable>,
}

impl MappingRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the table used to translate `S` fields into `D` fields.
    pub fn register<S: Shape, D: Shape>(
        &mut self,
        table: PropertyMappingTable,
    ) -> Result<&mut Self> {
        self.register_pair(ShapePair::of::<S, D>(), table)
    }

    /// Registers a table under an explicit pair key.
    ///
    /// A pair can be registered once; a second registration is a
    /// configuration error.
    pub fn register_pair(
        &mut self,
        pair: ShapePair,
        table: PropertyMappingTable,
    ) -> Result<&mut Self> {
        if self.tables.contains_key(&pair) {
            return Err(QueryError::DuplicateMapping(pair));
        }
        debug!(%pair, fields = table.len(), "registered property mapping");
        self.tables.insert(pair, table);
        Ok(self)
    }

    pub fn build(self) -> MappingRegistry {
        info!(mappings = self.tables.len(), "property mapping registry frozen");
        MappingRegistry {
            tables: self.tables,
        }
    }
}

/// Frozen set of property mapping tables keyed by [`ShapePair`].
///
/// There is no way to add or change a table once the registry exists, so a
/// shared reference can be read from any number of request tasks.
#[derive(Debug)]
pub struct MappingRegistry {
    tables: HashMap<ShapePair, PropertyMappingTable>,
}

impl MappingRegistry {
    pub fn builder() -> MappingRegistryBuilder {
        MappingRegistryBuilder::new()
    }

    /// Table registered for exactly `<S, D>`.
    pub fn lookup<S: Shape, D: Shape>(&self) -> Result<&PropertyMappingTable> {
        self.lookup_pair(ShapePair::of::<S, D>())
    }

    pub fn lookup_pair(&self, pair: ShapePair) -> Result<&PropertyMappingTable> {
        self.tables
            .get(&pair)
            .ok_or(QueryError::MappingNotFound(pair))
    }

    /// Looks up the `<S, D>` table and checks every reference in `raw`
    /// against it.
    pub fn valid_mapping_exists_for<S: Shape, D: Shape>(
        &self,
        raw: &str,
    ) -> Result<bool> {
        let table = self.lookup::<S, D>()?;
        Ok(fields_are_valid(table, raw))
    }

    pub fn pairs(&self) -> impl Iterator<Item = ShapePair> + '_ {
        self.tables.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Publishes this registry as the process-wide instance.
    ///
    /// Succeeds once per process; later calls fail with
    /// [`QueryError::RegistryAlreadyInstalled`].
    pub fn install(self) -> Result<&'static MappingRegistry> {
        GLOBAL_REGISTRY
            .set(self)
            .map_err(|_| QueryError::RegistryAlreadyInstalled)?;
        Self::global()
    }

    /// The process-wide registry published by [`install`](Self::install).
    pub fn global() -> Result<&'static MappingRegistry> {
        GLOBAL_REGISTRY.get().ok_or(QueryError::RegistryNotInstalled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AuthorView;
    struct AuthorRow;
    struct CourseView;

    impl Shape for AuthorView {
        const SHAPE: &'static str = "AuthorView";
    }
    impl Shape for AuthorRow {
        const SHAPE: &'static str = "AuthorRow";
    }
    impl Shape for CourseView {
        const SHAPE: &'static str = "CourseView";
    }

    fn table() -> PropertyMappingTable {
        PropertyMappingTable::builder()
            .map("Id", ["Id"])
            .map("Name", ["FirstName", "LastName"])
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_finds_exact_pair() {
        let mut builder = MappingRegistry::builder();
        builder.register::<AuthorView, AuthorRow>(table()).unwrap();
        let registry = builder.build();

        let found = registry.lookup::<AuthorView, AuthorRow>().unwrap();
        assert!(found.contains_key("name"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lookup_is_directional() {
        let mut builder = MappingRegistry::builder();
        builder.register::<AuthorView, AuthorRow>(table()).unwrap();
        let registry = builder.build();

        let err = registry.lookup::<AuthorRow, AuthorView>().unwrap_err();
        assert_eq!(
            err,
            QueryError::MappingNotFound(ShapePair::new("AuthorRow", "AuthorView"))
        );
        assert!(registry.lookup::<CourseView, AuthorRow>().is_err());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut builder = MappingRegistry::builder();
        builder.register::<AuthorView, AuthorRow>(table()).unwrap();
        let err = builder
            .register::<AuthorView, AuthorRow>(table())
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::DuplicateMapping(ShapePair::new("AuthorView", "AuthorRow"))
        );
    }

    #[test]
    fn valid_mapping_requires_registered_pair() {
        let mut builder = MappingRegistry::builder();
        builder.register::<AuthorView, AuthorRow>(table()).unwrap();
        let registry = builder.build();

        assert!(registry
            .valid_mapping_exists_for::<AuthorView, AuthorRow>("name desc, id")
            .unwrap());
        assert!(!registry
            .valid_mapping_exists_for::<AuthorView, AuthorRow>("age")
            .unwrap());
        assert!(registry
            .valid_mapping_exists_for::<CourseView, AuthorRow>("")
            .is_err());
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MappingRegistry>();
    }
}
