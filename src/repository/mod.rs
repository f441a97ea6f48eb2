use crate::db::{DbConnection, DbPool};
use crate::domain::resource::{NewResource, ResourceRecord};
use crate::domain::resource_tag::ResourceTagLink;
use crate::domain::tag::Tag;

pub mod catalog;
pub mod errors;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only access to the three flat catalog record sets. No method joins;
/// relationships are reconstructed by [`crate::domain::catalog::Catalog::assemble`].
pub trait CatalogReader {
    /// All tags ordered by name.
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
    /// All resources ordered by title.
    fn list_resources(&self) -> RepositoryResult<Vec<ResourceRecord>>;
    /// All resource-tag links in insertion order.
    fn list_resource_tags(&self) -> RepositoryResult<Vec<ResourceTagLink>>;
}

/// Write operations used to populate the catalog store.
pub trait CatalogWriter {
    fn create_tag(&self, tag: &Tag) -> RepositoryResult<Tag>;
    fn create_resource(&self, new_resource: &NewResource) -> RepositoryResult<ResourceRecord>;
    fn link_resource_tag(&self, link: &ResourceTagLink) -> RepositoryResult<()>;
}
