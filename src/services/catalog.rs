use std::sync::Arc;

use actix_web::web;

use crate::domain::catalog::{Catalog, RawCatalog};
use crate::repository::{CatalogReader, RepositoryResult};
use crate::services::{ServiceError, ServiceResult};

/// Read tags, resources and links concurrently and assemble the catalog.
///
/// The three reads run on the blocking pool, each with its own connection.
/// If any read fails the whole fetch fails and the other results are discarded.
pub async fn fetch_catalog<R>(repo: Arc<R>) -> ServiceResult<Catalog>
where
    R: CatalogReader + Send + Sync + 'static,
{
    let tags_repo = Arc::clone(&repo);
    let resources_repo = Arc::clone(&repo);
    let links_repo = repo;

    let (tags, resources, links) = futures_util::try_join!(
        run_blocking("tags", move || tags_repo.list_tags()),
        run_blocking("resources", move || resources_repo.list_resources()),
        run_blocking("resource tags", move || links_repo.list_resource_tags()),
    )?;

    let catalog = Catalog::assemble(RawCatalog {
        resources,
        tags,
        links,
    });

    log::info!(
        "Fetched {} tools and {} tags",
        catalog.resources.len(),
        catalog.tags.len()
    );

    Ok(catalog)
}

/// Like [`fetch_catalog`], but degrades to an empty catalog on failure.
/// The error is returned alongside so the caller can show it.
pub async fn fetch_catalog_or_empty<R>(repo: Arc<R>) -> (Catalog, Option<ServiceError>)
where
    R: CatalogReader + Send + Sync + 'static,
{
    match fetch_catalog(repo).await {
        Ok(catalog) => (catalog, None),
        Err(err) => (Catalog::empty(), Some(err)),
    }
}

async fn run_blocking<T, F>(record_set: &'static str, read: F) -> ServiceResult<T>
where
    F: FnOnce() -> RepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    match web::block(read).await {
        Ok(Ok(records)) => Ok(records),
        Ok(Err(err)) => {
            log::error!("Failed to fetch {record_set}: {err}");
            Err(ServiceError::StoreUnavailable(format!(
                "{record_set} fetch error: {err}"
            )))
        }
        Err(err) => {
            log::error!("Blocking task for {record_set} failed: {err}");
            Err(ServiceError::StoreUnavailable(format!(
                "{record_set} fetch was cancelled"
            )))
        }
    }
}
