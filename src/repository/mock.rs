use mockall::mock;

use super::CatalogReader;
use crate::domain::resource::ResourceRecord;
use crate::domain::resource_tag::ResourceTagLink;
use crate::domain::tag::Tag;
use crate::repository::RepositoryResult;

mock! {
    pub CatalogReader {}

    impl CatalogReader for CatalogReader {
        fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
        fn list_resources(&self) -> RepositoryResult<Vec<ResourceRecord>>;
        fn list_resource_tags(&self) -> RepositoryResult<Vec<ResourceTagLink>>;
    }
}
