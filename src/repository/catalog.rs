use diesel::prelude::*;

use crate::domain::resource::{NewResource as DomainNewResource, ResourceRecord};
use crate::domain::resource_tag::ResourceTagLink;
use crate::domain::tag::Tag as DomainTag;
use crate::models::resource::{NewResource as DbNewResource, Resource as DbResource};
use crate::models::resource_tag::{NewResourceTag as DbNewResourceTag, ResourceTag as DbResourceTag};
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag};
use crate::repository::{CatalogReader, CatalogWriter, DieselRepository, RepositoryResult};

impl CatalogReader for DieselRepository {
    fn list_tags(&self) -> RepositoryResult<Vec<DomainTag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let db_tags = tags::table
            .order((tags::name.asc(), tags::id.asc()))
            .load::<DbTag>(&mut conn)?;

        Ok(db_tags.into_iter().map(DomainTag::from).collect())
    }

    fn list_resources(&self) -> RepositoryResult<Vec<ResourceRecord>> {
        use crate::schema::resources;

        let mut conn = self.conn()?;
        let db_resources = resources::table
            .order((resources::title.asc(), resources::id.asc()))
            .load::<DbResource>(&mut conn)?;

        Ok(db_resources.into_iter().map(ResourceRecord::from).collect())
    }

    fn list_resource_tags(&self) -> RepositoryResult<Vec<ResourceTagLink>> {
        use crate::schema::resource_tags;

        let mut conn = self.conn()?;
        let rows = resource_tags::table
            .order(resource_tags::id.asc())
            .load::<DbResourceTag>(&mut conn)?;

        Ok(rows.into_iter().map(ResourceTagLink::from).collect())
    }
}

impl CatalogWriter for DieselRepository {
    fn create_tag(&self, tag: &DomainTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let insertable = DbNewTag::from(tag);

        let created = diesel::insert_into(tags::table)
            .values(&insertable)
            .get_result::<DbTag>(&mut conn)?;

        Ok(created.into())
    }

    fn create_resource(&self, new_resource: &DomainNewResource) -> RepositoryResult<ResourceRecord> {
        use crate::schema::resources;

        let mut conn = self.conn()?;
        let insertable = DbNewResource::from(new_resource);

        let created = diesel::insert_into(resources::table)
            .values(&insertable)
            .get_result::<DbResource>(&mut conn)?;

        Ok(created.into())
    }

    fn link_resource_tag(&self, link: &ResourceTagLink) -> RepositoryResult<()> {
        use crate::schema::resource_tags;

        let mut conn = self.conn()?;
        let insertable = DbNewResourceTag::from(link);

        diesel::insert_into(resource_tags::table)
            .values(&insertable)
            .execute(&mut conn)?;

        Ok(())
    }
}
