use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::resource_tag::ResourceTagLink;

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::resource_tags,
    belongs_to(super::resource::Resource, foreign_key = resource_id)
)]
pub struct ResourceTag {
    pub id: i32,
    pub resource_id: String,
    pub tag_id: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::resource_tags)]
pub struct NewResourceTag<'a> {
    pub resource_id: &'a str,
    pub tag_id: &'a str,
}

impl From<ResourceTag> for ResourceTagLink {
    fn from(value: ResourceTag) -> Self {
        Self {
            resource_id: value.resource_id,
            tag_id: value.tag_id,
        }
    }
}

impl<'a> From<&'a ResourceTagLink> for NewResourceTag<'a> {
    fn from(value: &'a ResourceTagLink) -> Self {
        Self {
            resource_id: value.resource_id.as_str(),
            tag_id: value.tag_id.as_str(),
        }
    }
}
