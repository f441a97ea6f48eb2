use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::resource::{NewResource as DomainNewResource, ResourceRecord};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::resources)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub url: String,
    pub favicon: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::resources)]
pub struct NewResource<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub url: &'a str,
    pub favicon: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Resource> for ResourceRecord {
    fn from(value: Resource) -> Self {
        Self {
            id: value.id,
            title: value.title,
            url: value.url,
            favicon: value.favicon,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewResource> for NewResource<'a> {
    fn from(value: &'a DomainNewResource) -> Self {
        Self {
            id: value.id.as_str(),
            title: value.title.as_str(),
            url: value.url.as_str(),
            favicon: value.favicon.as_deref(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
