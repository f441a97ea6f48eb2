use diesel::prelude::*;

use crate::domain::tag::Tag as DomainTag;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::tags)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tags)]
pub struct NewTag<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub color: &'a str,
}

impl From<Tag> for DomainTag {
    fn from(value: Tag) -> Self {
        Self {
            id: value.id,
            name: value.name,
            color: value.color,
        }
    }
}

impl<'a> From<&'a DomainTag> for NewTag<'a> {
    fn from(value: &'a DomainTag) -> Self {
        Self {
            id: value.id.as_str(),
            name: value.name.as_str(),
            color: value.color.as_str(),
        }
    }
}
