use serde::{Deserialize, Serialize};

/// Named, coloured label used to categorise catalog resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Opaque, stable identifier of the tag.
    pub id: String,
    /// Display name, also used as the filter key.
    pub name: String,
    /// CSS colour used when rendering the tag badge.
    pub color: String,
}

impl Tag {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Tag decorated with the number of resources linked to it by id.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TagWithCount {
    pub id: String,
    pub name: String,
    pub color: String,
    pub tool_count: usize,
}
