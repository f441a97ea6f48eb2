use serde::{Deserialize, Serialize};

/// Many-to-many link between a resource and a tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTagLink {
    /// Identifier of the tagged resource.
    pub resource_id: String,
    /// Identifier of the referenced tag. May point to a tag that no longer exists.
    pub tag_id: String,
}

impl ResourceTagLink {
    pub fn new(resource_id: impl Into<String>, tag_id: impl Into<String>) -> Self {
        Self {
            resource_id: resource_id.into(),
            tag_id: tag_id.into(),
        }
    }
}
