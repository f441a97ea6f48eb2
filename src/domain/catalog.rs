use std::collections::HashMap;

use serde::Serialize;

use crate::domain::resource::{Resource, ResourceRecord};
use crate::domain::resource_tag::ResourceTagLink;
use crate::domain::tag::Tag;

/// The three flat record sets read from the store.
#[derive(Debug, Clone, Default)]
pub struct RawCatalog {
    pub resources: Vec<ResourceRecord>,
    pub tags: Vec<Tag>,
    pub links: Vec<ResourceTagLink>,
}

/// Resources with their tags attached, plus the full tag list.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Catalog {
    pub resources: Vec<Resource>,
    pub tags: Vec<Tag>,
}

/// Shape of each tool in the `/api/tools` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolFormat {
    /// Includes the synthesized description and timestamps.
    #[default]
    Full,
    /// Identity, link, favicon and tags only.
    Compact,
}

impl ToolFormat {
    /// Parse the `format` query value; anything other than `compact` is `full`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("compact") => ToolFormat::Compact,
            _ => ToolFormat::Full,
        }
    }
}

/// Filter options applied by the catalog query engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Tag names; a resource matches when it carries any of them.
    pub tag_filter: Vec<String>,
    /// Free text matched approximately against titles and tag names.
    pub search_text: Option<String>,
}

impl CatalogQuery {
    /// Query that matches every resource.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to resources carrying any of `names`.
    pub fn tags<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_filter = names.into_iter().map(Into::into).collect();
        self
    }

    /// Apply a fuzzy search; blank terms are ignored.
    pub fn search(mut self, term: &str) -> Self {
        let term = term.trim();
        self.search_text = (!term.is_empty()).then(|| term.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tag_filter.is_empty() && self.search_text.is_none()
    }
}

impl Catalog {
    /// Empty but valid catalog, used when the store cannot be reached.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reconstruct resource → tags from the flat link rows.
    ///
    /// Links are applied in the order they were fetched, so each resource's
    /// tags keep link order. Links whose tag id does not resolve are skipped.
    /// When two tags share an id the later one wins.
    pub fn assemble(raw: RawCatalog) -> Self {
        let RawCatalog {
            resources,
            tags,
            links,
        } = raw;

        let tags_by_id: HashMap<&str, &Tag> =
            tags.iter().map(|tag| (tag.id.as_str(), tag)).collect();

        let mut tags_by_resource: HashMap<&str, Vec<Tag>> = HashMap::new();
        for link in &links {
            match tags_by_id.get(link.tag_id.as_str()) {
                Some(tag) => tags_by_resource
                    .entry(link.resource_id.as_str())
                    .or_default()
                    .push((*tag).clone()),
                None => log::debug!(
                    "Skipping link from resource {} to missing tag {}",
                    link.resource_id,
                    link.tag_id
                ),
            }
        }

        let resources = resources
            .into_iter()
            .map(|record| {
                let resource_tags = tags_by_resource
                    .remove(record.id.as_str())
                    .unwrap_or_default();
                Resource::from_record(record, resource_tags)
            })
            .collect();

        Self { resources, tags }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn record(id: &str, title: &str) -> ResourceRecord {
        ResourceRecord {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("https://{title}.dev"),
            favicon: None,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn tag_names(resource: &Resource) -> Vec<&str> {
        resource.tags.iter().map(|tag| tag.name.as_str()).collect()
    }

    #[test]
    fn assemble_attaches_tags_in_link_order() {
        let raw = RawCatalog {
            resources: vec![record("r1", "alpha"), record("r2", "beta")],
            tags: vec![
                Tag::new("t1", "css", "#1d4ed8"),
                Tag::new("t2", "react", "#0ea5e9"),
                Tag::new("t3", "testing", "#16a34a"),
            ],
            links: vec![
                ResourceTagLink::new("r1", "t3"),
                ResourceTagLink::new("r2", "t1"),
                ResourceTagLink::new("r1", "t1"),
                ResourceTagLink::new("r1", "t2"),
            ],
        };

        let catalog = Catalog::assemble(raw);

        assert_eq!(catalog.resources.len(), 2);
        assert_eq!(tag_names(&catalog.resources[0]), vec!["testing", "css", "react"]);
        assert_eq!(tag_names(&catalog.resources[1]), vec!["css"]);
        assert_eq!(catalog.tags.len(), 3);
    }

    #[test]
    fn assemble_drops_dangling_links() {
        let raw = RawCatalog {
            resources: vec![record("r1", "alpha")],
            tags: vec![Tag::new("t1", "css", "#1d4ed8")],
            links: vec![
                ResourceTagLink::new("r1", "missing"),
                ResourceTagLink::new("r1", "t1"),
                ResourceTagLink::new("ghost", "t1"),
            ],
        };

        let catalog = Catalog::assemble(raw);

        assert_eq!(tag_names(&catalog.resources[0]), vec!["css"]);
    }

    #[test]
    fn assemble_gives_untagged_resources_empty_tags() {
        let raw = RawCatalog {
            resources: vec![record("r1", "alpha")],
            tags: vec![Tag::new("t1", "css", "#1d4ed8")],
            links: Vec::new(),
        };

        let catalog = Catalog::assemble(raw);

        assert!(catalog.resources[0].tags.is_empty());
    }

    #[test]
    fn assemble_prefers_last_tag_on_duplicate_id() {
        let raw = RawCatalog {
            resources: vec![record("r1", "alpha")],
            tags: vec![
                Tag::new("t1", "old", "#000000"),
                Tag::new("t1", "new", "#ffffff"),
            ],
            links: vec![ResourceTagLink::new("r1", "t1")],
        };

        let catalog = Catalog::assemble(raw);

        assert_eq!(tag_names(&catalog.resources[0]), vec!["new"]);
    }

    #[test]
    fn assemble_keeps_resource_order() {
        let raw = RawCatalog {
            resources: vec![record("r2", "beta"), record("r1", "alpha")],
            tags: Vec::new(),
            links: Vec::new(),
        };

        let catalog = Catalog::assemble(raw);
        let ids: Vec<&str> = catalog.resources.iter().map(|r| r.id.as_str()).collect();

        assert_eq!(ids, vec!["r2", "r1"]);
    }
}
