use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::catalog::{CatalogQuery, ToolFormat};
use crate::domain::resource::{Resource, to_iso8601};
use crate::domain::stats::CatalogStats;
use crate::domain::tag::{Tag, TagWithCount};
use crate::forms::catalog::ToolsApiQuery;
use crate::repository::CatalogReader;
use crate::services::catalog::fetch_catalog;
use crate::services::query::query;
use crate::services::stats::{aggregate, tags_with_counts};
use crate::services::{ServiceError, ServiceResult};

/// Tool entry of the `full` response format.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FullTool {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub favicon: Option<String>,
    pub tags: Vec<Tag>,
    pub created_at: String,
    pub updated_at: String,
}

/// Tool entry of the `compact` response format.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CompactTool {
    pub id: String,
    pub title: String,
    pub url: String,
    pub favicon: Option<String>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ToolEntry {
    Full(FullTool),
    Compact(CompactTool),
}

impl ToolEntry {
    pub fn shape(resource: Resource, format: ToolFormat) -> Self {
        match format {
            ToolFormat::Full => ToolEntry::Full(FullTool {
                description: describe(&resource.title),
                created_at: to_iso8601(&resource.created_at),
                updated_at: to_iso8601(&resource.updated_at),
                id: resource.id,
                title: resource.title,
                url: resource.url,
                favicon: resource.favicon,
                tags: resource.tags,
            }),
            ToolFormat::Compact => ToolEntry::Compact(CompactTool {
                id: resource.id,
                title: resource.title,
                url: resource.url,
                favicon: resource.favicon,
                tags: resource.tags,
            }),
        }
    }
}

/// Payload of `GET /api/tools`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolsCatalog {
    pub tools: Vec<ToolEntry>,
    pub tags: Vec<Tag>,
}

/// Payload of `GET /api/tools/tags`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagsOverview {
    pub tags: Vec<TagWithCount>,
    pub total_tags: usize,
}

fn describe(title: &str) -> String {
    format!("{title} - A powerful tool for developers")
}

/// Filter and shape the catalog for the public tools endpoint.
pub async fn load_tools<R>(repo: Arc<R>, params: ToolsApiQuery) -> ServiceResult<ToolsCatalog>
where
    R: CatalogReader + Send + Sync + 'static,
{
    let (format, catalog_query): (ToolFormat, CatalogQuery) = params
        .into_catalog_query()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let catalog = fetch_catalog(repo).await?;
    let tools = query(&catalog.resources, &catalog_query)
        .into_iter()
        .map(|resource| ToolEntry::shape(resource, format))
        .collect();

    Ok(ToolsCatalog {
        tools,
        tags: catalog.tags,
    })
}

/// All tags with their tool counts, most used first.
pub async fn load_tags_overview<R>(repo: Arc<R>) -> ServiceResult<TagsOverview>
where
    R: CatalogReader + Send + Sync + 'static,
{
    let catalog = fetch_catalog(repo).await?;
    let total_tags = catalog.tags.len();

    Ok(TagsOverview {
        tags: tags_with_counts(&catalog.resources, &catalog.tags),
        total_tags,
    })
}

/// Catalog statistics as of `now`.
pub async fn load_stats<R>(repo: Arc<R>, now: NaiveDateTime) -> ServiceResult<CatalogStats>
where
    R: CatalogReader + Send + Sync + 'static,
{
    let catalog = fetch_catalog(repo).await?;
    Ok(aggregate(&catalog.resources, &catalog.tags, now))
}
