use std::collections::BTreeMap;

use serde::Serialize;

/// Descriptive statistics over the whole catalog.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogStats {
    pub overview: StatsOverview,
    pub tags: TagStats,
    pub tools: ToolStats,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    pub total_tools: usize,
    pub total_tags: usize,
    /// Rounded to two decimals; `0` for an empty catalog.
    pub average_tags_per_tool: f64,
    /// Resources created within the recency window.
    pub recently_added: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TagStats {
    pub most_popular: Vec<TagPopularity>,
    /// Tag name to number of resources carrying a tag with that name.
    pub distribution: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TagPopularity {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolStats {
    pub with_most_tags: Vec<ToolTagSummary>,
    pub favicon_coverage: FaviconCoverage,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToolTagSummary {
    pub title: String,
    pub tag_count: usize,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaviconCoverage {
    pub with_favicons: usize,
    pub without_favicons: usize,
    /// Share of resources with a favicon, rounded to one decimal; `0` for an empty catalog.
    pub percentage: f64,
}
