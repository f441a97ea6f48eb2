use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDateTime};

use crate::domain::resource::Resource;
use crate::domain::stats::{
    CatalogStats, FaviconCoverage, StatsOverview, TagPopularity, TagStats, ToolStats,
    ToolTagSummary,
};
use crate::domain::tag::{Tag, TagWithCount};

/// Resources created within this many days count as recently added.
pub const RECENT_WINDOW_DAYS: i64 = 30;
const MOST_POPULAR_LIMIT: usize = 10;
const MOST_TAGGED_LIMIT: usize = 5;

/// Compute catalog statistics as of `now`.
pub fn aggregate(resources: &[Resource], tags: &[Tag], now: NaiveDateTime) -> CatalogStats {
    warn_on_name_collisions(tags);

    let total_tools = resources.len();
    let total_links: usize = resources.iter().map(|resource| resource.tags.len()).sum();
    let average_tags_per_tool = checked_ratio(total_links as f64, total_tools)
        .map(|average| round_to(average, 2))
        .unwrap_or(0.0);

    let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
    let recently_added = resources
        .iter()
        .filter(|resource| resource.created_at > cutoff)
        .count();

    let distribution = tag_distribution(resources);
    let mut most_popular: Vec<TagPopularity> = distribution
        .iter()
        .map(|(name, count)| TagPopularity {
            name: (*name).to_string(),
            count: *count,
        })
        .collect();
    most_popular.sort_by(|a, b| b.count.cmp(&a.count));
    most_popular.truncate(MOST_POPULAR_LIMIT);

    let mut by_tag_count: Vec<&Resource> = resources.iter().collect();
    by_tag_count.sort_by(|a, b| b.tags.len().cmp(&a.tags.len()));
    let with_most_tags = by_tag_count
        .into_iter()
        .take(MOST_TAGGED_LIMIT)
        .map(|resource| ToolTagSummary {
            title: resource.title.clone(),
            tag_count: resource.tags.len(),
            tags: resource.tags.iter().map(|tag| tag.name.clone()).collect(),
        })
        .collect();

    CatalogStats {
        overview: StatsOverview {
            total_tools,
            total_tags: tags.len(),
            average_tags_per_tool,
            recently_added,
        },
        tags: TagStats {
            most_popular,
            distribution: distribution
                .into_iter()
                .map(|(name, count)| (name.to_string(), count))
                .collect::<BTreeMap<_, _>>(),
        },
        tools: ToolStats {
            with_most_tags,
            favicon_coverage: favicon_coverage(resources),
        },
    }
}

/// Decorate each tag with the number of resources linked to it by id,
/// most used first. Ties keep the incoming tag order.
pub fn tags_with_counts(resources: &[Resource], tags: &[Tag]) -> Vec<TagWithCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tag in resources.iter().flat_map(|resource| &resource.tags) {
        *counts.entry(tag.id.as_str()).or_default() += 1;
    }

    let mut decorated: Vec<TagWithCount> = tags
        .iter()
        .map(|tag| TagWithCount {
            id: tag.id.clone(),
            name: tag.name.clone(),
            color: tag.color.clone(),
            tool_count: counts.get(tag.id.as_str()).copied().unwrap_or(0),
        })
        .collect();
    decorated.sort_by(|a, b| b.tool_count.cmp(&a.tool_count));
    decorated
}

/// Tag name to resource count, in first-encountered order.
fn tag_distribution(resources: &[Resource]) -> Vec<(&str, usize)> {
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for tag in resources.iter().flat_map(|resource| &resource.tags) {
        match index.get(tag.name.as_str()) {
            Some(&position) => order[position].1 += 1,
            None => {
                index.insert(tag.name.as_str(), order.len());
                order.push((tag.name.as_str(), 1));
            }
        }
    }

    order
}

fn favicon_coverage(resources: &[Resource]) -> FaviconCoverage {
    let with_favicons = resources
        .iter()
        .filter(|resource| resource.has_favicon())
        .count();
    let percentage = checked_ratio(with_favicons as f64, resources.len())
        .map(|ratio| round_to(ratio * 100.0, 1))
        .unwrap_or(0.0);

    FaviconCoverage {
        with_favicons,
        without_favicons: resources.len() - with_favicons,
        percentage,
    }
}

fn warn_on_name_collisions(tags: &[Tag]) {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for tag in tags {
        if let Some(other_id) = seen.insert(tag.name.as_str(), tag.id.as_str())
            && other_id != tag.id
        {
            log::warn!(
                "Tags {other_id} and {} share the name \"{}\"; name-keyed statistics merge them",
                tag.id,
                tag.name
            );
        }
    }
}

/// `numerator / denominator`, or `None` when the ratio is undefined.
fn checked_ratio(numerator: f64, denominator: usize) -> Option<f64> {
    (denominator > 0).then(|| numerator / denominator as f64)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
