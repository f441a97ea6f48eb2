use std::cmp::Ordering;

use crate::domain::catalog::CatalogQuery;
use crate::domain::resource::Resource;
use crate::services::search::{TAG_WEIGHT, TITLE_WEIGHT, TermMatcher, field_norm};

/// Narrow `resources` to the ones matching `query`.
///
/// The tag filter runs first and keeps resources carrying any of the
/// requested tag names (exact, case-sensitive). The fuzzy search then runs
/// over what is left and orders the matches by relevance; equally relevant
/// resources keep their relative order. Without filters the input is
/// returned unchanged.
pub fn query(resources: &[Resource], query: &CatalogQuery) -> Vec<Resource> {
    let candidates: Vec<&Resource> = if query.tag_filter.is_empty() {
        resources.iter().collect()
    } else {
        resources
            .iter()
            .filter(|resource| {
                query
                    .tag_filter
                    .iter()
                    .any(|name| resource.has_tag_named(name))
            })
            .collect()
    };

    let Some(term) = query.search_text.as_deref() else {
        return candidates.into_iter().cloned().collect();
    };

    let matcher = TermMatcher::new(term);
    let mut ranked: Vec<(f64, &Resource)> = candidates
        .into_iter()
        .filter_map(|resource| relevance(&matcher, resource).map(|score| (score, resource)))
        .collect();

    // sort_by is stable
    ranked.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .map(|(_, resource)| resource.clone())
        .collect()
}

/// Weighted relevance of `resource`, or `None` when neither its title nor any
/// of its tag names matches. Each field contributes `weight * (1 - score)`,
/// scaled down for longer fields.
fn relevance(matcher: &TermMatcher, resource: &Resource) -> Option<f64> {
    let title = matcher
        .matches(&resource.title)
        .map(|score| (1.0 - score) * field_norm(&resource.title));
    let tag = resource
        .tags
        .iter()
        .filter_map(|tag| {
            matcher
                .matches(&tag.name)
                .map(|score| (1.0 - score) * field_norm(&tag.name))
        })
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    if title.is_none() && tag.is_none() {
        return None;
    }

    Some(TITLE_WEIGHT * title.unwrap_or(0.0) + TAG_WEIGHT * tag.unwrap_or(0.0))
}
