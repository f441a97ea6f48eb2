use std::sync::Arc;

use serde::Serialize;

use crate::domain::icon::Icon;
use crate::domain::tag::Tag;
use crate::domain::view_state::{Layout, ViewAction, ViewState, reduce};
use crate::repository::CatalogReader;
use crate::services::catalog::fetch_catalog_or_empty;
use crate::services::query::query;

/// Path of the catalog page; links generated for the page point here.
pub const TOOLS_PAGE_PATH: &str = "/tools";

/// Resource as rendered by the catalog page layouts.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceCard {
    pub id: String,
    pub title: String,
    pub url: String,
    pub icon: Icon,
    pub tags: Vec<Tag>,
}

/// Tag badge in the filter bar; `href` toggles the tag.
#[derive(Debug, Clone, Serialize)]
pub struct TagChip {
    pub name: String,
    pub color: String,
    pub selected: bool,
    pub href: String,
}

/// Entry of the layout switcher.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutOption {
    pub layout: Layout,
    pub active: bool,
    pub href: String,
}

/// Data required to render the catalog page template.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPageData {
    pub state: ViewState,
    pub tools: Vec<ResourceCard>,
    pub tags: Vec<TagChip>,
    pub layouts: Vec<LayoutOption>,
    /// Number of resources in the unfiltered catalog.
    pub total: usize,
    /// Whether search text or a tag selection narrows the view.
    pub has_filters: bool,
    /// Link that clears search text and tag selection.
    pub clear_href: String,
    /// Link that reloads the current view.
    pub retry_href: String,
    /// User-facing message when the store could not be read.
    pub error: Option<String>,
}

/// Load the catalog and build the page for `state`.
///
/// A store failure does not fail the page: the catalog is rendered empty with
/// an inline error and a retry link.
pub async fn load_catalog_page<R>(repo: Arc<R>, state: ViewState) -> CatalogPageData
where
    R: CatalogReader + Send + Sync + 'static,
{
    let (catalog, error) = fetch_catalog_or_empty(repo).await;
    if let Some(err) = &error {
        log::error!("Failed to load catalog page: {err}");
    }

    let tools = query(&catalog.resources, &state.query())
        .into_iter()
        .map(|resource| ResourceCard {
            icon: Icon::resolve(resource.favicon.as_deref()),
            id: resource.id,
            title: resource.title,
            url: resource.url,
            tags: resource.tags,
        })
        .collect();

    let tags = catalog
        .tags
        .iter()
        .map(|tag| TagChip {
            name: tag.name.clone(),
            color: tag.color.clone(),
            selected: state.is_selected(&tag.name),
            href: page_href(&reduce(&state, ViewAction::ToggleTag(tag.name.clone())), None),
        })
        .collect();

    let layouts = Layout::ALL
        .iter()
        .map(|layout| LayoutOption {
            layout: *layout,
            active: *layout == state.layout,
            href: page_href(&state, Some(*layout)),
        })
        .collect();

    CatalogPageData {
        has_filters: state.has_filters(),
        clear_href: page_href(&reduce(&state, ViewAction::ClearFilters), None),
        retry_href: page_href(&state, None),
        total: catalog.resources.len(),
        error: error.map(|_| "Failed to load data. Please try again.".to_string()),
        state,
        tools,
        tags,
        layouts,
    }
}

/// Link to the catalog page reflecting `state`, optionally switching layout.
pub fn page_href(state: &ViewState, layout: Option<Layout>) -> String {
    let mut query_string = match state.to_query_string() {
        Ok(encoded) => encoded,
        Err(err) => {
            log::warn!("Failed to encode view state: {err}");
            String::new()
        }
    };

    if let Some(layout) = layout {
        if !query_string.is_empty() {
            query_string.push('&');
        }
        query_string.push_str("layout=");
        query_string.push_str(layout.as_str());
    }

    if query_string.is_empty() {
        TOOLS_PAGE_PATH.to_string()
    } else {
        format!("{TOOLS_PAGE_PATH}?{query_string}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    use crate::domain::resource::ResourceRecord;
    use crate::domain::resource_tag::ResourceTagLink;
    use crate::repository::RepositoryError;
    use crate::repository::mock::MockCatalogReader;

    fn record(id: &str, title: &str, favicon: Option<&str>) -> ResourceRecord {
        ResourceRecord {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("https://{id}.dev"),
            favicon: favicon.map(str::to_string),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn repo() -> MockCatalogReader {
        let mut repo = MockCatalogReader::new();
        repo.expect_list_tags().returning(|| {
            Ok(vec![
                Tag::new("t-css", "css", "#1d4ed8"),
                Tag::new("t-react", "react", "#0ea5e9"),
            ])
        });
        repo.expect_list_resources().returning(|| {
            Ok(vec![
                record("r1", "Tailwind", Some("https://r1.dev/favicon.ico")),
                record("r2", "Next.js", None),
            ])
        });
        repo.expect_list_resource_tags().returning(|| {
            Ok(vec![
                ResourceTagLink::new("r1", "t-css"),
                ResourceTagLink::new("r2", "t-react"),
            ])
        });
        repo
    }

    fn state(tags: &[&str]) -> ViewState {
        ViewState {
            selected_tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
            ..ViewState::default()
        }
    }

    #[actix_web::test]
    async fn page_filters_and_resolves_icons() {
        let data = load_catalog_page(Arc::new(repo()), state(&["css"])).await;

        assert_eq!(data.total, 2);
        assert_eq!(data.tools.len(), 1);
        assert_eq!(
            data.tools[0].icon,
            Icon::Favicon("https://r1.dev/favicon.ico".to_string())
        );
        assert!(data.error.is_none());
    }

    #[actix_web::test]
    async fn tag_chips_link_to_toggled_state() {
        let data = load_catalog_page(Arc::new(repo()), state(&["css"])).await;

        let css = &data.tags[0];
        let react = &data.tags[1];
        assert!(css.selected);
        assert_eq!(css.href, "/tools");
        assert!(!react.selected);
        assert_eq!(react.href, "/tools?tags=css%2Creact");
        assert_eq!(data.clear_href, "/tools");
        assert!(data.has_filters);
    }

    #[actix_web::test]
    async fn layout_links_keep_filters() {
        let data = load_catalog_page(Arc::new(repo()), state(&["css"])).await;

        let hrefs: Vec<&str> = data.layouts.iter().map(|o| o.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "/tools?tags=css&layout=icons",
                "/tools?tags=css&layout=cards",
                "/tools?tags=css&layout=bricks",
            ]
        );
        assert!(data.layouts[1].active);
    }

    #[actix_web::test]
    async fn store_failure_renders_empty_page_with_error() {
        let mut failing = MockCatalogReader::new();
        failing
            .expect_list_tags()
            .returning(|| Err(RepositoryError::NotFound));
        failing.expect_list_resources().returning(|| Ok(Vec::new()));
        failing
            .expect_list_resource_tags()
            .returning(|| Ok(Vec::new()));

        let data = load_catalog_page(Arc::new(failing), state(&["css"])).await;

        assert_eq!(data.total, 0);
        assert!(data.tools.is_empty());
        assert!(data.error.is_some());
        assert_eq!(data.retry_href, "/tools?tags=css");
    }
}
