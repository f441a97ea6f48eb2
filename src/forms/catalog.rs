use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::catalog::{CatalogQuery, ToolFormat};
use crate::domain::view_state::{Layout, ViewAction, ViewState, reduce};

/// Maximum accepted length of a search term.
const SEARCH_MAX_LEN: u64 = 200;
/// Maximum accepted length of the comma-separated tag list.
const TAGS_MAX_LEN: u64 = 2000;

/// Result type returned by the catalog query helpers.
pub type CatalogFormResult<T> = Result<T, CatalogFormError>;

/// Errors that can occur while processing catalog query parameters.
#[derive(Debug, Error)]
pub enum CatalogFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The raw query string could not be decoded.
    #[error("malformed query string: {0}")]
    Malformed(#[from] serde_html_form::de::Error),
}

/// Query parameters of `GET /api/tools`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ToolsApiQuery {
    /// `full` (default) or `compact`.
    pub format: Option<String>,
    /// Comma-separated tag names.
    #[validate(length(max = TAGS_MAX_LEN))]
    pub tags: Option<String>,
    /// Free-text search term.
    #[validate(length(max = SEARCH_MAX_LEN))]
    pub search: Option<String>,
}

impl ToolsApiQuery {
    /// Decode a raw query string. Validation happens in [`Self::into_catalog_query`].
    pub fn parse(query_string: &str) -> CatalogFormResult<Self> {
        Ok(serde_html_form::from_str(query_string)?)
    }

    /// Validate the parameters and turn them into a response format and filter.
    pub fn into_catalog_query(self) -> CatalogFormResult<(ToolFormat, CatalogQuery)> {
        self.validate()?;

        let format = ToolFormat::from_param(self.format.as_deref());
        let mut catalog_query =
            CatalogQuery::new().tags(split_tag_list(self.tags.as_deref().unwrap_or_default()));
        if let Some(search) = self.search.as_deref() {
            catalog_query = catalog_query.search(search);
        }

        Ok((format, catalog_query))
    }
}

/// URL state of the catalog page: `q`, `tags` and an optional `layout` switch.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CatalogPageQuery {
    #[validate(length(max = SEARCH_MAX_LEN))]
    pub q: Option<String>,
    #[validate(length(max = TAGS_MAX_LEN))]
    pub tags: Option<String>,
    pub layout: Option<String>,
}

impl CatalogPageQuery {
    /// Decode a raw query string.
    pub fn parse(query_string: &str) -> CatalogFormResult<Self> {
        let query: Self = serde_html_form::from_str(query_string)?;
        query.validate()?;
        Ok(query)
    }

    /// Build the view state, starting from the stored layout preference.
    ///
    /// Returns the requested layout separately when the URL asked to switch,
    /// so the caller can persist it.
    pub fn into_view_state(self, preference: Option<&str>) -> (ViewState, Option<Layout>) {
        let mut state = ViewState {
            layout: Layout::from_preference(preference),
            ..ViewState::default()
        };

        if let Some(search) = self.q {
            state = reduce(&state, ViewAction::SetSearch(search));
        }
        for tag in split_tag_list(self.tags.as_deref().unwrap_or_default()) {
            if !state.is_selected(&tag) {
                state = reduce(&state, ViewAction::ToggleTag(tag));
            }
        }

        let requested = self.layout.and_then(|value| value.parse::<Layout>().ok());
        if let Some(layout) = requested {
            state = reduce(&state, ViewAction::SetLayout(layout));
        }

        (state, requested)
    }
}

/// Split a comma-separated tag list, trimming entries and dropping empty ones.
pub fn split_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
