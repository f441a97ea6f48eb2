use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::catalog::CatalogQuery;

/// Cookie name under which the preferred layout is persisted.
pub const LAYOUT_PREFERENCE_KEY: &str = "devcrate-layout";

/// Visual arrangement used to render the filtered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Icons,
    #[default]
    Cards,
    Bricks,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown layout `{0}`")]
pub struct UnknownLayout(pub String);

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Icons, Layout::Cards, Layout::Bricks];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Icons => "icons",
            Layout::Cards => "cards",
            Layout::Bricks => "bricks",
        }
    }

    /// Read a stored preference, falling back to the default layout when the
    /// value is absent or not recognised.
    pub fn from_preference(value: Option<&str>) -> Self {
        value
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "icons" => Ok(Layout::Icons),
            "cards" => Ok(Layout::Cards),
            "bricks" => Ok(Layout::Bricks),
            other => Err(UnknownLayout(other.to_string())),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Browsing state of one catalog view: search text, selected tag names and layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search: String,
    pub selected_tags: Vec<String>,
    pub layout: Layout,
}

/// State transitions triggered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetSearch(String),
    ToggleTag(String),
    ClearFilters,
    SetLayout(Layout),
}

/// Apply `action` to `state`, producing the next state.
pub fn reduce(state: &ViewState, action: ViewAction) -> ViewState {
    let mut next = state.clone();
    match action {
        ViewAction::SetSearch(search) => next.search = search,
        ViewAction::ToggleTag(name) => {
            if let Some(position) = next.selected_tags.iter().position(|tag| *tag == name) {
                next.selected_tags.remove(position);
            } else {
                next.selected_tags.push(name);
            }
        }
        ViewAction::ClearFilters => {
            next.search.clear();
            next.selected_tags.clear();
        }
        ViewAction::SetLayout(layout) => next.layout = layout,
    }
    next
}

#[derive(Serialize)]
struct UrlState<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<String>,
}

impl ViewState {
    /// Filter options derived from the current state.
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery::new()
            .tags(self.selected_tags.iter().cloned())
            .search(self.search.as_str())
    }

    pub fn has_filters(&self) -> bool {
        !self.search.trim().is_empty() || !self.selected_tags.is_empty()
    }

    pub fn is_selected(&self, tag_name: &str) -> bool {
        self.selected_tags.iter().any(|tag| tag == tag_name)
    }

    /// Encode the shareable part of the state (`q` and comma-joined `tags`)
    /// as a URL query string. The layout is a per-browser preference and is
    /// not part of the shared URL.
    pub fn to_query_string(&self) -> Result<String, serde_html_form::ser::Error> {
        let search = self.search.trim();
        let url_state = UrlState {
            q: (!search.is_empty()).then_some(search),
            tags: (!self.selected_tags.is_empty()).then(|| self.selected_tags.join(",")),
        };
        serde_html_form::to_string(&url_state)
    }
}
