use chrono::{NaiveDateTime, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::domain::icon::Icon;
use crate::domain::tag::Tag;

/// Flat resource row as stored, before tags are attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Opaque, stable identifier of the resource.
    pub id: String,
    /// Display title of the tool.
    pub title: String,
    /// Link to the tool's homepage.
    pub url: String,
    /// Optional favicon URL.
    pub favicon: Option<String>,
    /// Timestamp (UTC) for when the resource was added to the catalog.
    pub created_at: NaiveDateTime,
    /// Timestamp (UTC) of the last update to the resource.
    pub updated_at: NaiveDateTime,
}

/// Catalog entry with its tags assembled from the link table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub url: String,
    pub favicon: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Tags in the order their link rows were fetched.
    pub tags: Vec<Tag>,
}

impl Resource {
    /// Attach `tags` to a flat record.
    pub fn from_record(record: ResourceRecord, tags: Vec<Tag>) -> Self {
        Self {
            id: record.id,
            title: record.title,
            url: record.url,
            favicon: record.favicon,
            created_at: record.created_at,
            updated_at: record.updated_at,
            tags,
        }
    }

    /// Whether the resource carries a favicon the catalog would render.
    /// Shares its rule with [`Icon::resolve`].
    pub fn has_favicon(&self) -> bool {
        matches!(Icon::resolve(self.favicon.as_deref()), Icon::Favicon(_))
    }

    /// Whether any of the resource's tags is named `name`.
    pub fn has_tag_named(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name == name)
    }
}

/// Payload required to insert a new resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    pub id: String,
    pub title: String,
    pub url: String,
    pub favicon: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewResource {
    /// Build a resource payload stamped with the current UTC time.
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            favicon: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a favicon URL.
    pub fn with_favicon(mut self, favicon: impl Into<String>) -> Self {
        self.favicon = Some(favicon.into());
        self
    }

    /// Override the creation and update timestamps.
    pub fn created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }
}

/// Render a naive UTC timestamp as ISO-8601 with millisecond precision and a `Z` suffix.
pub fn to_iso8601(timestamp: &NaiveDateTime) -> String {
    timestamp
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(favicon: Option<&str>) -> ResourceRecord {
        let created_at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|date| date.and_hms_opt(8, 30, 0))
            .unwrap_or_default();
        ResourceRecord {
            id: "r1".to_string(),
            title: "Vite".to_string(),
            url: "https://vitejs.dev".to_string(),
            favicon: favicon.map(str::to_string),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn empty_favicon_counts_as_missing() {
        assert!(Resource::from_record(record(Some("https://vitejs.dev/icon.svg")), vec![]).has_favicon());
        assert!(!Resource::from_record(record(Some("  ")), vec![]).has_favicon());
        assert!(!Resource::from_record(record(None), vec![]).has_favicon());
    }

    #[test]
    fn unrenderable_favicon_counts_as_missing() {
        let resource = Resource::from_record(record(Some("favicon.ico")), vec![]);

        assert!(!resource.has_favicon());
        assert_eq!(Icon::resolve(resource.favicon.as_deref()), Icon::Fallback);
    }

    #[test]
    fn iso8601_uses_millis_and_zulu() {
        let rendered = to_iso8601(&record(None).created_at);
        assert_eq!(rendered, "2024-03-05T08:30:00.000Z");
    }
}
