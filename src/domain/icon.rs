use serde::Serialize;

/// Icon shown next to a resource, resolved once when the view is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum Icon {
    /// The resource's own favicon.
    Favicon(String),
    /// Generic external-link glyph.
    Fallback,
}

impl Icon {
    /// Pick the favicon when one is present and looks like a fetchable URL.
    pub fn resolve(favicon: Option<&str>) -> Self {
        match favicon.map(str::trim) {
            Some(url) if is_fetchable(url) => Icon::Favicon(url.to_string()),
            _ => Icon::Fallback,
        }
    }
}

fn is_fetchable(url: &str) -> bool {
    url.starts_with("https://")
        || url.starts_with("http://")
        || url.starts_with("//")
        || url.starts_with("data:image/")
        || url.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_http_favicons() {
        assert_eq!(
            Icon::resolve(Some(" https://github.com/favicon.ico ")),
            Icon::Favicon("https://github.com/favicon.ico".to_string())
        );
    }

    #[test]
    fn falls_back_when_missing_or_unusable() {
        assert_eq!(Icon::resolve(None), Icon::Fallback);
        assert_eq!(Icon::resolve(Some("")), Icon::Fallback);
        assert_eq!(Icon::resolve(Some("javascript:alert(1)")), Icon::Fallback);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let value = serde_json::to_value(Icon::Favicon("/icon.png".to_string()))
            .expect("serialization should succeed");
        assert_eq!(value["kind"], "favicon");
        assert_eq!(value["url"], "/icon.png");

        let fallback = serde_json::to_value(Icon::Fallback).expect("serialization should succeed");
        assert_eq!(fallback["kind"], "fallback");
    }
}
