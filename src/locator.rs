//! Asset locator formatting.
//!
//! Production deployments serve uploads through a CDN; development serves
//! them from a local static prefix. Either way segments are joined with
//! exactly one slash, whatever stray slashes the configured values carry.

use crate::domain::ContentKind;

/// Formats a locator (URL or path) for an uploaded asset.
///
/// Injected into the content resolver so the externally visible URL scheme
/// stays a deployment concern.
pub trait AssetLocator: Send + Sync {
    /// Derive the locator for an asset of the given kind.
    fn locate(&self, kind: ContentKind, name: &str) -> String;
}

/// Join `base` and `path` with exactly one slash between them.
///
/// Contract: no double slash, no missing slash, independent of a trailing
/// slash on `base` or a leading slash on `path`.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Development stand-in deriving placeholder paths
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderLocator;

impl AssetLocator for PlaceholderLocator {
    fn locate(&self, kind: ContentKind, name: &str) -> String {
        format!("/path/to/{}/{}", kind, name)
    }
}

/// CDN-aware locator driven by deployment configuration
#[derive(Debug, Clone)]
pub struct CdnLocator {
    production: bool,
    cdn_domain: String,
    static_prefix: String,
}

impl CdnLocator {
    /// Create a locator.
    ///
    /// In production with a non-empty `cdn_domain`, locators point at the
    /// CDN; otherwise they point under `static_prefix`.
    pub fn new(
        production: bool,
        cdn_domain: impl Into<String>,
        static_prefix: impl Into<String>,
    ) -> Self {
        Self {
            production,
            cdn_domain: cdn_domain.into(),
            static_prefix: static_prefix.into(),
        }
    }
}

impl AssetLocator for CdnLocator {
    fn locate(&self, kind: ContentKind, name: &str) -> String {
        let asset_path = format!("{}/{}", kind, name);
        if self.production && !self.cdn_domain.is_empty() {
            join_url(&self.cdn_domain, &asset_path)
        } else {
            join_url(&self.static_prefix, &asset_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_single_slash_grid() {
        let expected = "https://cdn.example.com/video/intro.mp4";

        assert_eq!(join_url("https://cdn.example.com", "video/intro.mp4"), expected);
        assert_eq!(join_url("https://cdn.example.com/", "video/intro.mp4"), expected);
        assert_eq!(join_url("https://cdn.example.com", "/video/intro.mp4"), expected);
        assert_eq!(join_url("https://cdn.example.com/", "/video/intro.mp4"), expected);
    }

    #[test]
    fn test_placeholder_paths() {
        let locator = PlaceholderLocator;
        assert_eq!(
            locator.locate(ContentKind::Video, "intro.mp4"),
            "/path/to/video/intro.mp4"
        );
        assert_eq!(
            locator.locate(ContentKind::Document, "syllabus.pdf"),
            "/path/to/document/syllabus.pdf"
        );
    }

    #[test]
    fn test_cdn_locator_production_vs_development() {
        let prod = CdnLocator::new(true, "https://d123.cloudfront.net/", "/static");
        assert_eq!(
            prod.locate(ContentKind::Video, "intro.mp4"),
            "https://d123.cloudfront.net/video/intro.mp4"
        );

        let dev = CdnLocator::new(false, "https://d123.cloudfront.net", "/static/");
        assert_eq!(
            dev.locate(ContentKind::Document, "syllabus.pdf"),
            "/static/document/syllabus.pdf"
        );
    }

    #[test]
    fn test_cdn_locator_falls_back_without_domain() {
        // Production flag alone is not enough; an empty domain means local
        // serving.
        let locator = CdnLocator::new(true, "", "/static");
        assert_eq!(
            locator.locate(ContentKind::Video, "intro.mp4"),
            "/static/video/intro.mp4"
        );
    }
}
