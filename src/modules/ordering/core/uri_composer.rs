/// Placeholder host stored in seeded catalog picture references.
pub const CATALOG_BASE_URL_PLACEHOLDER: &str = "http://catalogbaseurltobereplaced";

/// Turns a stored picture reference into a fully qualified URI.
pub trait UriComposer: Send + Sync {
    fn compose_picture_uri(&self, stored: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct CatalogUriComposer {
    base_url: String,
}

impl CatalogUriComposer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl UriComposer for CatalogUriComposer {
    fn compose_picture_uri(&self, stored: &str) -> String {
        if stored.contains(CATALOG_BASE_URL_PLACEHOLDER) {
            return stored.replace(CATALOG_BASE_URL_PLACEHOLDER, &self.base_url);
        }
        if stored.starts_with("http://") || stored.starts_with("https://") {
            return stored.to_string();
        }
        format!("{}/{}", self.base_url, stored.trim_start_matches('/'))
    }
}
