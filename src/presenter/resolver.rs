//! Page resolution — the host's view of a page: its title and its file URL.

use url::Url;

use crate::config::TimelineConfig;
use crate::model::PageIdentity;
use crate::{Error, Result};

/// Maps page identities to what the host knows about them.
pub trait PageResolver: Send + Sync {
    /// Human-readable title of the page.
    fn display_title(&self, page: &PageIdentity) -> Result<String>;

    /// URL of the media file the page stands for, `None` if it is not a file.
    fn media_url(&self, page: &PageIdentity) -> Result<Option<String>>;
}

/// Resolves titles from the identity itself and file URLs through
/// `Special:FilePath` under a base URL.
#[derive(Debug, Clone)]
pub struct DefaultPageResolver {
    base_url: String,
    file_namespace: String,
}

impl Default for DefaultPageResolver {
    fn default() -> Self {
        Self::from_config(&TimelineConfig::default())
    }
}

impl DefaultPageResolver {
    pub fn new(base_url: impl Into<String>, file_namespace: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            file_namespace: file_namespace.into(),
        }
    }

    pub fn from_config(config: &TimelineConfig) -> Self {
        Self::new(config.wiki_base_url.as_str(), config.file_namespace.as_str())
    }
}

impl PageResolver for DefaultPageResolver {
    fn display_title(&self, page: &PageIdentity) -> Result<String> {
        Ok(page.display_title())
    }

    fn media_url(&self, page: &PageIdentity) -> Result<Option<String>> {
        if !page.is_in_namespace(&self.file_namespace) || page.db_key().is_empty() {
            return Ok(None);
        }
        let file = encode_path_segment(page.db_key())?;
        Ok(Some(format!("{}/Special:FilePath/{file}", self.base_url)))
    }
}

/// Percent-encode one URL path segment (`?`, `#`, `%`, `/`, spaces, ...).
fn encode_path_segment(segment: &str) -> Result<String> {
    let mut scratch = Url::parse("http://localhost/").map_err(|e| Error::Resolver(e.to_string()))?;
    scratch
        .path_segments_mut()
        .map_err(|_| Error::Resolver("scratch URL cannot hold path segments".into()))?
        .clear()
        .push(segment);
    Ok(scratch.path().trim_start_matches('/').to_string())
}
