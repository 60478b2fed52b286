//! Page identity — the wiki page a subject or page-typed value refers to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A page in some namespace, optionally narrowed to a subobject.
///
/// Titles are stored in db-key form (underscores, first letter upper-cased),
/// so `"some page"` and `"Some_page"` identify the same page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawPage")]
pub struct PageIdentity {
    /// Namespace name, empty for the main namespace.
    namespace: String,
    db_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subobject: Option<String>,
}

impl PageIdentity {
    /// Page in the main namespace.
    pub fn new(title: impl AsRef<str>) -> Self {
        Self::in_namespace("", title)
    }

    pub fn in_namespace(namespace: impl AsRef<str>, title: impl AsRef<str>) -> Self {
        Self {
            namespace: to_db_key(namespace.as_ref()),
            db_key: to_db_key(title.as_ref()),
            subobject: None,
        }
    }

    pub fn with_subobject(mut self, name: impl Into<String>) -> Self {
        self.subobject = Some(name.into());
        self
    }

    pub fn namespace(&self) -> &str { &self.namespace }
    pub fn db_key(&self) -> &str { &self.db_key }
    pub fn subobject(&self) -> Option<&str> { self.subobject.as_deref() }

    pub fn is_in_namespace(&self, namespace: &str) -> bool {
        self.namespace == to_db_key(namespace)
    }

    /// Human-readable title: `Namespace:Title text#subobject`.
    pub fn display_title(&self) -> String {
        let mut out = String::new();
        if !self.namespace.is_empty() {
            out.push_str(&self.namespace.replace('_', " "));
            out.push(':');
        }
        out.push_str(&self.db_key.replace('_', " "));
        if let Some(sub) = &self.subobject {
            out.push('#');
            out.push_str(sub);
        }
        out
    }

    /// Db-key form with namespace prefix, suitable for URLs.
    pub fn prefixed_db_key(&self) -> String {
        if self.namespace.is_empty() {
            self.db_key.clone()
        } else {
            format!("{}:{}", self.namespace, self.db_key)
        }
    }
}

// ============================================================================
// Serde shadow: deserialized identities are normalized like constructed ones
// ============================================================================

#[derive(Deserialize)]
struct RawPage {
    #[serde(default)]
    namespace: String,
    #[serde(alias = "title")]
    db_key: String,
    #[serde(default)]
    subobject: Option<String>,
}

impl From<RawPage> for PageIdentity {
    fn from(raw: RawPage) -> Self {
        let page = Self::in_namespace(raw.namespace, raw.db_key);
        match raw.subobject {
            Some(sub) => page.with_subobject(sub),
            None => page,
        }
    }
}

fn to_db_key(text: &str) -> String {
    let trimmed = text.trim().replace(' ', "_");
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for PageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_title() {
        let page = PageIdentity::new("some page");
        assert_eq!(page.db_key(), "Some_page");
        assert_eq!(page.display_title(), "Some page");
        assert_eq!(page, PageIdentity::new("Some_page"));
    }

    #[test]
    fn test_namespace_and_subobject() {
        let page = PageIdentity::in_namespace("File", "Moon landing.jpg");
        assert_eq!(page.display_title(), "File:Moon landing.jpg");
        assert_eq!(page.prefixed_db_key(), "File:Moon_landing.jpg");
        assert!(page.is_in_namespace("file"));

        let sub = PageIdentity::new("Apollo 11").with_subobject("launch");
        assert_eq!(sub.display_title(), "Apollo 11#launch");
    }

    #[test]
    fn test_deserialize_normalizes() {
        let page: PageIdentity =
            serde_json::from_str(r#"{"namespace": "file", "db_key": "moon landing.jpg"}"#).unwrap();
        assert_eq!(page, PageIdentity::in_namespace("File", "Moon landing.jpg"));
        assert!(page.is_in_namespace("File"));

        let page: PageIdentity =
            serde_json::from_str(r#"{"title": "apollo 11", "subobject": "launch"}"#).unwrap();
        assert_eq!(page.db_key(), "Apollo_11");
        assert_eq!(page.subobject(), Some("launch"));
    }

    #[test]
    fn test_serialize_round_trip() {
        let page = PageIdentity::in_namespace("File", "Moon landing.jpg");
        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(json, r#"{"namespace":"File","db_key":"Moon_landing.jpg"}"#);
        assert_eq!(serde_json::from_str::<PageIdentity>(&json).unwrap(), page);
    }
}
