//! Timeline configuration.
//!
//! Which type ids count as dates, which labels name start and end dates, and
//! where media lives. The host decides where the JSON comes from; this module
//! only parses and validates it.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::model::TYPE_TIME;
use crate::{Error, Result};

/// Configuration for extraction and the default presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Type ids recognized as temporal.
    pub date_type_ids: Vec<String>,
    /// Labels that mark a date collection as the start date.
    pub start_date_labels: Vec<String>,
    /// Labels that mark a date collection as the end date.
    pub end_date_labels: Vec<String>,
    /// Use the second unlabelled date collection as end date when no
    /// collection carries an end-date label.
    pub positional_end_date: bool,
    /// Treat collections with a start/end label as dates even when their
    /// declared type is not temporal.
    pub recognize_labels_without_type: bool,
    /// Label of the property holding the event image.
    pub image_property: Option<String>,
    /// Namespace whose pages are media files.
    pub file_namespace: String,
    /// Base URL media URLs are built from, e.g. `https://wiki.example/index.php`.
    pub wiki_base_url: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            date_type_ids: vec![TYPE_TIME.to_string()],
            start_date_labels: vec!["Start date".into(), "Start".into()],
            end_date_labels: vec!["End date".into(), "End".into()],
            positional_end_date: true,
            recognize_labels_without_type: false,
            image_property: None,
            file_namespace: "File".into(),
            wiki_base_url: "/index.php".into(),
        }
    }
}

impl TimelineConfig {
    /// Parse configuration from a JSON string and validate it.
    /// Missing keys keep their defaults.
    pub fn from_json(content: &str) -> Result<Self> {
        let mut config: TimelineConfig = serde_json::from_str(content)?;
        config.validate()?;
        config.wiki_base_url = config.wiki_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.date_type_ids.iter().all(|t| t.trim().is_empty()) {
            return Err(Error::Config("date_type_ids must name at least one type".into()));
        }
        if self.file_namespace.trim().is_empty() {
            return Err(Error::Config("file_namespace must not be empty".into()));
        }
        let start = label_set(&self.start_date_labels);
        if let Some(shared) = self.end_date_labels.iter().find(|l| start.contains(&normalize_label(l))) {
            return Err(Error::Config(format!(
                "label '{shared}' is configured as both start and end date"
            )));
        }
        Ok(())
    }

    pub(crate) fn date_type_set(&self) -> HashSet<String> {
        self.date_type_ids
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// Labels compare case-insensitively with surrounding whitespace ignored.
pub(crate) fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

pub(crate) fn label_set(labels: &[String]) -> HashSet<String> {
    labels.iter().map(|l| normalize_label(l)).filter(|l| !l.is_empty()).collect()
}
