//! Timeline JSON shape.
//!
//! ```text
//! { "events": [
//!     { "start_date": {year, month, day, hour, minute, second},
//!       "end_date":   {...},              // only with an end date
//!       "text":       {headline, body?},
//!       "media":      {url, thumbnail?, caption?} }  // only with media
//! ] }
//! ```
//!
//! Optional keys are skipped at serialization time, never written as `null`.

use serde::{Deserialize, Serialize};

use crate::model::TemporalValue;
use crate::presenter::MediaReference;

/// The whole document handed to the timeline widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineDocument {
    pub events: Vec<EventJson>,
}

/// One timeline slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventJson {
    pub start_date: DateJson,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateJson>,
    pub text: TextJson,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaJson>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateJson {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl From<&TemporalValue> for DateJson {
    fn from(t: &TemporalValue) -> Self {
        Self {
            year: t.year(),
            month: t.month(),
            day: t.day(),
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextJson {
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaJson {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl From<MediaReference> for MediaJson {
    fn from(m: MediaReference) -> Self {
        Self { url: m.url, thumbnail: m.thumbnail, caption: m.caption }
    }
}
