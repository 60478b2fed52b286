//! JSON builder — the top of the pipeline.
//!
//! ```text
//! SubjectCollection ─▶ EventExtractor ─▶ Event ─▶ SlidePresenter ─▶ EventJson
//!                            │ no start date
//!                            ▼
//!                         (skipped)
//! ```
//!
//! Stateless: a builder can serve any number of calls, in parallel.

use crate::config::TimelineConfig;
use crate::extractor::EventExtractor;
use crate::json::{DateJson, EventJson, MediaJson, TextJson, TimelineDocument};
use crate::model::{Event, SubjectCollection};
use crate::presenter::{SimpleSlidePresenter, SlidePresenter};
use crate::{Error, Result};

/// Builds timeline documents from query results.
#[derive(Debug, Clone)]
pub struct JsonBuilder<P: SlidePresenter> {
    presenter: P,
    extractor: EventExtractor,
}

impl<P: SlidePresenter> JsonBuilder<P> {
    /// Builder with the default extraction rules.
    pub fn new(presenter: P) -> Self {
        Self { presenter, extractor: EventExtractor::default() }
    }

    pub fn with_extractor(mut self, extractor: EventExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn presenter(&self) -> &P { &self.presenter }
    pub fn extractor(&self) -> &EventExtractor { &self.extractor }

    /// Build the document for a whole result set.
    ///
    /// Subjects without a start date are skipped; any other failure aborts
    /// the call.
    pub fn build_timeline_json(&self, subjects: &SubjectCollection) -> Result<TimelineDocument> {
        let mut events = Vec::with_capacity(subjects.len());
        for subject in subjects {
            match self.extractor.extract(subject)? {
                Some(event) => events.push(self.build_event(&event)?),
                None => tracing::debug!(page = %subject.page(), "subject has no start date, skipped"),
            }
        }
        tracing::debug!(subjects = subjects.len(), events = events.len(), "built timeline");
        Ok(TimelineDocument { events })
    }

    /// Build the JSON for one event.
    pub fn build_event(&self, event: &Event<'_>) -> Result<EventJson> {
        let page = event.subject().page();
        let slide = self.presenter.present(event)?;

        if slide.headline.trim().is_empty() {
            return Err(Error::Presenter {
                page: page.display_title(),
                message: "empty headline".into(),
            });
        }
        if slide.media.as_ref().is_some_and(|m| m.url.trim().is_empty()) {
            return Err(Error::Presenter {
                page: page.display_title(),
                message: "media reference without URL".into(),
            });
        }

        Ok(EventJson {
            start_date: DateJson::from(event.start_date()),
            end_date: event.end_date().map(DateJson::from),
            text: TextJson { headline: slide.headline, body: slide.body },
            media: slide.media.map(MediaJson::from),
        })
    }

    /// Build and serialize to a compact JSON string.
    pub fn to_json_string(&self, subjects: &SubjectCollection) -> Result<String> {
        Ok(serde_json::to_string(&self.build_timeline_json(subjects)?)?)
    }

    /// Build and convert to a `serde_json::Value`.
    pub fn to_json_value(&self, subjects: &SubjectCollection) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.build_timeline_json(subjects)?)?)
    }
}

/// Builder wired from configuration with the default presenter.
impl JsonBuilder<SimpleSlidePresenter> {
    pub fn from_config(config: &TimelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            presenter: SimpleSlidePresenter::from_config(config),
            extractor: EventExtractor::new(config),
        })
    }
}
