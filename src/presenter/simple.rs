//! Default presenter: page title as headline, printed properties as body,
//! first file page as media.

use hashbrown::HashSet;

use super::{DefaultPageResolver, MediaReference, PageResolver, Slide, SlidePresenter};
use crate::config::{label_set, normalize_label, TimelineConfig};
use crate::model::*;
use crate::Result;

/// Presents an event from its subject's page and non-date property values.
///
/// - headline: resolved display title of the subject page
/// - body: one `Label: value, value` line per property, omitted when empty;
///   date collections and the collection that supplied the media are left out
/// - media: first file page in the image property, or in any property when
///   no image property is configured
#[derive(Debug, Clone)]
pub struct SimpleSlidePresenter<R = DefaultPageResolver> {
    resolver: R,
    date_types: HashSet<String>,
    /// Start/end labels, filled only when labels alone mark dates.
    date_labels: HashSet<String>,
    image_property: Option<String>,
}

impl Default for SimpleSlidePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleSlidePresenter {
    pub fn new() -> Self {
        Self::from_config(&TimelineConfig::default())
    }

    pub fn from_config(config: &TimelineConfig) -> Self {
        Self::with_resolver(DefaultPageResolver::from_config(config), config)
    }
}

impl<R: PageResolver> SimpleSlidePresenter<R> {
    pub fn with_resolver(resolver: R, config: &TimelineConfig) -> Self {
        Self {
            resolver,
            date_types: config.date_type_set(),
            date_labels: if config.recognize_labels_without_type {
                label_set(&config.start_date_labels)
                    .into_iter()
                    .chain(label_set(&config.end_date_labels))
                    .collect()
            } else {
                HashSet::new()
            },
            image_property: config
                .image_property
                .as_deref()
                .map(normalize_label)
                .filter(|l| !l.is_empty()),
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    fn is_image_property(&self, pv: &PropertyValueCollection) -> bool {
        self.image_property
            .as_deref()
            .is_some_and(|image| normalize_label(pv.label()) == image)
    }

    fn is_date_property(&self, pv: &PropertyValueCollection) -> bool {
        self.date_types.contains(pv.type_id())
            || self.date_labels.contains(&normalize_label(pv.label()))
    }

    fn format_value(&self, value: &RawValue) -> Result<String> {
        match value {
            RawValue::Page(page) => self.resolver.display_title(page),
            other => Ok(other.to_string()),
        }
    }

    fn body(&self, subject: &Subject, media_source: Option<usize>) -> Result<Option<String>> {
        let mut lines = Vec::new();
        for (index, pv) in subject.property_values().iter().enumerate() {
            if pv.is_empty()
                || pv.label().trim().is_empty()
                || self.is_date_property(pv)
                || self.is_image_property(pv)
                || media_source == Some(index)
            {
                continue;
            }
            let values = pv
                .values()
                .iter()
                .map(|v| self.format_value(v))
                .collect::<Result<Vec<_>>>()?;
            lines.push(format!("{}: {}", pv.label().trim(), values.join(", ")));
        }
        Ok(if lines.is_empty() { None } else { Some(lines.join("\n")) })
    }

    /// The media reference and the index of the collection it came from.
    fn media(&self, subject: &Subject) -> Result<Option<(usize, MediaReference)>> {
        let image_only = self.image_property.is_some();
        let pages = subject
            .property_values()
            .iter()
            .enumerate()
            .filter(|(_, pv)| !image_only || self.is_image_property(pv))
            .flat_map(|(index, pv)| pv.values().iter().map(move |v| (index, v)))
            .filter_map(|(index, v)| v.as_page().map(|page| (index, page)));

        for (index, page) in pages {
            if let Some(url) = self.resolver.media_url(page)? {
                let media = MediaReference::new(url.clone())
                    .with_thumbnail(url)
                    .with_caption(self.resolver.display_title(page)?);
                return Ok(Some((index, media)));
            }
        }
        Ok(None)
    }
}

impl<R: PageResolver> SlidePresenter for SimpleSlidePresenter<R> {
    fn present(&self, event: &Event<'_>) -> Result<Slide> {
        let subject = event.subject();
        let mut slide = Slide::new(self.resolver.display_title(subject.page())?);
        let media = self.media(subject)?;
        if let Some(body) = self.body(subject, media.as_ref().map(|(index, _)| *index))? {
            slide = slide.with_body(body);
        }
        if let Some((_, media)) = media {
            slide = slide.with_media(media);
        }
        Ok(slide)
    }
}
