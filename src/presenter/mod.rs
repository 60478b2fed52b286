//! # Slide Presenter Trait
//!
//! The contract between the JSON builder and whatever turns an event into
//! display text and media. The builder depends on nothing else.
//!
//! ## Implementations
//!
//! | Presenter | Module | Description |
//! |-----------|--------|-------------|
//! | `SimpleSlidePresenter` | `simple` | Title headline, property list body, file media |
//!
//! Presenters must be deterministic for identical input and only read the
//! event they are given.

pub mod resolver;
pub mod simple;

use serde::{Deserialize, Serialize};

use crate::model::Event;
use crate::Result;

pub use resolver::{DefaultPageResolver, PageResolver};
pub use simple::SimpleSlidePresenter;

// ============================================================================
// Slide
// ============================================================================

/// Display content for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub headline: String,
    pub body: Option<String>,
    pub media: Option<MediaReference>,
}

impl Slide {
    pub fn new(headline: impl Into<String>) -> Self {
        Self { headline: headline.into(), body: None, media: None }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_media(mut self, media: MediaReference) -> Self {
        self.media = Some(media);
        self
    }
}

/// An image (or other media) shown with an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaReference {
    pub url: String,
    pub thumbnail: Option<String>,
    pub caption: Option<String>,
}

impl MediaReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), thumbnail: None, caption: None }
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

// ============================================================================
// The Trait
// ============================================================================

/// Renders an event's display text and media.
pub trait SlidePresenter: Send + Sync {
    fn present(&self, event: &Event<'_>) -> Result<Slide>;
}

impl<P: SlidePresenter + ?Sized> SlidePresenter for &P {
    fn present(&self, event: &Event<'_>) -> Result<Slide> {
        (**self).present(event)
    }
}

impl<P: SlidePresenter + ?Sized> SlidePresenter for Box<P> {
    fn present(&self, event: &Event<'_>) -> Result<Slide> {
        (**self).present(event)
    }
}

impl<P: SlidePresenter + ?Sized> SlidePresenter for std::sync::Arc<P> {
    fn present(&self, event: &Event<'_>) -> Result<Slide> {
        (**self).present(event)
    }
}
