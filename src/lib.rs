//! # modern-timeline — Timeline JSON from semantic query results
//!
//! Turns the subjects of a semantic query result set into the event document
//! a timeline widget consumes.
//!
//! ## Design Principles
//!
//! 1. **Pure pipeline**: `SubjectCollection` in, `TimelineDocument` out. No I/O, no state.
//! 2. **Clean DTOs**: `Subject`, `PropertyValueCollection`, `RawValue` are immutable values
//! 3. **Trait seams**: `SlidePresenter` and `PageResolver` are the only collaborators
//! 4. **Absence is absence**: optional JSON keys are omitted, never `null`
//!
//! ## Quick Start
//!
//! ```rust
//! use modern_timeline::{
//!     JsonBuilder, PageIdentity, PropertyDescriptor, PropertyValueCollection,
//!     SimpleSlidePresenter, Subject, SubjectCollection, TemporalValue,
//! };
//!
//! # fn example() -> modern_timeline::Result<()> {
//! let subject = Subject::new(
//!     PageIdentity::new("Some Page"),
//!     vec![PropertyValueCollection::new(
//!         PropertyDescriptor::time("Has date"),
//!         vec![TemporalValue::gregorian(2019, 8, 2, 16, 7, 42)?.into()],
//!     )],
//! );
//!
//! let builder = JsonBuilder::new(SimpleSlidePresenter::new());
//! let json = builder.to_json_string(&SubjectCollection::new(vec![subject]))?;
//! assert!(json.contains("\"headline\":\"Some Page\""));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Output shape
//!
//! | Key | Presence | Content |
//! |-----|----------|---------|
//! | `start_date` | always | `{year, month, day, hour, minute, second}` |
//! | `end_date` | when the subject has an end date | same shape |
//! | `text` | always | `{headline, body?}` |
//! | `media` | when the presenter reports one | `{url, thumbnail?, caption?}` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod config;
pub mod extractor;
pub mod presenter;
pub mod json;
pub mod builder;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    CalendarModel, Event, PageIdentity, Precision, PropertyDescriptor,
    PropertyValueCollection, RawValue, Subject, SubjectCollection, TemporalValue,
};

// ============================================================================
// Re-exports: Pipeline
// ============================================================================

pub use config::TimelineConfig;
pub use extractor::EventExtractor;
pub use presenter::{
    DefaultPageResolver, MediaReference, PageResolver, SimpleSlidePresenter, Slide,
    SlidePresenter,
};
pub use json::{DateJson, EventJson, MediaJson, TextJson, TimelineDocument};
pub use builder::JsonBuilder;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed temporal value in property '{label}': {reason}")]
    MalformedTemporal { label: String, reason: String },

    #[error("Invalid temporal value: {0}")]
    InvalidTemporal(String),

    #[error("Presenter error for page '{page}': {message}")]
    Presenter { page: String, message: String },

    #[error("Page resolution error: {0}")]
    Resolver(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
