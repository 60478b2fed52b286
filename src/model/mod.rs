//! # Result Model
//!
//! Clean DTOs for a materialized semantic query result.
//! These types cross every boundary: host ↔ extractor ↔ presenter ↔ builder.
//!
//! Design rule: this module is pure data — no I/O, no state, no rendering.
//! Everything is immutable once constructed.

pub mod event;
pub mod page;
pub mod property;
pub mod subject;
pub mod temporal;
pub mod value;

pub use event::Event;
pub use page::PageIdentity;
pub use property::{
    PropertyDescriptor, PropertyValueCollection,
    TYPE_BOOLEAN, TYPE_NUMBER, TYPE_PAGE, TYPE_TEXT, TYPE_TIME, TYPE_URI,
};
pub use subject::{Subject, SubjectCollection};
pub use temporal::{CalendarModel, Precision, TemporalValue};
pub use value::RawValue;
