//! Event — a subject that made it onto the timeline.

use super::{Subject, TemporalValue};

/// A subject with its resolved temporal bounds.
///
/// The start date is mandatory: a subject without one never becomes an `Event`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<'s> {
    subject: &'s Subject,
    start_date: TemporalValue,
    end_date: Option<TemporalValue>,
}

impl<'s> Event<'s> {
    pub fn new(subject: &'s Subject, start_date: TemporalValue, end_date: Option<TemporalValue>) -> Self {
        Self { subject, start_date, end_date }
    }

    pub fn subject(&self) -> &'s Subject { self.subject }
    pub fn start_date(&self) -> &TemporalValue { &self.start_date }
    pub fn end_date(&self) -> Option<&TemporalValue> { self.end_date.as_ref() }
}
