//! Event extraction — decides which subjects are timeline events.
//!
//! A subject becomes an event when one of its property-value collections
//! yields a start date. Collections are recognized as dates by declared type
//! id; labels only decide which role (start or end) a date collection plays.
//!
//! ```text
//! Subject ──scan property_values──▶ start? ──no──▶ (skipped)
//!                                     │ yes
//!                                     ▼
//!                               end? (label, then position)
//!                                     ▼
//!                        Event { subject, start, end? }
//! ```

use hashbrown::HashSet;

use crate::config::{label_set, normalize_label, TimelineConfig};
use crate::model::*;
use crate::{Error, Result};

/// Role a date collection plays on its subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateRole {
    Start,
    End,
    /// Date-typed but not labelled either way: first is start, next may be end.
    Unlabelled,
}

/// Extracts at most one `Event` per subject.
#[derive(Debug, Clone)]
pub struct EventExtractor {
    date_types: HashSet<String>,
    start_labels: HashSet<String>,
    end_labels: HashSet<String>,
    positional_end: bool,
    labels_without_type: bool,
}

impl Default for EventExtractor {
    fn default() -> Self {
        Self::new(&TimelineConfig::default())
    }
}

impl EventExtractor {
    pub fn new(config: &TimelineConfig) -> Self {
        Self {
            date_types: config.date_type_set(),
            start_labels: label_set(&config.start_date_labels),
            end_labels: label_set(&config.end_date_labels),
            positional_end: config.positional_end_date,
            labels_without_type: config.recognize_labels_without_type,
        }
    }

    /// Whether a collection's declared type is temporal.
    pub fn is_date_collection(&self, pv: &PropertyValueCollection) -> bool {
        self.date_types.contains(pv.type_id())
    }

    fn classify(&self, pv: &PropertyValueCollection) -> Option<DateRole> {
        let label = normalize_label(pv.label());
        let labelled = if self.end_labels.contains(&label) {
            Some(DateRole::End)
        } else if self.start_labels.contains(&label) {
            Some(DateRole::Start)
        } else {
            None
        };

        if self.is_date_collection(pv) {
            Some(labelled.unwrap_or(DateRole::Unlabelled))
        } else if self.labels_without_type {
            labelled
        } else {
            None
        }
    }

    /// Extract the event for one subject.
    ///
    /// Returns `Ok(None)` when the subject has no non-empty start-date
    /// collection. The first value of the chosen collection is used; a value
    /// that is not a temporal point is an error.
    pub fn extract<'s>(&self, subject: &'s Subject) -> Result<Option<Event<'s>>> {
        let mut start: Option<&PropertyValueCollection> = None;
        let mut labelled_end: Option<&PropertyValueCollection> = None;
        let mut positional_end: Option<&PropertyValueCollection> = None;

        for pv in subject.property_values() {
            let Some(role) = self.classify(pv) else { continue };
            if pv.is_empty() {
                tracing::trace!(page = %subject.page(), label = pv.label(), "empty date collection");
                continue;
            }
            match role {
                DateRole::End if labelled_end.is_none() => labelled_end = Some(pv),
                DateRole::Start if start.is_none() => start = Some(pv),
                DateRole::End | DateRole::Start => skipped(subject, pv, role),
                DateRole::Unlabelled => {
                    if start.is_none() {
                        start = Some(pv);
                    } else if self.positional_end && positional_end.is_none() {
                        positional_end = Some(pv);
                    } else {
                        skipped(subject, pv, role);
                    }
                }
            }
        }

        let Some(start) = start else {
            return Ok(None);
        };
        let start_date = coerce_first(start)?;
        let end_date = labelled_end
            .or(positional_end)
            .map(coerce_first)
            .transpose()?;

        if let Some(end) = &end_date {
            if end.sort_key() < start_date.sort_key() {
                tracing::warn!(
                    page = %subject.page(),
                    start = %start_date,
                    end = %end,
                    "end date precedes start date"
                );
            }
        }

        Ok(Some(Event::new(subject, start_date, end_date)))
    }

    /// Extract events for a whole result set, in input order.
    pub fn extract_all<'s>(&self, subjects: &'s SubjectCollection) -> Result<Vec<Event<'s>>> {
        let mut events = Vec::with_capacity(subjects.len());
        for subject in subjects {
            if let Some(event) = self.extract(subject)? {
                events.push(event);
            }
        }
        Ok(events)
    }
}

/// A date collection lost its role to an earlier one in scan order.
fn skipped(subject: &Subject, pv: &PropertyValueCollection, role: DateRole) {
    tracing::debug!(
        page = %subject.page(),
        label = pv.label(),
        ?role,
        "date collection skipped, role already taken"
    );
}

/// First value of a non-empty date collection as a temporal point.
fn coerce_first(pv: &PropertyValueCollection) -> Result<TemporalValue> {
    let malformed = |reason: String| Error::MalformedTemporal {
        label: pv.label().to_string(),
        reason,
    };
    match pv.first() {
        Some(RawValue::Time(t)) => Ok(*t),
        Some(RawValue::Text(s)) => s.parse().map_err(|e: Error| malformed(e.to_string())),
        Some(other) => Err(malformed(format!("expected a date, got {}", other.type_name()))),
        None => Err(malformed("no values".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> RawValue {
        TemporalValue::ymd(y, m, d).unwrap().into()
    }

    fn dates(label: &str, values: Vec<RawValue>) -> PropertyValueCollection {
        PropertyValueCollection::new(PropertyDescriptor::time(label), values)
    }

    fn subject(pvs: Vec<PropertyValueCollection>) -> Subject {
        Subject::new(PageIdentity::new("Some Page"), pvs)
    }

    #[test]
    fn test_no_collections_no_event() {
        let s = subject(vec![]);
        assert!(EventExtractor::default().extract(&s).unwrap().is_none());
    }

    #[test]
    fn test_non_date_collections_ignored() {
        let s = subject(vec![PropertyValueCollection::new(
            PropertyDescriptor::text("Start date"),
            vec![RawValue::from("2019-01-01")],
        )]);
        assert!(EventExtractor::default().extract(&s).unwrap().is_none());
    }

    #[test]
    fn test_labels_without_type_opt_in() {
        let config = TimelineConfig { recognize_labels_without_type: true, ..Default::default() };
        let s = subject(vec![PropertyValueCollection::new(
            PropertyDescriptor::text("Start date"),
            vec![RawValue::from("2019-01-01")],
        )]);
        let event = EventExtractor::new(&config).extract(&s).unwrap().unwrap();
        assert_eq!(event.start_date().sort_key(), (2019, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_start_only() {
        let s = subject(vec![dates("Has date", vec![date(2019, 8, 2)])]);
        let event = EventExtractor::default().extract(&s).unwrap().unwrap();
        assert_eq!(event.start_date().year(), 2019);
        assert!(event.end_date().is_none());
        assert_eq!(event.subject().page().display_title(), "Some Page");
    }

    #[test]
    fn test_first_value_of_collection_wins() {
        let s = subject(vec![dates("Has date", vec![date(2001, 1, 1), date(1999, 1, 1)])]);
        let event = EventExtractor::default().extract(&s).unwrap().unwrap();
        assert_eq!(event.start_date().year(), 2001);
    }

    #[test]
    fn test_positional_end_date() {
        let s = subject(vec![
            dates("Has date", vec![date(2019, 8, 2)]),
            dates("Other date", vec![date(2019, 8, 5)]),
        ]);
        let event = EventExtractor::default().extract(&s).unwrap().unwrap();
        assert_eq!(event.end_date().map(|d| d.day()), Some(5));

        let config = TimelineConfig { positional_end_date: false, ..Default::default() };
        let event = EventExtractor::new(&config).extract(&s).unwrap().unwrap();
        assert!(event.end_date().is_none());
    }

    #[test]
    fn test_end_label_beats_position() {
        let s = subject(vec![
            dates("Has date", vec![date(2019, 8, 2)]),
            dates("Milestone", vec![date(2019, 8, 3)]),
            dates("End date", vec![date(2019, 8, 5)]),
        ]);
        let event = EventExtractor::default().extract(&s).unwrap().unwrap();
        assert_eq!(event.end_date().map(|d| d.day()), Some(5));
    }

    #[test]
    fn test_end_label_before_start_in_scan_order() {
        let s = subject(vec![
            dates("end date", vec![date(2019, 8, 5)]),
            dates("Has date", vec![date(2019, 8, 2)]),
        ]);
        let event = EventExtractor::default().extract(&s).unwrap().unwrap();
        assert_eq!(event.start_date().day(), 2);
        assert_eq!(event.end_date().map(|d| d.day()), Some(5));
    }

    #[test]
    fn test_start_label_after_unlabelled_date_is_skipped() {
        let s = subject(vec![
            dates("Has date", vec![date(2019, 1, 1)]),
            dates("Start date", vec![date(2019, 6, 1)]),
        ]);
        let event = EventExtractor::default().extract(&s).unwrap().unwrap();
        assert_eq!(event.start_date().sort_key(), (2019, 1, 1, 0, 0, 0));
        // A start-labelled collection never fills the end role.
        assert!(event.end_date().is_none());
    }

    #[test]
    fn test_third_unlabelled_date_is_skipped() {
        let s = subject(vec![
            dates("A", vec![date(2019, 1, 1)]),
            dates("B", vec![date(2019, 2, 1)]),
            dates("C", vec![date(2019, 3, 1)]),
        ]);
        let event = EventExtractor::default().extract(&s).unwrap().unwrap();
        assert_eq!(event.start_date().month(), 1);
        assert_eq!(event.end_date().map(|d| d.month()), Some(2));
    }

    #[test]
    fn test_uri_in_date_collection_is_malformed() {
        let s = subject(vec![dates("Has date", vec![RawValue::Uri("https://nasa.gov".into())])]);
        match EventExtractor::default().extract(&s) {
            Err(Error::MalformedTemporal { label, reason }) => {
                assert_eq!(label, "Has date");
                assert!(reason.contains("URI"), "reason: {reason}");
            }
            other => panic!("expected MalformedTemporal, got {other:?}"),
        }
    }

    #[test]
    fn test_only_end_date_is_no_event() {
        let s = subject(vec![dates("End date", vec![date(2019, 8, 5)])]);
        assert!(EventExtractor::default().extract(&s).unwrap().is_none());
    }

    #[test]
    fn test_two_start_labelled_collections_first_wins() {
        let s = subject(vec![
            dates("Start date", vec![date(2010, 1, 1)]),
            dates("Start", vec![date(2020, 1, 1)]),
        ]);
        let event = EventExtractor::default().extract(&s).unwrap().unwrap();
        assert_eq!(event.start_date().year(), 2010);
        // Explicitly start-labelled collections never fall back to end.
        assert!(event.end_date().is_none());
    }

    #[test]
    fn test_empty_collection_is_not_found() {
        let s = subject(vec![
            dates("Start date", vec![]),
            dates("Has date", vec![date(2015, 3, 1)]),
        ]);
        let event = EventExtractor::default().extract(&s).unwrap().unwrap();
        assert_eq!(event.start_date().year(), 2015);

        let s = subject(vec![dates("Has date", vec![])]);
        assert!(EventExtractor::default().extract(&s).unwrap().is_none());
    }

    #[test]
    fn test_malformed_start_is_error() {
        let s = subject(vec![dates("Has date", vec![RawValue::Number(3.0)])]);
        let err = EventExtractor::default().extract(&s).unwrap_err();
        assert!(matches!(err, Error::MalformedTemporal { ref label, .. } if label == "Has date"));

        let s = subject(vec![dates("Has date", vec![RawValue::from("not a date")])]);
        assert!(EventExtractor::default().extract(&s).is_err());
    }

    #[test]
    fn test_malformed_end_is_error() {
        let s = subject(vec![
            dates("Has date", vec![date(2019, 8, 2)]),
            dates("End date", vec![RawValue::Page(PageIdentity::new("Oops"))]),
        ]);
        assert!(EventExtractor::default().extract(&s).is_err());
    }

    #[test]
    fn test_text_dates_are_parsed() {
        let s = subject(vec![dates("Has date", vec![RawValue::from("1969-07-20T20:17")])]);
        let event = EventExtractor::default().extract(&s).unwrap().unwrap();
        assert_eq!(event.start_date().sort_key(), (1969, 7, 20, 20, 17, 0));
    }

    #[test]
    fn test_custom_date_type() {
        let config = TimelineConfig {
            date_type_ids: vec!["_dat".into(), "_edtf".into()],
            ..Default::default()
        };
        let s = subject(vec![PropertyValueCollection::new(
            PropertyDescriptor::new("Era", "_edtf"),
            vec![date(1200, 1, 1)],
        )]);
        assert!(EventExtractor::new(&config).extract(&s).unwrap().is_some());
        assert!(EventExtractor::default().extract(&s).unwrap().is_none());
    }

    #[test]
    fn test_extract_all_preserves_order() {
        let subjects: SubjectCollection = vec![
            Subject::new(PageIdentity::new("B"), vec![dates("d", vec![date(2000, 1, 1)])]),
            Subject::new(PageIdentity::new("Undated"), vec![]),
            Subject::new(PageIdentity::new("A"), vec![dates("d", vec![date(1990, 1, 1)])]),
        ]
        .into_iter()
        .collect();
        let events = EventExtractor::default().extract_all(&subjects).unwrap();
        let titles: Vec<_> = events.iter().map(|e| e.subject().page().display_title()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }
}
