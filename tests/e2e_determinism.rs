//! Ordering and determinism properties of the pipeline.
//!
//! Generated result sets mix dated and undated subjects; output must follow
//! input order restricted to dated subjects, and repeated or concurrent
//! builds must serialize identically.

use modern_timeline::{
    JsonBuilder, PageIdentity, PropertyDescriptor, PropertyValueCollection, RawValue,
    SimpleSlidePresenter, Subject, SubjectCollection, TemporalValue,
};
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = TemporalValue> {
    (1i32..3000, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60)
        .prop_map(|(y, mo, d, h, mi, s)| TemporalValue::gregorian(y, mo, d, h, mi, s).unwrap())
}

/// A subject named by its index; `None` means no date properties.
fn arb_subject(index: usize) -> impl Strategy<Value = Subject> {
    (
        proptest::option::of((arb_date(), proptest::option::of(arb_date()))),
        "[a-z ]{0,12}",
    )
        .prop_map(move |(dates, note)| {
            let mut pvs = Vec::new();
            pvs.push(PropertyValueCollection::new(
                PropertyDescriptor::text("Note"),
                vec![RawValue::Text(note)],
            ));
            if let Some((start, end)) = dates {
                pvs.push(PropertyValueCollection::new(
                    PropertyDescriptor::time("Has date"),
                    vec![start.into()],
                ));
                if let Some(end) = end {
                    pvs.push(PropertyValueCollection::new(
                        PropertyDescriptor::time("End date"),
                        vec![end.into()],
                    ));
                }
            }
            Subject::new(PageIdentity::new(format!("Page {index}")), pvs)
        })
}

fn arb_collection() -> impl Strategy<Value = SubjectCollection> {
    (0usize..12).prop_flat_map(|n| {
        (0..n)
            .map(arb_subject)
            .collect::<Vec<_>>()
            .prop_map(SubjectCollection::new)
    })
}

fn is_dated(subject: &Subject) -> bool {
    subject.property_values().iter().any(|pv| pv.label() == "Has date")
}

proptest! {
    #[test]
    fn prop_events_follow_input_order(input in arb_collection()) {
        let builder = JsonBuilder::new(SimpleSlidePresenter::new());
        let doc = builder.build_timeline_json(&input).unwrap();

        let expected: Vec<String> = input
            .iter()
            .filter(|s| is_dated(s))
            .map(|s| s.page().display_title())
            .collect();
        let actual: Vec<String> = doc.events.iter().map(|e| e.text.headline.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_end_date_present_iff_end_collection(input in arb_collection()) {
        let builder = JsonBuilder::new(SimpleSlidePresenter::new());
        let doc = builder.build_timeline_json(&input).unwrap();
        let dated: Vec<&Subject> = input.iter().filter(|s| is_dated(s)).collect();

        prop_assert_eq!(dated.len(), doc.events.len());
        for (subject, event) in dated.iter().zip(&doc.events) {
            prop_assert_eq!(subject.get("End date").is_some(), event.end_date.is_some());
            prop_assert!(event.media.is_none());
        }
    }

    #[test]
    fn prop_builds_are_byte_identical(input in arb_collection()) {
        let builder = JsonBuilder::new(SimpleSlidePresenter::new());
        let first = builder.to_json_string(&input).unwrap();
        let second = builder.to_json_string(&input).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_parallel_builds_agree() {
    let input = SubjectCollection::new(
        (1..=50)
            .map(|i| {
                Subject::new(
                    PageIdentity::new(format!("Event {i}")),
                    vec![PropertyValueCollection::new(
                        PropertyDescriptor::time("Has date"),
                        vec![TemporalValue::ymd(1900 + i, 1 + (i as u32 % 12), 1).unwrap().into()],
                    )],
                )
            })
            .collect(),
    );
    let builder = JsonBuilder::new(SimpleSlidePresenter::new());
    let expected = builder.to_json_string(&input).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| builder.to_json_string(&input).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
